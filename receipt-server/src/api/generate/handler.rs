use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use shared::{AppError, AppResult, ErrorCode, ReceiptData};
use tracing::{error, info, instrument, warn};

use super::ReceiptPng;
use crate::core::ServerState;
use crate::utils::validation::validate_receipt;

/// POST /api/generate - 校验、分配编号、渲染
#[instrument(skip_all)]
pub async fn generate(
    State(state): State<ServerState>,
    payload: Result<Json<ReceiptData>, JsonRejection>,
) -> AppResult<ReceiptPng> {
    let Json(data) = payload.map_err(map_rejection)?;

    validate_receipt(&data)?;

    let allocation = match data.requested_id() {
        Some(candidate) => state.counter.ingest(candidate).await,
        None => state.counter.allocate().await,
    };
    if allocation.origin.is_defaulted() {
        warn!(receipt_id = %allocation.id, origin = ?allocation.origin, "Receipt counter defaulted");
    } else {
        info!(receipt_id = %allocation.id, origin = ?allocation.origin, "Receipt id resolved");
    }

    let renderer = state.renderer.clone();
    let id = allocation.id.clone();
    let rendered = tokio::task::spawn_blocking(move || renderer.render(&data, &id))
        .await
        .map_err(|e| {
            error!(error = %e, "Render task failed");
            AppError::internal("Render task did not complete")
        })?;

    let png = rendered.map_err(|e| {
        error!(receipt_id = %allocation.id, error = %e, "Failed to render receipt");
        AppError::render_failed()
    })?;

    info!(receipt_id = %allocation.id, bytes = png.len(), "Receipt generated");
    Ok(ReceiptPng {
        id: allocation.id,
        png,
    })
}

/// Map an axum JSON extraction failure to a 4xx AppError
fn map_rejection(rejection: JsonRejection) -> AppError {
    let message = rejection.body_text();
    match rejection {
        JsonRejection::JsonSyntaxError(_) => AppError::with_message(ErrorCode::InvalidFormat, message),
        JsonRejection::MissingJsonContentType(_) => AppError::invalid_request(message),
        _ => AppError::validation(message),
    }
}
