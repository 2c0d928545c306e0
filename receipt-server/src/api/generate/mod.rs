//! Receipt Generation Routes
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /generate | POST | 生成收据 PNG |
//! | /api/generate | POST | 同上 (别名) |

mod handler;

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::post,
};
use http::{StatusCode, header};
use shared::ReceiptId;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/generate", post(handler::generate))
        .route("/api/generate", post(handler::generate))
}

/// Rendered receipt returned as a PNG download
pub struct ReceiptPng {
    pub id: ReceiptId,
    pub png: Vec<u8>,
}

impl IntoResponse for ReceiptPng {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.id.file_name());
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "image/png".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.png,
        )
            .into_response()
    }
}
