//! Router assembly
//!
//! [`build_router`] registers the API routes; [`build_app`] adds the
//! middleware stack and the optional static file fallback.

use axum::Router;
use axum::middleware;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Receipt API
        .merge(api::generate::router())
        // Health API + root info
        .merge(api::health::router())
}

/// Build a fully configured application with all middleware
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    let mut router = build_router();

    // Static files for unmatched paths
    if let Some(dir) = &state.config.static_dir {
        if dir.is_dir() {
            tracing::info!(dir = %dir.display(), "Serving static files");
            router = router.fallback_service(ServeDir::new(dir));
        } else {
            tracing::warn!(dir = %dir.display(), "STATIC_DIR is not a directory, static files disabled");
        }
    }

    router
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(middleware::from_fn(log_request))
        // Trace - Request tracing
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
