//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | API 信息 |
//! | /health | GET | 健康检查 |
//! | /api/health | GET | 健康检查 (别名) |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "timestamp": "2024-01-15T10:30:00+08:00",
//!   "version": "0.1.0"
//! }
//! ```

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/health", get(health))
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 状态 (healthy)
    status: &'static str,
    /// RFC3339 本地时间
    timestamp: String,
    /// 版本号
    version: &'static str,
}

/// API 信息响应
#[derive(Debug, Serialize)]
pub struct RootResponse {
    message: &'static str,
    version: &'static str,
    endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    generate: &'static str,
    health: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Local::now().to_rfc3339(),
        version: VERSION,
    })
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Receipt Generator API",
        version: VERSION,
        endpoints: Endpoints {
            generate: "POST /api/generate",
            health: "GET /api/health",
        },
    })
}
