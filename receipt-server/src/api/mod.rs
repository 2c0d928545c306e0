//! HTTP API
//!
//! - [`health`] - 健康检查和 API 信息
//! - [`generate`] - 收据生成

pub mod generate;
pub mod health;
