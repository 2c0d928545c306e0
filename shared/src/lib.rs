//! Shared types for the receipt generator
//!
//! Common types used by the renderer and the HTTP server: the receipt
//! data model and the unified error / response structures.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{ReceiptData, ReceiptId};
