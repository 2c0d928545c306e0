//! Unified error system
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: JSON body written for every error response
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 5xxx: Payment errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::InvalidAmount, "Amount must be greater than 0")
//!     .with_detail("field", "amount");
//!
//! let body = ErrorBody::from_error(&err);
//! assert_eq!(body.code, 5006);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
