//! Unified error codes for the receipt generator
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 5xxx: Payment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can match on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 5xxx: Payment ====================
    /// Neither cash nor cheque was selected
    PaymentMethodRequired = 5003,
    /// Amount is not a positive number
    InvalidAmount = 5006,
    /// Cheque payment without a cheque number
    ChequeNumberRequired = 5007,

    // ==================== 9xxx: System ====================
    /// Unexpected server-side failure outside rendering
    InternalError = 9001,
    /// Template, font or draw failure while composing the receipt
    RenderFailed = 9203,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Payment
            ErrorCode::PaymentMethodRequired => "At least one payment method must be selected",
            ErrorCode::InvalidAmount => "Invalid amount format",
            ErrorCode::ChequeNumberRequired => {
                "Cheque number is required when cheque payment is selected"
            }

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::RenderFailed => "Error generating image",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Payment
            5003 => Ok(ErrorCode::PaymentMethodRequired),
            5006 => Ok(ErrorCode::InvalidAmount),
            5007 => Ok(ErrorCode::ChequeNumberRequired),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9203 => Ok(ErrorCode::RenderFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
