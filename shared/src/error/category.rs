//! Error category classification

use super::codes::ErrorCode;

/// Error category, derived from the code range
///
/// - 0xxx: request shape and field errors
/// - 5xxx: payment rules
/// - 9xxx: server-side failures, logged when turned into a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    General,
    Payment,
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            5000..6000 => Self::Payment,
            9000.. => Self::System,
            _ => Self::General,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
