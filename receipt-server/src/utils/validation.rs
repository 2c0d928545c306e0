//! Input validation helpers
//!
//! Receipt request checks and the text length limits they enforce.
//! Checks run in a fixed order and stop at the first failure:
//! payment method, amount, required text, cheque number, lengths.

use std::str::FromStr;

use rust_decimal::Decimal;
use shared::{AppError, ErrorCode, ReceiptData};

// ── Text length limits ──────────────────────────────────────────────

/// Names and descriptions: received_from, for_field
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: date, amount, cheque number, receipt id
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate a whole receipt request
pub fn validate_receipt(data: &ReceiptData) -> Result<(), AppError> {
    if !data.has_payment_method() {
        return Err(AppError::new(ErrorCode::PaymentMethodRequired));
    }

    validate_amount(&data.amount)?;

    validate_present(&data.date, "date")?;
    validate_present(&data.received_from, "received_from")?;
    validate_present(&data.for_field, "for_field")?;

    if data.payment_method_cheque && data.cheque_number().is_none() {
        return Err(AppError::new(ErrorCode::ChequeNumberRequired).with_detail("field", "cheque_no"));
    }

    validate_length(&data.date, "date", MAX_SHORT_TEXT_LEN)?;
    validate_length(&data.received_from, "received_from", MAX_NAME_LEN)?;
    validate_length(&data.for_field, "for_field", MAX_NAME_LEN)?;
    validate_length(&data.amount, "amount", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&data.cheque_no, "cheque_no", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&data.receipt_id, "receipt_id", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

/// Validate a monetary amount, accepting plain decimal or scientific notation
///
/// The value must be strictly positive. Amounts `Decimal` cannot hold exactly
/// (more than 28 significant digits, or so small they round to zero) are
/// judged on their `f64` value instead; infinities and NaN are rejected.
pub fn validate_amount(raw: &str) -> Result<(), AppError> {
    let trimmed = raw.trim();
    let decimal = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed));

    let positive = match decimal {
        Ok(value) if !value.is_zero() => value.is_sign_positive(),
        _ => match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => value > 0.0,
            _ => {
                return Err(AppError::new(ErrorCode::InvalidAmount).with_detail("field", "amount"));
            }
        },
    };

    if !positive {
        return Err(
            AppError::with_message(ErrorCode::InvalidAmount, "Amount must be greater than 0")
                .with_detail("field", "amount"),
        );
    }
    Ok(())
}

/// Validate that a required string is not blank
pub fn validate_present(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    Ok(())
}

/// Validate that a string is within the length limit (in characters)
pub fn validate_length(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} is too long ({len} chars, max {max_len})"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_length(v, field, max_len),
        None => Ok(()),
    }
}
