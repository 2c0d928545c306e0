//! Receipt Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Receipt form data, one per generate request
///
/// The two payment flags are independent here; "at least one selected" is a
/// request validation rule, not a model invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptData {
    /// Caller-supplied receipt number (ingested into the counter when numeric)
    #[serde(default)]
    pub receipt_id: Option<String>,
    pub date: String,
    pub received_from: String,
    pub for_field: String,
    #[serde(default)]
    pub cheque_no: Option<String>,
    /// Amount as entered, drawn verbatim after the currency label
    pub amount: String,
    #[serde(default)]
    pub payment_method_cash: bool,
    #[serde(default)]
    pub payment_method_cheque: bool,
}

impl ReceiptData {
    /// Caller-supplied receipt id, ignoring empty strings
    pub fn requested_id(&self) -> Option<&str> {
        self.receipt_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Cheque number, ignoring empty strings
    pub fn cheque_number(&self) -> Option<&str> {
        self.cheque_no.as_deref().filter(|no| !no.is_empty())
    }

    pub fn has_payment_method(&self) -> bool {
        self.payment_method_cash || self.payment_method_cheque
    }
}

/// Receipt identifier
///
/// Allocated ids are the counter value zero-padded to 4 digits (`0001`);
/// ingested ids keep the caller's spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Format a counter value as a receipt id
    pub fn from_counter(counter: u64) -> Self {
        Self(format!("{:04}", counter))
    }

    /// Wrap a caller-supplied id as-is
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Download file name, e.g. `receipt_0001.png`
    pub fn file_name(&self) -> String {
        format!("receipt_{}.png", self.0)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
