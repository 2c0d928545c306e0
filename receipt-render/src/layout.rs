//! Fixed overlay positions
//!
//! Coordinates are pixels from the template's top-left corner and match the
//! printed receipt form; they are configuration, not runtime data.

/// Placement of one overlay field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPosition {
    pub x: i32,
    pub y: i32,
    pub font_size: f32,
}

impl FieldPosition {
    const fn new(x: i32, y: i32, font_size: f32) -> Self {
        Self { x, y, font_size }
    }
}

/// Side length of a payment-method checkbox
pub const CHECKBOX_SIZE: i32 = 12;

/// Drawn before the amount, separated by a space
pub const CURRENCY_LABEL: &str = "Rs.";

/// Named overlay fields of the receipt form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ReceiptId,
    Date,
    ReceivedFrom,
    ForField,
    ChequeNo,
    Amount,
    PaymentMethodCash,
    PaymentMethodCheque,
}

impl Field {
    pub const fn position(&self) -> FieldPosition {
        match self {
            Field::ReceiptId => FieldPosition::new(85, 95, 12.0),
            Field::Date => FieldPosition::new(460, 95, 12.0),
            Field::ReceivedFrom => FieldPosition::new(130, 185, 12.0),
            Field::ForField => FieldPosition::new(130, 235, 12.0),
            Field::ChequeNo => FieldPosition::new(440, 285, 12.0),
            Field::Amount => FieldPosition::new(155, 335, 12.0),
            Field::PaymentMethodCash => FieldPosition::new(155, 380, 10.0),
            Field::PaymentMethodCheque => FieldPosition::new(245, 380, 10.0),
        }
    }
}
