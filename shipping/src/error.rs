use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShippingError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Cost overflow: weight or distance is too large")]
    Overflow,
}

pub type ShippingResult = Result<Decimal, ShippingError>;
