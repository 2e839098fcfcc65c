mod context;
mod error;
pub mod strategies;

pub use context::DeliveryContext;
pub use error::{ShippingError, ShippingResult};
pub use rust_decimal::Decimal;
pub use strategies::{ShippingMethod, ShippingStrategy};
