use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::ShippingResult;

use super::{linear_cost, ShippingStrategy};

pub(super) const WEIGHT_RATE: Decimal = dec!(0.5);
pub(super) const DISTANCE_RATE: Decimal = dec!(0.1);

pub struct StandardShipping;

impl ShippingStrategy for StandardShipping {
    fn name(&self) -> &'static str {
        "Standard"
    }

    fn calculate_cost(&self, weight: Decimal, distance: Decimal) -> ShippingResult {
        linear_cost(weight, distance, WEIGHT_RATE, DISTANCE_RATE, Decimal::ZERO)
    }
}
