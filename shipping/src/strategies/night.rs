use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::ShippingResult;

use super::{
    linear_cost,
    standard::{DISTANCE_RATE, WEIGHT_RATE},
    ShippingStrategy,
};

/// Flat surcharge added on top of the standard rates.
pub const NIGHT_FEE: Decimal = dec!(7.5);

pub struct NightShipping {
    night_fee: Decimal,
}

impl Default for NightShipping {
    fn default() -> Self {
        NightShipping {
            night_fee: NIGHT_FEE,
        }
    }
}

impl ShippingStrategy for NightShipping {
    fn name(&self) -> &'static str {
        "Night"
    }

    fn calculate_cost(&self, weight: Decimal, distance: Decimal) -> ShippingResult {
        linear_cost(weight, distance, WEIGHT_RATE, DISTANCE_RATE, self.night_fee)
    }
}
