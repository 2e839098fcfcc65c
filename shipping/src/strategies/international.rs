use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::ShippingResult;

use super::{linear_cost, ShippingStrategy};

const WEIGHT_RATE: Decimal = dec!(1.0);
const DISTANCE_RATE: Decimal = dec!(0.5);
const CUSTOMS_FEE: Decimal = dec!(15);

pub struct InternationalShipping;

impl ShippingStrategy for InternationalShipping {
    fn name(&self) -> &'static str {
        "International"
    }

    fn calculate_cost(&self, weight: Decimal, distance: Decimal) -> ShippingResult {
        linear_cost(weight, distance, WEIGHT_RATE, DISTANCE_RATE, CUSTOMS_FEE)
    }
}
