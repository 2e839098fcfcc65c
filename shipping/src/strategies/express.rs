use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::ShippingResult;

use super::{linear_cost, ShippingStrategy};

const WEIGHT_RATE: Decimal = dec!(0.75);
const DISTANCE_RATE: Decimal = dec!(0.2);
const EXPRESS_FEE: Decimal = dec!(10);

pub struct ExpressShipping;

impl ShippingStrategy for ExpressShipping {
    fn name(&self) -> &'static str {
        "Express"
    }

    fn calculate_cost(&self, weight: Decimal, distance: Decimal) -> ShippingResult {
        linear_cost(weight, distance, WEIGHT_RATE, DISTANCE_RATE, EXPRESS_FEE)
    }
}

#[cfg(test)]
mod tests {
    use common_test::{get_seeded_rng, random_quantities};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::ShippingStrategy;

    use super::ExpressShipping;

    #[test]
    fn test_calculate_cost() {
        assert_eq!(Ok(dec!(21.5)), ExpressShipping.calculate_cost(dec!(10), dec!(20)));
        assert_eq!(
            Ok(dec!(10)),
            ExpressShipping.calculate_cost(dec!(0), dec!(0)),
            "Should charge the flat fee for an empty parcel"
        );
    }

    #[test]
    fn test_calculate_cost_with_largest_amounts() {
        assert!(
            ExpressShipping
                .calculate_cost(Decimal::MAX, Decimal::MAX)
                .is_ok(),
            "Should stay representable since the rates add up to less than 1"
        );
    }

    #[test]
    fn test_calculate_cost_follows_formula() {
        let mut rng = get_seeded_rng().unwrap();

        for (weight, distance) in random_quantities(&mut rng, 200, 1000) {
            assert_eq!(
                Ok(dec!(0.75) * weight + dec!(0.2) * distance + dec!(10)),
                ExpressShipping.calculate_cost(weight, distance)
            );
        }
    }
}
