mod express;
mod international;
mod night;
mod standard;

pub use express::ExpressShipping;
pub use international::InternationalShipping;
pub use night::{NightShipping, NIGHT_FEE};
pub use standard::StandardShipping;

use rust_decimal::Decimal;
use strum::{Display, EnumIter, EnumString, FromRepr};

use crate::{ShippingError, ShippingResult};

pub trait ShippingStrategy {
    fn name(&self) -> &'static str;

    /// `weight` and `distance` are expected to be non-negative, callers validate them.
    fn calculate_cost(&self, weight: Decimal, distance: Decimal) -> ShippingResult;
}

/// `weight * weight_rate + distance * distance_rate + fee`, failing instead of overflowing.
pub(crate) fn linear_cost(
    weight: Decimal,
    distance: Decimal,
    weight_rate: Decimal,
    distance_rate: Decimal,
    fee: Decimal,
) -> ShippingResult {
    let weight_cost = weight.checked_mul(weight_rate);
    let distance_cost = distance.checked_mul(distance_rate);
    weight_cost
        .zip(distance_cost)
        .and_then(|(w, d)| w.checked_add(d))
        .and_then(|cost| cost.checked_add(fee))
        .ok_or(ShippingError::Overflow)
}

/// The fixed set of available strategies, identified by their menu number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum ShippingMethod {
    Standard = 1,
    Express = 2,
    International = 3,
    Night = 4,
}

impl ShippingMethod {
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Accepts either the numeric id or the name of the method.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        input
            .parse::<u8>()
            .ok()
            .and_then(Self::from_repr)
            .or_else(|| input.parse().ok())
    }

    pub fn strategy(self) -> Box<dyn ShippingStrategy> {
        match self {
            ShippingMethod::Standard => Box::new(StandardShipping),
            ShippingMethod::Express => Box::new(ExpressShipping),
            ShippingMethod::International => Box::new(InternationalShipping),
            ShippingMethod::Night => Box::new(NightShipping::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use strum::IntoEnumIterator;

    use crate::ShippingError;

    use super::{linear_cost, ShippingMethod};

    #[test]
    fn test_linear_cost_overflow() {
        // When
        let result = linear_cost(Decimal::MAX, dec!(0), dec!(1), dec!(0.5), dec!(15));

        // Then
        assert_eq!(
            Err(ShippingError::Overflow),
            result,
            "Should report an overflow instead of panicking"
        );
        assert_eq!(
            Err(ShippingError::Overflow),
            linear_cost(dec!(0), Decimal::MAX, dec!(0.1), dec!(2), dec!(0))
        );
        assert_eq!(
            Ok(dec!(3.5)),
            linear_cost(dec!(1), dec!(2), dec!(0.5), dec!(1.5), dec!(0))
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Some(ShippingMethod::Standard), ShippingMethod::parse("1"));
        assert_eq!(Some(ShippingMethod::Night), ShippingMethod::parse(" 4 "));
        assert_eq!(
            Some(ShippingMethod::International),
            ShippingMethod::parse("international"),
            "Should parse names whatever the case"
        );
        assert_eq!(None, ShippingMethod::parse("5"));
        assert_eq!(None, ShippingMethod::parse("0"));
        assert_eq!(None, ShippingMethod::parse("teleport"));
    }

    #[test]
    fn test_ids_and_names() {
        // When
        let methods = ShippingMethod::iter()
            .map(|method| (method.id(), method.to_string()))
            .collect::<Vec<_>>();

        // Then
        assert_eq!(
            vec![
                (1, "Standard".to_string()),
                (2, "Express".to_string()),
                (3, "International".to_string()),
                (4, "Night".to_string()),
            ],
            methods
        );
    }

    #[test]
    fn test_strategy_matches_method() {
        assert!(
            ShippingMethod::iter().all(|method| method.strategy().name() == method.to_string()),
            "Should build the strategy named after the method"
        );
    }
}
