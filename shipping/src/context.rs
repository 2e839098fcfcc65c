use log::debug;
use rust_decimal::Decimal;

use crate::{
    strategies::{ShippingMethod, ShippingStrategy},
    ShippingError, ShippingResult,
};

/// Holds the selected shipping strategy and delegates cost computations to it.
#[derive(Default)]
pub struct DeliveryContext {
    strategy: Option<Box<dyn ShippingStrategy>>,
}

impl DeliveryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn ShippingStrategy>) {
        debug!("Shipping strategy set to {}", strategy.name());
        self.strategy = Some(strategy);
    }

    pub fn set_method(&mut self, method: ShippingMethod) {
        self.set_strategy(method.strategy());
    }

    pub fn strategy_name(&self) -> Option<&str> {
        self.strategy.as_ref().map(|strategy| strategy.name())
    }

    /// The strategy's result is returned as is, rounding is left to the caller.
    /// Amounts too large for a [`Decimal`] give [`ShippingError::Overflow`].
    pub fn compute_cost(&self, weight: Decimal, distance: Decimal) -> ShippingResult {
        let strategy = self.strategy.as_ref().ok_or_else(|| {
            ShippingError::InvalidOperation("no shipping strategy selected".to_string())
        })?;

        let cost = strategy.calculate_cost(weight, distance)?;
        debug!(
            "{} cost for weight={weight}, distance={distance}: {cost}",
            strategy.name()
        );
        Ok(cost)
    }
}
