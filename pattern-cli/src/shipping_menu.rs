use std::{io::BufRead, str::FromStr};

use common::sink::Sink;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use shipping::{DeliveryContext, ShippingMethod};
use strum::IntoEnumIterator;

use crate::{console::Console, AppError};

const MENU: &str = "\nChoose an action:
1 - Choose a shipping strategy
2 - Calculate the cost with the current strategy
3 - Show available strategies
0 - Exit";

/// Interactive front end of the delivery cost calculator.
pub struct ShippingMenu<R> {
    console: Console<R>,
    context: DeliveryContext,
}

impl<R: BufRead> ShippingMenu<R> {
    pub fn new(input: R, out: Sink) -> Self {
        ShippingMenu {
            console: Console::new(input, out),
            context: DeliveryContext::new(),
        }
    }

    pub fn context(&self) -> &DeliveryContext {
        &self.context
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        self.console.say("Delivery cost calculator")?;
        loop {
            self.console.say(MENU)?;
            let Some(choice) = self.console.ask("Your choice: ")? else {
                break;
            };
            match choice.as_str() {
                "0" => break,
                "1" => self.choose_strategy()?,
                "2" => self.calculate()?,
                "3" => self.show_strategies()?,
                other => {
                    debug!("Unknown menu choice '{other}'");
                    self.console.say("Invalid choice, try again.")?
                }
            }
        }
        self.console.say("Exiting.")
    }

    fn show_strategies(&self) -> Result<(), AppError> {
        self.console.say("\nAvailable strategies:")?;
        for method in ShippingMethod::iter() {
            self.console.say(format!("{} - {method}", method.id()))?;
        }
        Ok(())
    }

    fn choose_strategy(&mut self) -> Result<(), AppError> {
        self.show_strategies()?;
        let Some(answer) = self.console.ask("Strategy number: ")? else {
            return Ok(());
        };

        match ShippingMethod::parse(&answer) {
            Some(method) => {
                self.context.set_method(method);
                self.console.say(format!("Strategy set: {method}"))
            }
            None => self.console.say("Invalid strategy choice."),
        }
    }

    fn calculate(&mut self) -> Result<(), AppError> {
        let Some(answer) = self.console.ask("Parcel weight (kg): ")? else {
            return Ok(());
        };
        let Some(weight) = parse_quantity(&answer) else {
            return self.console.say("Error: weight must be a number >= 0.");
        };

        let Some(answer) = self.console.ask("Delivery distance (km): ")? else {
            return Ok(());
        };
        let Some(distance) = parse_quantity(&answer) else {
            return self.console.say("Error: distance must be a number >= 0.");
        };

        match self.context.compute_cost(weight, distance) {
            Ok(cost) => self
                .console
                .say(format!("Shipping cost: {}", format_cost(cost))),
            Err(err) => self.console.say(format!("Error: {err}")),
        }
    }
}

/// Non-negative decimal, `None` otherwise.
fn parse_quantity(input: &str) -> Option<Decimal> {
    Decimal::from_str(input.trim())
        .ok()
        .filter(|quantity| *quantity >= Decimal::ZERO)
}

fn format_cost(cost: Decimal) -> String {
    format!(
        "{:.2}",
        cost.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
