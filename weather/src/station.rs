use std::{ops::RangeInclusive, rc::Rc};

use common::subject_observer::{
    contains, NotificationFailure, Observer, SharedObserver, SharedObservers, Subject,
};
use log::{debug, error, info, warn};

pub type WeatherObserver = SharedObserver<WeatherStation, f32>;

pub const DEFAULT_PLAUSIBLE_RANGE: RangeInclusive<f32> = -100.0..=100.0;

/// Outcome of a temperature change.
#[derive(Debug)]
pub struct TemperatureUpdate {
    pub temperature: f32,
    /// `false` when the value fell outside the plausible range; it is stored anyway.
    pub plausible: bool,
    pub failures: Vec<NotificationFailure>,
}

pub struct WeatherStation {
    observers: SharedObservers<Self, f32>,
    temperature: f32,
    plausible_range: RangeInclusive<f32>,
}

impl Default for WeatherStation {
    fn default() -> Self {
        Self::new(DEFAULT_PLAUSIBLE_RANGE)
    }
}

impl Subject<f32> for WeatherStation {
    fn register_observer(&mut self, observer: WeatherObserver) -> bool {
        if contains(&self.observers, &observer) {
            info!("Observer '{}' is already registered", observer.name());
            return false;
        }
        debug!("Registering observer '{}'", observer.name());
        self.observers.push(observer);
        true
    }

    fn unregister_observer(&mut self, observer: &WeatherObserver) -> bool {
        let count = self.observers.len();
        self.observers.retain(|obs| !Rc::ptr_eq(obs, observer));
        let removed = count != self.observers.len();
        if removed {
            debug!("Unregistered observer '{}'", observer.name());
        }
        removed
    }

    fn notify_observers(&self, event: f32) -> Vec<NotificationFailure> {
        let mut failures = vec![];
        for obs in &self.observers {
            if let Err(error) = obs.update(self, event) {
                error!("Failed to notify '{}': {}", obs.name(), error);
                failures.push(NotificationFailure {
                    observer: obs.name().to_string(),
                    error,
                });
            }
        }
        failures
    }
}

impl WeatherStation {
    pub fn new(plausible_range: RangeInclusive<f32>) -> Self {
        WeatherStation {
            observers: vec![],
            temperature: 0.0,
            plausible_range,
        }
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn plausible_range(&self) -> &RangeInclusive<f32> {
        &self.plausible_range
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn is_registered(&self, observer: &WeatherObserver) -> bool {
        contains(&self.observers, observer)
    }

    /// Names in notification order.
    pub fn observer_names(&self) -> Vec<String> {
        self.observers
            .iter()
            .map(|obs| obs.name().to_string())
            .collect()
    }

    /// First registered observer whose name matches, ignoring case.
    pub fn find_observer(&self, name: &str) -> Option<WeatherObserver> {
        let name = name.to_lowercase();
        self.observers
            .iter()
            .find(|obs| obs.name().to_lowercase() == name)
            .cloned()
    }

    pub fn remove_observer_named(&mut self, name: &str) -> Option<WeatherObserver> {
        let observer = self.find_observer(name)?;
        self.unregister_observer(&observer).then_some(observer)
    }

    pub fn set_temperature(&mut self, temperature: f32) -> TemperatureUpdate {
        let plausible = self.plausible_range.contains(&temperature);
        if !plausible {
            warn!(
                "Unusual temperature {temperature}°C, expected within [{}, {}]",
                self.plausible_range.start(),
                self.plausible_range.end()
            );
        }

        self.temperature = temperature;
        debug!(
            "Temperature set to {temperature}°C, notifying {} observer(s)",
            self.observers.len()
        );
        let failures = self.notify_observers(temperature);

        TemperatureUpdate {
            temperature,
            plausible,
            failures,
        }
    }
}
