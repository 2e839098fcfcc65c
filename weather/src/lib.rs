pub mod observers;
pub mod station;

pub use station::{TemperatureUpdate, WeatherObserver, WeatherStation};
