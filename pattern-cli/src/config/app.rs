use std::ops::RangeInclusive;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub min_plausible_temperature: f32,
    pub max_plausible_temperature: f32,
    pub register_default_observers: bool,
    pub alert_email: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        config.try_deserialize().map_err(|e| e.into())
    }

    /// Temperatures outside this range are reported as unusual, they are still accepted.
    pub fn plausible_range(&self) -> RangeInclusive<f32> {
        self.min_plausible_temperature..=self.max_plausible_temperature
    }
}
