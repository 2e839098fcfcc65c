use common::{
    sink::{self, write_line, Sink},
    subject_observer::{Observer, UpdateResult},
};
use log::debug;

use crate::WeatherStation;

/// Simulated e-mail notification, nothing leaves the process.
pub struct EmailAlert {
    name: String,
    email: String,
    sink: Sink,
}

impl EmailAlert {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_sink(name, email, sink::stdout())
    }

    pub fn with_sink(name: impl Into<String>, email: impl Into<String>, sink: Sink) -> Self {
        EmailAlert {
            name: name.into(),
            email: email.into(),
            sink,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Observer<WeatherStation, f32> for EmailAlert {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, _source: &WeatherStation, temperature: f32) -> UpdateResult {
        debug!("Simulating e-mail to {}", self.email);
        write_line(
            &self.sink,
            &format!(
                "{} ({}): email notification sent. Current temperature: {temperature}°C",
                self.name, self.email
            ),
        )
    }
}
