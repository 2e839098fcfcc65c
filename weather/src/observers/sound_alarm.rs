use common::{
    sink::{self, write_line, Sink},
    subject_observer::{Observer, UpdateResult},
};

use crate::WeatherStation;

/// The alarm goes off strictly above this temperature.
pub const ALARM_THRESHOLD: f32 = 35.0;

pub struct SoundAlarm {
    name: String,
    sink: Sink,
}

impl SoundAlarm {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_sink(name, sink::stdout())
    }

    pub fn with_sink(name: impl Into<String>, sink: Sink) -> Self {
        SoundAlarm {
            name: name.into(),
            sink,
        }
    }

    pub fn is_triggered(temperature: f32) -> bool {
        temperature > ALARM_THRESHOLD
    }
}

impl Observer<WeatherStation, f32> for SoundAlarm {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, _source: &WeatherStation, temperature: f32) -> UpdateResult {
        let line = if Self::is_triggered(temperature) {
            format!(
                "{}: Warning! High temperature {temperature}°C, sound alarm on!",
                self.name
            )
        } else {
            format!(
                "{}: Temperature {temperature}°C, sound alarm not needed.",
                self.name
            )
        };
        write_line(&self.sink, &line)
    }
}
