use common::{
    sink::{self, write_line, Sink},
    subject_observer::{Observer, UpdateResult},
};

use crate::WeatherStation;

pub struct WeatherDisplay {
    name: String,
    sink: Sink,
}

impl WeatherDisplay {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_sink(name, sink::stdout())
    }

    pub fn with_sink(name: impl Into<String>, sink: Sink) -> Self {
        WeatherDisplay {
            name: name.into(),
            sink,
        }
    }
}

impl Observer<WeatherStation, f32> for WeatherDisplay {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, _source: &WeatherStation, temperature: f32) -> UpdateResult {
        write_line(
            &self.sink,
            &format!("{} shows temperature: {temperature}°C", self.name),
        )
    }
}
