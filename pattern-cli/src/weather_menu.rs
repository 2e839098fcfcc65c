use std::{io::BufRead, rc::Rc};

use common::{
    sink::Sink,
    subject_observer::{Observer, Subject},
};
use log::debug;
use weather::{
    observers::{EmailAlert, SoundAlarm, WeatherDisplay},
    WeatherObserver, WeatherStation,
};

use crate::{config::app::AppConfig, console::Console, AppError};

pub const PRESET_ALARM_NAME: &str = "Test sound alarm";

const MENU: &str = "\nChoose an action:
1 - Set temperature (notify everyone)
2 - Add observer
3 - Remove observer
4 - List observers
5 - Register the test sound alarm
0 - Exit";

/// Interactive front end of the weather station.
pub struct WeatherMenu<R> {
    console: Console<R>,
    station: WeatherStation,
    preset_alarm: WeatherObserver,
}

impl<R: BufRead> WeatherMenu<R> {
    pub fn new(config: &AppConfig, input: R, out: Sink) -> Self {
        let mut station = WeatherStation::new(config.plausible_range());
        if config.register_default_observers {
            station.register_observer(Rc::new(WeatherDisplay::with_sink("Mobile app", out.clone())));
            station.register_observer(Rc::new(WeatherDisplay::with_sink("Billboard", out.clone())));
            station.register_observer(Rc::new(EmailAlert::with_sink(
                "Email alert",
                config.alert_email.as_str(),
                out.clone(),
            )));
        }

        WeatherMenu {
            preset_alarm: Rc::new(SoundAlarm::with_sink(PRESET_ALARM_NAME, out.clone())),
            console: Console::new(input, out),
            station,
        }
    }

    pub fn station(&self) -> &WeatherStation {
        &self.station
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        self.console.say("Weather monitoring system")?;
        loop {
            self.console.say(MENU)?;
            let Some(choice) = self.console.ask("Your choice: ")? else {
                break;
            };
            match choice.as_str() {
                "0" => break,
                "1" => self.set_temperature()?,
                "2" => self.add_observer()?,
                "3" => self.remove_observer()?,
                "4" => self.list_observers()?,
                "5" => self.register(self.preset_alarm.clone())?,
                other => {
                    debug!("Unknown menu choice '{other}'");
                    self.console.say("Invalid choice.")?
                }
            }
        }
        self.console.say("Exiting.")
    }

    fn set_temperature(&mut self) -> Result<(), AppError> {
        let Some(answer) = self.console.ask("Enter temperature (°C): ")? else {
            return Ok(());
        };
        let Some(temperature) = answer.parse::<f32>().ok().filter(|t| t.is_finite()) else {
            return self.console.say("Error: invalid temperature value.");
        };

        self.console.say(format!(
            "\n[WeatherStation] Temperature set to {temperature}°C. Notifying observers..."
        ))?;

        let update = self.station.set_temperature(temperature);
        for failure in &update.failures {
            self.console.say(format!("Error: {failure}"))?;
        }
        if !update.plausible {
            self.console.say("Warning: unusual temperature value.")?;
        }
        Ok(())
    }

    fn add_observer(&mut self) -> Result<(), AppError> {
        self.console
            .say("Choose the observer type: 1-Display, 2-Email, 3-Sound")?;
        let Some(kind) = self.console.ask("Type: ")? else {
            return Ok(());
        };

        let out = self.console.out().clone();
        let observer: WeatherObserver = match kind.as_str() {
            "1" => {
                let Some(name) = self.console.ask("Display name: ")? else {
                    return Ok(());
                };
                Rc::new(WeatherDisplay::with_sink(name, out))
            }
            "2" => {
                let Some(name) = self.console.ask("Name (e.g. Email-1): ")? else {
                    return Ok(());
                };
                let Some(email) = self.console.ask("Email: ")? else {
                    return Ok(());
                };
                Rc::new(EmailAlert::with_sink(name, email, out))
            }
            "3" => {
                let Some(name) = self.console.ask("Alarm name: ")? else {
                    return Ok(());
                };
                Rc::new(SoundAlarm::with_sink(name, out))
            }
            _ => return self.console.say("Invalid type."),
        };
        self.register(observer)
    }

    fn register(&mut self, observer: WeatherObserver) -> Result<(), AppError> {
        let name = observer.name().to_string();
        if self.station.register_observer(observer) {
            self.console.say(format!("Observer '{name}' added."))
        } else {
            self.console
                .say(format!("Observer '{name}' is already registered."))
        }
    }

    fn remove_observer(&mut self) -> Result<(), AppError> {
        self.list_observers()?;
        let Some(name) = self.console.ask("Name of the observer to remove: ")? else {
            return Ok(());
        };

        match self.station.remove_observer_named(&name) {
            Some(observer) => self
                .console
                .say(format!("Observer '{}' removed.", observer.name())),
            None => self
                .console
                .say(format!("Observer named '{name}' not found.")),
        }
    }

    fn list_observers(&self) -> Result<(), AppError> {
        self.console.say("\nRegistered observers:")?;
        let names = self.station.observer_names();
        if names.is_empty() {
            return self.console.say("  (none)");
        }
        for (index, name) in names.iter().enumerate() {
            self.console.say(format!("  {}. {name}", index + 1))?;
        }
        Ok(())
    }
}
