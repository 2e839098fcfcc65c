mod email_alert;
mod sound_alarm;
mod weather_display;

pub use email_alert::EmailAlert;
pub use sound_alarm::{SoundAlarm, ALARM_THRESHOLD};
pub use weather_display::WeatherDisplay;
