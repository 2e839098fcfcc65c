use std::io;

use anyhow::Result;
use common::sink;
use pattern_cli::{config::app::AppConfig, weather_menu::WeatherMenu};

fn main() -> Result<()> {
    pattern_cli::config::log::init();
    let config = AppConfig::new()?;

    WeatherMenu::new(&config, io::stdin().lock(), sink::stdout()).run()?;
    Ok(())
}
