use std::io;

use config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Console output failed: {0}")]
    Output(String),
}
