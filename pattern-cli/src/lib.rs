pub mod config;
mod console;
mod error;
pub mod shipping_menu;
pub mod weather_menu;

pub use error::AppError;
