//! Daily forecast data and its text rendering.

pub mod presenter;
pub mod types;

pub use presenter::{day_line, local_date, render};
pub use types::{Forecast, ForecastDay, TemperatureRange};
