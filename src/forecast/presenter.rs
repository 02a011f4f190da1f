//! Renders a forecast as display lines.

use super::types::{Forecast, ForecastDay};
use crate::messages;
use chrono::{DateTime, Datelike, NaiveDate};

/// Calendar date of `epoch_seconds_utc` shifted by a fixed UTC offset.
///
/// Returns `None` when the shifted instant is outside chrono's range.
pub fn local_date(epoch_seconds_utc: i64, utc_offset_seconds: i64) -> Option<NaiveDate> {
    let shifted = epoch_seconds_utc.checked_add(utc_offset_seconds)?;
    DateTime::from_timestamp(shifted, 0).map(|dt| dt.date_naive())
}

/// Whole degrees, halves rounded away from zero.
fn whole_degrees(celsius: f64) -> i64 {
    celsius.round() as i64
}

/// `14.7.2022: max 19 °C, min 11 °C`
pub fn day_line(day: &ForecastDay, utc_offset_seconds: i64) -> String {
    let date = match local_date(day.epoch_seconds_utc, utc_offset_seconds) {
        Some(d) => format!("{}.{}.{}", d.day(), d.month(), d.year()),
        None => {
            tracing::warn!(epoch = day.epoch_seconds_utc, "forecast timestamp out of range");
            day.epoch_seconds_utc.to_string()
        }
    };
    format!(
        "{}: max {} \u{00B0}C, min {} \u{00B0}C",
        date,
        whole_degrees(day.temperature.max_celsius),
        whole_degrees(day.temperature.min_celsius)
    )
}

/// Header naming `display_name`, one line per day, then a blank line.
pub fn render(forecast: &Forecast, display_name: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(forecast.days.len() + 2);
    lines.push(messages::forecast_header(display_name));
    lines.extend(
        forecast
            .days
            .iter()
            .map(|day| day_line(day, forecast.utc_offset_seconds)),
    );
    lines.push(String::new());
    lines
}
