//! Forecast payload types, decoded from the One Call daily response.

use serde::Deserialize;

/// Daily low and high in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TemperatureRange {
    #[serde(rename = "min")]
    pub min_celsius: f64,
    #[serde(rename = "max")]
    pub max_celsius: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastDay {
    #[serde(rename = "dt")]
    pub epoch_seconds_utc: i64,
    #[serde(rename = "temp")]
    pub temperature: TemperatureRange,
}

/// A multi-day forecast for one location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Forecast {
    /// Fixed offset of the location's local time from UTC.
    #[serde(default, rename = "timezone_offset")]
    pub utc_offset_seconds: i64,
    /// Chronological daily entries.
    #[serde(default, rename = "daily")]
    pub days: Vec<ForecastDay>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_forecast_from_onecall_json() {
        let json = r#"{
            "lat": 65.0124,
            "lon": 25.4682,
            "timezone": "Europe/Helsinki",
            "timezone_offset": 10800,
            "daily": [
                { "dt": 1657792800, "sunrise": 1657760000,
                  "temp": { "day": 16.2, "min": 11.46, "max": 18.5, "night": 12.0 },
                  "weather": [] }
            ]
        }"#;
        let f: Forecast = serde_json::from_str(json).unwrap();
        assert_eq!(f.utc_offset_seconds, 10800);
        assert_eq!(f.days.len(), 1);
        assert_eq!(f.days[0].epoch_seconds_utc, 1657792800);
        assert_relative_eq!(f.days[0].temperature.min_celsius, 11.46);
        assert_relative_eq!(f.days[0].temperature.max_celsius, 18.5);
    }

    #[test]
    fn test_forecast_missing_daily_is_empty() {
        let f: Forecast = serde_json::from_str("{}").unwrap();
        assert_eq!(f, Forecast::default());
    }
}
