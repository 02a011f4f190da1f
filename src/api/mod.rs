//! Remote collaborators: geocoding and forecast lookups.

pub mod openweathermap;

pub use openweathermap::OpenWeatherMapClient;

use crate::forecast::Forecast;
use crate::location::GeocodingCandidate;

/// Failures of a remote lookup.
///
/// Only `RateLimited` is recoverable; the session treats everything else as fatal.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API-avain ei ole kelvollinen!")]
    Unauthorized,
    #[error("Tällä API-avaimella on tehty liikaa hakuja.")]
    RateLimited,
    #[error("Odottamaton HTTP-tila {code}: {reason}")]
    Status { code: u16, reason: String },
    #[error("Verkkovirhe: {0}")]
    Transport(String),
    #[error("Virheellinen vastaus rajapinnalta: {0}")]
    InvalidResponse(String),
}

/// Geocoding and forecast lookups used by the session.
pub trait WeatherApi {
    /// Look up places matching `term`. No match is an empty list, not an error.
    ///
    /// `term` has its whitespace already replaced by `+`.
    fn geocode(&self, term: &str) -> Result<Vec<GeocodingCandidate>, ApiError>;

    /// Daily forecast for a coordinate pair.
    fn fetch_forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, ApiError>;
}

impl<T: WeatherApi + ?Sized> WeatherApi for &T {
    fn geocode(&self, term: &str) -> Result<Vec<GeocodingCandidate>, ApiError> {
        (**self).geocode(term)
    }

    fn fetch_forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, ApiError> {
        (**self).fetch_forecast(latitude, longitude)
    }
}
