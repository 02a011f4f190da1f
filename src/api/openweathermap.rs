//! OpenWeatherMap client: direct geocoding and the One Call daily forecast.

use super::{ApiError, WeatherApi};
use crate::config::Config;
use crate::forecast::Forecast;
use crate::location::GeocodingCandidate;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/";

const UNITS: &str = "metric";
const LANGUAGE: &str = "fi";
const EXCLUDE: &str = "current,minutely,hourly,alerts";
const USER_AGENT: &str = concat!("CityForecast/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for openweathermap.org.
pub struct OpenWeatherMapClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
    result_limit: usize,
}

impl OpenWeatherMapClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build();
        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            agent,
            base_url,
            api_key: config.api_key.clone(),
            result_limit: config.result_limit,
        }
    }

    fn geocode_path(&self, term: &str) -> String {
        format!("geo/1.0/direct?q={}&limit={}", encode_term(term), self.result_limit)
    }

    fn forecast_path(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "data/2.5/onecall?lat={}&lon={}&units={}&lang={}&exclude={}",
            latitude, longitude, UNITS, LANGUAGE, EXCLUDE
        )
    }

    /// GET `path` (without the key) and decode the JSON body.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "openweathermap request");
        let url = format!("{}{}&appid={}", self.base_url, path, self.api_key);

        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| map_error(e, &self.api_key))?;

        response
            .into_json()
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

impl WeatherApi for OpenWeatherMapClient {
    fn geocode(&self, term: &str) -> Result<Vec<GeocodingCandidate>, ApiError> {
        match self.get_json::<Vec<GeocodingCandidate>>(&self.geocode_path(term)) {
            Ok(candidates) => {
                tracing::info!(term, matches = candidates.len(), "geocoding finished");
                Ok(candidates)
            }
            Err(ApiError::Status { code: 404, .. }) => {
                tracing::info!(term, "geocoding returned 404, treating as no match");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn fetch_forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, ApiError> {
        let forecast: Forecast = self.get_json(&self.forecast_path(latitude, longitude))?;
        tracing::info!(days = forecast.days.len(), offset = forecast.utc_offset_seconds, "forecast received");
        Ok(forecast)
    }
}

/// Translate a ureq failure, keeping the request URL (and its `appid`) out of the text.
fn map_error(err: ureq::Error, api_key: &str) -> ApiError {
    match err {
        ureq::Error::Status(401, _) => ApiError::Unauthorized,
        ureq::Error::Status(429, _) => ApiError::RateLimited,
        ureq::Error::Status(code, response) => ApiError::Status {
            code,
            reason: response.status_text().to_string(),
        },
        ureq::Error::Transport(t) => {
            let text = match t.message() {
                Some(detail) => format!("{}: {}", t.kind(), detail),
                None => t.kind().to_string(),
            };
            ApiError::Transport(redact(&text, api_key))
        }
    }
}

fn redact(text: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        text.to_string()
    } else {
        text.replace(api_key, "***")
    }
}

/// Percent-encode a search term for the query string.
///
/// `+` is left alone: it already stands for a space.
fn encode_term(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '+') {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", b));
            }
        }
    }
    out
}
