//! Scripted collaborators shared by unit tests.

use crate::api::{ApiError, WeatherApi};
use crate::forecast::Forecast;
use crate::location::GeocodingCandidate;
use crate::ui::UserInterface;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

/// Replays canned input lines and records every prompt.
pub struct ScriptedUi {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedUi {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn lines(&self) -> Vec<&str> {
        self.output.iter().map(String::as_str).collect()
    }

    pub fn printed(&self, text: &str) -> bool {
        self.count(text) > 0
    }

    pub fn count(&self, text: &str) -> usize {
        self.output.iter().filter(|l| *l == text).count()
    }
}

impl UserInterface for ScriptedUi {
    fn prompt(&mut self, text: &str, _newline: bool) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.input
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// Returns queued results in order and records the requests made.
#[derive(Default)]
pub struct MockApi {
    geocode: RefCell<VecDeque<Result<Vec<GeocodingCandidate>, ApiError>>>,
    forecast: RefCell<VecDeque<Result<Forecast, ApiError>>>,
    geocode_calls: RefCell<Vec<String>>,
    forecast_calls: RefCell<Vec<(f64, f64)>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geocode(self, result: Result<Vec<GeocodingCandidate>, ApiError>) -> Self {
        self.geocode.borrow_mut().push_back(result);
        self
    }

    pub fn with_forecast(self, result: Result<Forecast, ApiError>) -> Self {
        self.forecast.borrow_mut().push_back(result);
        self
    }

    pub fn geocode_calls(&self) -> Vec<String> {
        self.geocode_calls.borrow().clone()
    }

    pub fn forecast_calls(&self) -> Vec<(f64, f64)> {
        self.forecast_calls.borrow().clone()
    }
}

impl WeatherApi for MockApi {
    fn geocode(&self, term: &str) -> Result<Vec<GeocodingCandidate>, ApiError> {
        self.geocode_calls.borrow_mut().push(term.to_string());
        self.geocode.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    fn fetch_forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, ApiError> {
        self.forecast_calls.borrow_mut().push((latitude, longitude));
        self.forecast.borrow_mut().pop_front().unwrap_or_else(|| Ok(Forecast::default()))
    }
}
