//! Query session: one resolve → fetch → present cycle per iteration,
//! repeated until the user leaves the follow-up prompt blank.

use crate::api::{ApiError, WeatherApi};
use crate::forecast::{self, Forecast};
use crate::location::{announcement_name, CityResolver, GeocodingCandidate, ResolvedLocation};
use crate::messages;
use crate::ui::UserInterface;
use std::io;

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Konsolin luku tai kirjoitus epäonnistui: {0}")]
    Io(#[from] io::Error),
    #[error("Käyttöliittymää ei annettu")]
    MissingInterface,
    #[error("Sääpalvelua ei annettu")]
    MissingApi,
}

/// Everything the session remembers between steps of one iteration.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Raw text carried into the next resolution. Blank means "prompt".
    pub input: String,
    pub candidates: Vec<GeocodingCandidate>,
    pub index: usize,
    pub forecast: Forecast,
}

impl SessionState {
    fn start_iteration(&mut self) -> String {
        self.candidates.clear();
        self.index = 0;
        std::mem::take(&mut self.input)
    }
}

/// Assembles a [`QuerySession`], refusing to build one without its collaborators.
pub struct SessionBuilder<A, U> {
    api: Option<A>,
    ui: Option<U>,
    initial_term: String,
}

impl<A: WeatherApi, U: UserInterface> Default for SessionBuilder<A, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: WeatherApi, U: UserInterface> SessionBuilder<A, U> {
    pub fn new() -> Self {
        Self { api: None, ui: None, initial_term: String::new() }
    }

    pub fn api(mut self, api: A) -> Self {
        self.api = Some(api);
        self
    }

    pub fn ui(mut self, ui: U) -> Self {
        self.ui = Some(ui);
        self
    }

    /// City to look up first, skipping the initial prompt.
    pub fn initial_term(mut self, term: impl Into<String>) -> Self {
        self.initial_term = term.into();
        self
    }

    pub fn build(self) -> Result<QuerySession<A, U>, SessionError> {
        let ui = self.ui.ok_or(SessionError::MissingInterface)?;
        let api = self.api.ok_or(SessionError::MissingApi)?;
        Ok(QuerySession {
            api,
            ui,
            state: SessionState {
                input: self.initial_term.trim().to_string(),
                ..SessionState::default()
            },
        })
    }
}

/// The interactive forecast loop.
pub struct QuerySession<A, U> {
    api: A,
    ui: U,
    state: SessionState,
}

impl<A: WeatherApi, U: UserInterface> QuerySession<A, U> {
    pub fn builder() -> SessionBuilder<A, U> {
        SessionBuilder::new()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run queries until the follow-up answer is blank.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.run_query()?;

            self.ui.say(messages::ASK_ANOTHER)?;
            self.ui.say(messages::ASK_ANOTHER_HINT)?;
            let next = self.ui.read_line()?;
            if next.trim().is_empty() {
                tracing::info!("session finished");
                return Ok(());
            }
            self.state.input = next.trim().to_string();
        }
    }

    /// One iteration: resolve the pending term, fetch and print its forecast.
    pub fn run_query(&mut self) -> Result<ResolvedLocation, SessionError> {
        let term = self.state.start_iteration();
        let resolution = CityResolver::new(&self.api, &mut self.ui).resolve(&term)?;
        let chosen = resolution.chosen();
        tracing::info!(
            name = %chosen.primary_name,
            country = %chosen.country_code,
            lat = chosen.latitude,
            lon = chosen.longitude,
            "location resolved"
        );

        let forecast = match self.api.fetch_forecast(chosen.latitude, chosen.longitude) {
            Ok(f) => f,
            Err(ApiError::RateLimited) => {
                tracing::warn!("forecast rate limited");
                self.ui.say(messages::RATE_LIMITED)?;
                self.ui.say(messages::RATE_LIMITED_HINT)?;
                Forecast::default()
            }
            Err(e) => return Err(e.into()),
        };

        self.ui.say("")?;
        for line in forecast::render(&forecast, announcement_name(chosen)) {
            self.ui.say(&line)?;
        }

        self.state.index = resolution.index;
        self.state.candidates = resolution.candidates.clone();
        self.state.forecast = forecast;
        Ok(resolution.into_location())
    }
}
