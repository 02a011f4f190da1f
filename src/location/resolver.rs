//! City resolver: turns raw user text into exactly one geocoding candidate.
//!
//! Flow:  read term → geocode → (no match → read term again)
//!                            → (one match → done)
//!                            → (several → list them, read a number → done)

use super::format::listing_line;
use super::types::{GeocodingCandidate, ResolvedLocation};
use crate::api::{ApiError, WeatherApi};
use crate::messages;
use crate::session::SessionError;
use crate::ui::UserInterface;

/// The outcome of a resolution: the full match list and the chosen entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub candidates: Vec<GeocodingCandidate>,
    pub index: usize,
}

impl Resolution {
    pub fn chosen(&self) -> &GeocodingCandidate {
        &self.candidates[self.index]
    }

    pub fn into_location(mut self) -> ResolvedLocation {
        ResolvedLocation {
            candidate: self.candidates.swap_remove(self.index),
            index: self.index,
        }
    }
}

/// Why a selection number was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    NotANumber,
    OutOfRange,
}

enum State {
    AwaitingTerm(String),
    Searching(String),
    Choosing(Vec<GeocodingCandidate>),
}

/// Drives the prompt/lookup loop until a single candidate is chosen.
pub struct CityResolver<'a, A: ?Sized, U: ?Sized> {
    api: &'a A,
    ui: &'a mut U,
}

impl<'a, A, U> CityResolver<'a, A, U>
where
    A: WeatherApi + ?Sized,
    U: UserInterface + ?Sized,
{
    pub fn new(api: &'a A, ui: &'a mut U) -> Self {
        Self { api, ui }
    }

    /// Resolve `initial_term` (may be blank, which prompts for a city).
    ///
    /// Only transport and I/O failures are returned; bad input and empty
    /// results loop back to a prompt.
    pub fn resolve(&mut self, initial_term: &str) -> Result<Resolution, SessionError> {
        let mut state = State::AwaitingTerm(initial_term.to_string());
        loop {
            state = match state {
                State::AwaitingTerm(raw) => State::Searching(self.read_term(raw)?),
                State::Searching(term) => match self.api.geocode(&term) {
                    Ok(candidates) if candidates.is_empty() => {
                        tracing::debug!(term = %term, "no matches");
                        self.ui.say(messages::NO_MATCHES)?;
                        State::AwaitingTerm(String::new())
                    }
                    Ok(candidates) if candidates.len() == 1 => {
                        return Ok(Resolution { candidates, index: 0 });
                    }
                    Ok(candidates) => State::Choosing(candidates),
                    Err(ApiError::RateLimited) => {
                        tracing::warn!(term = %term, "geocoding rate limited");
                        self.ui.say(messages::RATE_LIMITED)?;
                        self.ui.say(messages::RATE_LIMITED_HINT)?;
                        State::AwaitingTerm(String::new())
                    }
                    Err(e) => return Err(e.into()),
                },
                State::Choosing(candidates) => {
                    let index = self.choose(&candidates)?;
                    tracing::debug!(index, of = candidates.len(), "candidate chosen");
                    return Ok(Resolution { candidates, index });
                }
            };
        }
    }

    /// Prompt until the term is non-blank, then prepare it for transport.
    fn read_term(&mut self, raw: String) -> Result<String, SessionError> {
        if let Some(term) = prepare_term(&raw) {
            return Ok(term);
        }
        self.ui.prompt(messages::ASK_CITY, false)?;
        let mut input = self.ui.read_line()?;
        loop {
            if let Some(term) = prepare_term(&input) {
                return Ok(term);
            }
            self.ui.prompt(messages::ASK_CITY_AGAIN, false)?;
            input = self.ui.read_line()?;
        }
    }

    /// List the candidates and prompt until a valid number is entered.
    fn choose(&mut self, candidates: &[GeocodingCandidate]) -> Result<usize, SessionError> {
        self.ui.say(messages::MATCHES_HEADER)?;
        for (i, candidate) in candidates.iter().enumerate() {
            self.ui.say(&listing_line(candidate, i))?;
        }
        loop {
            self.ui.prompt(messages::ASK_INDEX, false)?;
            let input = self.ui.read_line()?;
            match parse_selection(&input, candidates.len()) {
                Ok(index) => return Ok(index),
                Err(SelectionError::NotANumber) => self.ui.say(messages::NOT_A_NUMBER)?,
                Err(SelectionError::OutOfRange) => {
                    self.ui.say(&messages::index_out_of_range(candidates.len()))?
                }
            }
        }
    }
}

/// Trim `raw` and replace inner whitespace with `+`. Blank input yields `None`.
pub fn prepare_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(
        trimmed
            .chars()
            .map(|c| if c.is_whitespace() { '+' } else { c })
            .collect(),
    )
}

/// Parse a 1-based selection into a zero-based index below `count`.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    let n: i64 = input.trim().parse().map_err(|_| SelectionError::NotANumber)?;
    if n < 1 || n as u64 > count as u64 {
        return Err(SelectionError::OutOfRange);
    }
    Ok(n as usize - 1)
}
