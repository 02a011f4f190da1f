//! City Forecast: resolve a place name to coordinates and show its daily
//! temperature outlook.

pub mod api;
pub mod config;
pub mod forecast;
pub mod location;
pub mod messages;
pub mod session;
pub mod ui;

#[cfg(test)]
mod test_support;
