use city_forecast::api::OpenWeatherMapClient;
use city_forecast::config::{Config, API_KEY_ENV};
use city_forecast::messages;
use city_forecast::session::QuerySession;
use city_forecast::ui::ConsoleUi;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// City Forecast: daily temperature outlook for any city.
///
/// Looks the city up on OpenWeatherMap, asks which one you meant when the
/// name is ambiguous, and prints a week of daily highs and lows.
///
/// Examples:
///   forecast
///   forecast Oulu
///   forecast New York --api-key <KEY>
#[derive(Parser)]
#[command(name = "forecast", version, about, long_about = None)]
struct Cli {
    /// City to look up first. Leave out to be prompted.
    #[arg(index = 1, num_args = 0..)]
    city: Vec<String>,

    /// Settings file (defaults to ./appsettings.json, then the user config dir).
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// OpenWeatherMap API key. Overrides OPENWEATHERMAP_API_KEY and the settings file.
    #[arg(long)]
    api_key: Option<String>,

    /// Log debug output to stderr.
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── Configuration ───────────────────────────────────────────

    let env_key = std::env::var(API_KEY_ENV).ok();
    let config = Config::load(cli.config.as_deref(), cli.api_key.as_deref(), env_key.as_deref()).unwrap_or_else(|e| {
        tracing::error!(error = %e, "configuration failed");
        fail(&e.to_string());
    });

    // ── Session ─────────────────────────────────────────────────

    let client = OpenWeatherMapClient::new(&config);
    let session = QuerySession::builder()
        .api(client)
        .ui(ConsoleUi::stdio())
        .initial_term(cli.city.join(" "))
        .build();

    let result = session.and_then(|mut s| s.run());
    if let Err(e) = result {
        tracing::error!(error = %e, "session ended with an error");
        fail(&e.to_string());
    }
}

fn fail(message: &str) -> ! {
    eprintln!();
    eprintln!("{}", messages::FATAL_ERROR);
    eprintln!("{}", messages::FATAL_ERROR_DETAIL);
    eprintln!("{}", message);
    std::process::exit(1);
}
