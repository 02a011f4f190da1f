//! Settings file loading.
//!
//! Looks for `appsettings.json` in the working directory, then in the
//! platform config dir (`~/.config/city_forecast/` on Linux). The API key can
//! be overridden from the environment or the command line.

use crate::api::openweathermap::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "appsettings.json";
pub const API_KEY_ENV: &str = "OPENWEATHERMAP_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Asetustiedostoa {0} ei löytynyt!")]
    NotFound(PathBuf),
    #[error("Tiedoston {path} lukeminen epäonnistui: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Tiedoston {path} jäsentäminen epäonnistui: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("API-avainta ei löytynyt asetuksista!")]
    MissingApiKey,
}

/// On-disk shape of the settings file.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default, rename = "ApiKeyOpenWeatherMap")]
    api_key: Option<String>,
    #[serde(default, rename = "BaseUrl")]
    base_url: Option<String>,
    #[serde(default, rename = "ResultLimit")]
    result_limit: Option<usize>,
    #[serde(default, rename = "TimeoutSecs")]
    timeout_secs: Option<u64>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// Maximum number of geocoding matches requested.
    pub result_limit: usize,
    pub timeout_secs: u64,
}

impl Config {
    /// Load settings. `path` forces a specific file. The key is taken from
    /// `cli_key`, then `env_key` (the value of [`API_KEY_ENV`]), then the file.
    pub fn load(path: Option<&Path>, cli_key: Option<&str>, env_key: Option<&str>) -> Result<Self, ConfigError> {
        let override_key = pick_key(cli_key, env_key);

        let settings = match path {
            Some(p) => Some(read_settings(p)?),
            None => match Self::find_settings() {
                Some(p) => Some(read_settings(&p)?),
                None => None,
            },
        };

        match settings {
            Some(s) => Self::from_settings(s, override_key),
            None if override_key.is_some() => Self::from_settings(SettingsFile::default(), override_key),
            None => Err(ConfigError::NotFound(Self::default_path())),
        }
    }

    fn from_settings(settings: SettingsFile, override_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = override_key
            .or(settings.api_key)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            base_url: settings.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            result_limit: settings.result_limit.unwrap_or(5),
            timeout_secs: settings.timeout_secs.unwrap_or(10),
        })
    }

    fn find_settings() -> Option<PathBuf> {
        let local = PathBuf::from(SETTINGS_FILE);
        if local.is_file() {
            return Some(local);
        }
        let user = Self::default_path();
        user.is_file().then_some(user)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("city_forecast")
            .join(SETTINGS_FILE)
    }
}

/// First non-blank key in precedence order, trimmed.
fn pick_key(cli_key: Option<&str>, env_key: Option<&str>) -> Option<String> {
    [cli_key, env_key]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|k| !k.is_empty())
        .map(str::to_string)
}

fn read_settings(path: &Path) -> Result<SettingsFile, ConfigError> {
    let data = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Read { path: path.to_path_buf(), source: e }
        }
    })?;
    serde_json::from_str(&data).map_err(|e| ConfigError::Parse { path: path.to_path_buf(), source: e })
}
