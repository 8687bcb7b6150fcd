use crate::error::{config_error, env_error, CarouselResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use url::Url;

/// Endpoint used when neither the environment nor the config file names one
pub const DEFAULT_EVENTS_ENDPOINT: &str = "http://localhost:5000/events";

/// Optional configuration file overlaid on the defaults
pub const CONFIG_FILE: &str = "config/carousel.toml";

/// Environment variable overriding the events endpoint
pub const EVENTS_ENDPOINT_VAR: &str = "EVENTS_ENDPOINT";

/// Main configuration structure for the carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// URL the event list is fetched from
    pub events_endpoint: String,
}

/// Keys accepted in `config/carousel.toml`
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    events_endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_endpoint: DEFAULT_EVENTS_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> CarouselResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let file_endpoint = Self::read_file(Path::new(CONFIG_FILE))?;

        let env_endpoint = match env::var(EVENTS_ENDPOINT_VAR) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => return Err(env_error(EVENTS_ENDPOINT_VAR)),
        };

        let config = Self::from_sources(file_endpoint, env_endpoint);
        config.endpoint_url()?;

        Ok(config)
    }

    /// Merge the config sources: environment wins over file, file over default
    pub fn from_sources(file_endpoint: Option<String>, env_endpoint: Option<String>) -> Self {
        let events_endpoint = env_endpoint
            .or(file_endpoint)
            .map(|endpoint| endpoint.trim().to_string())
            .filter(|endpoint| !endpoint.is_empty())
            .unwrap_or_else(|| DEFAULT_EVENTS_ENDPOINT.to_string());

        Self { events_endpoint }
    }

    /// Read the endpoint from a TOML file, if the file exists
    fn read_file(path: &Path) -> CarouselResult<Option<String>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let file: FileConfig = toml::from_str(&content)?;
        Ok(file.events_endpoint)
    }

    /// Parse and validate the events endpoint
    pub fn endpoint_url(&self) -> CarouselResult<Url> {
        let url = Url::parse(&self.events_endpoint).map_err(|e| {
            config_error(&format!(
                "Invalid events endpoint '{}': {}",
                self.events_endpoint, e
            ))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(config_error(&format!(
                "Unsupported scheme '{}' for events endpoint",
                other
            ))),
        }
    }
}
