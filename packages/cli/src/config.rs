use std::env;
use thiserror::Error;
use url::Url;

use tokendesk_auth::ClientSettings;
use tokendesk_config::{constants, defaults};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidBackendUrl { url: String, reason: String },
    #[error("Backend URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("Invalid boolean for {name}: '{value}'")]
    InvalidBool { name: String, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: Url,
    pub client: ClientSettings,
    pub no_confirm: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_url = env::var(constants::TOKENDESK_BACKEND_URL)
            .unwrap_or_else(|_| defaults::BACKEND_URL.to_string());
        let backend_url = parse_backend_url(&backend_url)?;

        // Same variables the token backend reads, trimmed the same way
        let client = ClientSettings::new(
            env::var(constants::CLIENT_ID).unwrap_or_default(),
            env::var(constants::CLIENT_SECRET).unwrap_or_default(),
            env::var(constants::REDIRECT_URI).unwrap_or_default(),
        );

        let no_confirm = match env::var(constants::TOKENDESK_NO_CONFIRM) {
            Ok(value) => parse_bool(constants::TOKENDESK_NO_CONFIRM, &value)?,
            Err(_) => false,
        };

        Ok(Config {
            backend_url,
            client,
            no_confirm,
        })
    }

    /// Replace the backend URL, e.g. from a `--backend-url` flag.
    pub fn with_backend_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.backend_url = parse_backend_url(url)?;
        Ok(self)
    }
}

pub fn parse_backend_url(url: &str) -> Result<Url, ConfigError> {
    let parsed = Url::parse(url.trim()).map_err(|e| ConfigError::InvalidBackendUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
