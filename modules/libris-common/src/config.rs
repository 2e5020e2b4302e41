use std::env;
use std::time::Duration;

use crate::error::{LibrisError, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Catalog API
    pub api_uri: String,
    pub api_timeout: Duration,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load the web server configuration. `API_URI` is required.
    pub fn web_from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_uri = lookup("API_URI")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| LibrisError::Config("API_URI environment variable is required".into()))?;

        let web_port = parse_or(&lookup, "WEB_PORT", 3000u16)?;
        let timeout_secs = parse_or(&lookup, "API_TIMEOUT_SECS", 30u64)?;

        Ok(Self {
            api_uri,
            api_timeout: Duration::from_secs(timeout_secs),
            web_host: lookup("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| LibrisError::Config(format!("{key} must be a number, got {raw:?}"))),
        None => Ok(default),
    }
}
