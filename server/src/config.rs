//! Host server configuration, read once from the process environment at
//! start-up.
//!
//! | Variable               | Default                 |
//! |------------------------|-------------------------|
//! | `STUDIUM_API_BASE_URL` | `http://localhost:8000` |
//! | `STUDIUM_WEB_HOST`     | `127.0.0.1`             |
//! | `STUDIUM_WEB_PORT`     | `3000`                  |
//! | `STUDIUM_OPEN_BROWSER` | `false`                 |
//!
//! A `.env` file in the working directory is loaded first when present.

use common::api::DEFAULT_API_BASE_URL;
use common::config::ClientConfig;
use thiserror::Error;

pub const API_BASE_URL_VAR: &str = "STUDIUM_API_BASE_URL";
pub const HOST_VAR: &str = "STUDIUM_WEB_HOST";
pub const PORT_VAR: &str = "STUDIUM_WEB_PORT";
pub const OPEN_BROWSER_VAR: &str = "STUDIUM_OPEN_BROWSER";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be true/false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Published to the frontend as `/config.json`.
    pub client: ClientConfig,
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is fine.
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = value(API_BASE_URL_VAR).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let trimmed = api_base_url.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                var: API_BASE_URL_VAR,
                value: api_base_url,
            });
        }

        let host = value(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match value(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let open_browser = match value(OPEN_BROWSER_VAR) {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                var: OPEN_BROWSER_VAR,
                value: raw,
            })?,
            None => false,
        };

        Ok(Self {
            host,
            port,
            client: ClientConfig::new(&api_base_url),
            open_browser,
        })
    }

    /// Address a browser on this machine should open.
    pub fn public_url(&self) -> String {
        let host = match self.host.as_str() {
            "127.0.0.1" | "0.0.0.0" => "localhost",
            other => other,
        };
        format!("http://{}:{}", host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
