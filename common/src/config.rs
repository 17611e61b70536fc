use serde::{Deserialize, Serialize};

use crate::api::{normalize_base_url, DEFAULT_API_BASE_URL};

/// Path on the host server where the frontend fetches its [`ClientConfig`].
pub const CONFIG_PATH: &str = "/config.json";

/// Runtime configuration handed from the host server to the frontend.
///
/// The host server builds it once from its environment at start-up and serves
/// it as JSON; the frontend fetches it once before mounting the application
/// and passes it down to every component that talks to the API.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the Studium API, without a trailing slash.
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
