use gloo_console::{info, warn};
use gloo_net::http::Request;

use common::config::{ClientConfig, CONFIG_PATH};

/// Fetches the client configuration published by the host server.
///
/// Called once before the application is mounted. If the document cannot be
/// fetched or decoded the default configuration is used and a warning is
/// written to the console.
pub async fn load_client_config() -> ClientConfig {
    let config = match Request::get(CONFIG_PATH).send().await {
        Ok(resp) if resp.ok() => match resp.json::<ClientConfig>().await {
            Ok(config) => ClientConfig::new(&config.api_base_url),
            Err(err) => {
                warn!(format!("Invalid {}: {}. Using defaults.", CONFIG_PATH, err));
                ClientConfig::default()
            }
        },
        Ok(resp) => {
            warn!(format!(
                "{} returned status {}. Using defaults.",
                CONFIG_PATH,
                resp.status()
            ));
            ClientConfig::default()
        }
        Err(err) => {
            warn!(format!("Could not fetch {}: {}. Using defaults.", CONFIG_PATH, err));
            ClientConfig::default()
        }
    };

    info!(format!("Studium API at {}", config.api_base_url));
    config
}
