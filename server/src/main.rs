mod config;
mod services;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };
    let url = config.public_url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                error!("Could not open browser: {}", e);
            }
        });
    }

    info!("Studium API base URL: {}", config.client.api_base_url);
    info!("Server running at {}", url);

    let client_config = web::Data::new(config.client.clone());

    HttpServer::new(move || {
        App::new()
            .app_data(client_config.clone())
            .configure(services::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
