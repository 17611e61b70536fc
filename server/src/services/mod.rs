//! HTTP surface of the host server.
//!
//! - `GET /config.json`: the client configuration read from the environment.
//! - `GET /health`: liveness check.
//! - anything else: the embedded frontend bundle, with `index.html` served for
//!   unknown paths so client routes such as `/sources/{id}` load the app.

use actix_web::web::{self, get, ServiceConfig};
use common::config::CONFIG_PATH;

mod assets;
mod client_config;
mod health;

pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route(CONFIG_PATH, get().to(client_config::process))
        .route("/health", get().to(health::process))
        .default_service(web::route().to(assets::serve_embedded));
}
