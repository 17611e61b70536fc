use actix_web::{web, HttpResponse, Responder};
use common::config::ClientConfig;

/// Returns the configuration the frontend needs before it can mount.
pub(crate) async fn process(config: web::Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}
