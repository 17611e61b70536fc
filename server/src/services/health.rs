use actix_web::{HttpResponse, Responder};
use serde_json::json;

pub(crate) async fn process() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "studium-web",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
