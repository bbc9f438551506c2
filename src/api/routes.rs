use actix_web::web;

use super::error::json_error_handler;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(handlers::health_check))
        .route("/metrics", web::get().to(handlers::metrics_endpoint))
        .route("/generate-pdf", web::post().to(handlers::generate_pdf));
}

/// JSON extractor settings for request bodies.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}
