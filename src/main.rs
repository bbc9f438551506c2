use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use pdf_generation_service::api::{configure_routes, json_config, ApiState, AppConfig};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    tracing::info!("Starting PDF generation service");

    prometheus::default_registry()
        .register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))?;

    let config = AppConfig::load().context("Failed to load configuration")?;
    tracing::info!(
        templates_dir = %config.templates_dir.display(),
        engine = %config.pdf_engine,
        "Configuration loaded"
    );

    let state = ApiState::new(&config).context("Failed to initialize application state")?;
    let state = web::Data::new(state);
    let payload_limit = config.max_payload_bytes;

    tracing::info!("Starting server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config(payload_limit))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .allowed_headers(vec![header::CONTENT_TYPE])
                    .expose_headers(vec![header::CONTENT_DISPOSITION])
                    .max_age(3600)
            )
            .wrap(middleware::NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
