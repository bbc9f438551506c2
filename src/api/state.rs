use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::DocumentResult;
use crate::generators::PdfGenerator;
use crate::pdf::{CommandRenderer, PageRenderer};
use crate::templates::TemplateStore;

#[derive(Clone)]
pub struct ApiState {
    pub generator: Arc<PdfGenerator>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub templates_dir: PathBuf,
    pub default_template: String,
    pub pdf_engine: String,
    pub temp_dir: PathBuf,
    pub max_payload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            templates_dir: PathBuf::from("templates"),
            default_template: "bon-livraison".to_string(),
            pdf_engine: "weasyprint".to_string(),
            temp_dir: PathBuf::from("/tmp"),
            max_payload_bytes: 2_097_152, // 2MB
        }
    }
}

impl AppConfig {
    /// Defaults overridden by environment variables of the same name in
    /// upper case (`PORT`, `TEMPLATES_DIR`, `PDF_ENGINE`, ...).
    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = AppConfig::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("templates_dir", defaults.templates_dir.to_string_lossy().to_string())?
            .set_default("default_template", defaults.default_template)?
            .set_default("pdf_engine", defaults.pdf_engine)?
            .set_default("temp_dir", defaults.temp_dir.to_string_lossy().to_string())?
            .set_default("max_payload_bytes", defaults.max_payload_bytes as i64)?
            .add_source(config::Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

impl ApiState {
    /// Production state: templates from disk, external PDF engine.
    pub fn new(config: &AppConfig) -> DocumentResult<Self> {
        let renderer = Arc::new(CommandRenderer::new(
            config.pdf_engine.clone(),
            config.temp_dir.clone(),
        ));
        Self::with_renderer(config, renderer)
    }

    pub fn with_renderer(config: &AppConfig, renderer: Arc<dyn PageRenderer>) -> DocumentResult<Self> {
        let templates = Arc::new(TemplateStore::load(
            &config.templates_dir,
            &config.default_template,
        )?);

        Ok(ApiState {
            generator: Arc::new(PdfGenerator::new(templates, renderer)),
        })
    }
}
