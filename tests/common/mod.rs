//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pdf_generation_service::api::AppConfig;
use pdf_generation_service::{DocumentError, DocumentResult, PageRenderer, TemplateStore};

/// Echoes the stylesheet and markup instead of producing a real PDF, so
/// tests can assert on what was rendered.
#[derive(Default)]
pub struct MarkupRenderer {
    calls: AtomicUsize,
}

impl MarkupRenderer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageRenderer for MarkupRenderer {
    async fn render(&self, html: &str, stylesheet: &str) -> DocumentResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("%PDF-stub\n{}\n{}", stylesheet, html).into_bytes())
    }

    fn name(&self) -> &str {
        "markup-stub"
    }
}

pub struct FailingRenderer;

#[async_trait]
impl PageRenderer for FailingRenderer {
    async fn render(&self, _html: &str, _stylesheet: &str) -> DocumentResult<Vec<u8>> {
        Err(DocumentError::Rendering("engine crashed".to_string()))
    }

    fn name(&self) -> &str {
        "failing-stub"
    }
}

pub fn templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn test_config() -> AppConfig {
    AppConfig {
        templates_dir: templates_dir(),
        ..AppConfig::default()
    }
}

pub fn template_store() -> Arc<TemplateStore> {
    Arc::new(TemplateStore::load(&templates_dir(), "bon-livraison").unwrap())
}

pub fn sample_request(doc_type: &str) -> Value {
    json!({
        "type": doc_type,
        "companyInfo": {
            "raisonSociale": "ABC Company SARL",
            "adresse": "123 Rue Example, Alger",
            "telephone": "+213 555 123 456",
            "email": "contact@abc.com",
            "nif": "123456789012345",
            "nis": "123456789012345",
            "rc": "12345678",
            "art": "123456789"
        },
        "clientInfo": {
            "nom": "Client XYZ",
            "adresse": "456 Rue Client, Oran",
            "telephone": "+213 555 987 654"
        },
        "documentInfo": {
            "numero": "FAC-2024-001",
            "date": "2024-01-15",
            "modePaiement": "Virement bancaire"
        },
        "products": [
            {
                "designation": "Produit A",
                "quantite": 10,
                "unite": "pièce",
                "prixUnitaire": 100.5,
                "tauxTVA": 19
            }
        ],
        "logoUrl": "https://example.com/logo.png"
    })
}
