pub mod api;
pub mod core;
pub mod generators;
pub mod metrics;
pub mod models;
pub mod pdf;
pub mod templates;

// Re-export commonly used types
pub use crate::core::{amount_in_words, compute_totals, DocumentError, DocumentResult, PdfConfig};
pub use generators::{PdfGenerator, RenderedDocument};
pub use models::{DocumentType, GeneratePdfRequest, Product, Totals};
pub use pdf::{CommandRenderer, PageRenderer};
pub use templates::TemplateStore;
