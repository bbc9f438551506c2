pub mod pdf;

pub use pdf::{PdfGenerator, RenderedDocument, RenderedMarkup};
