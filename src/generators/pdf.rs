use chrono::{Local, NaiveDateTime};
use minijinja::Value;
use serde::Serialize;
use std::sync::Arc;

use crate::core::{
    amount_in_words, compute_totals, line_amount, DocumentError, DocumentResult, LineAmounts,
    PdfConfig,
};
use crate::metrics;
use crate::models::{
    ClientInfo, CompanyInfo, DocumentInfo, DocumentType, GeneratePdfRequest, Product, Totals,
};
use crate::pdf::PageRenderer;
use crate::templates::TemplateStore;

/// Everything a document template can reference.
#[derive(Debug, Serialize)]
struct DocumentContext<'a> {
    document_title: &'static str,
    company: &'a CompanyInfo,
    client: &'a ClientInfo,
    document: &'a DocumentInfo,
    products: &'a [Product],
    lines: Vec<PrintedLine<'a>>,
    totals: &'a Totals,
    #[serde(rename = "type")]
    document_type: DocumentType,
    generated_date: Value,
    total_ttc_words: String,
    logo_url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct PrintedLine<'a> {
    #[serde(flatten)]
    product: &'a Product,
    #[serde(flatten)]
    amounts: Option<LineAmounts>,
}

#[derive(Debug, Clone)]
pub struct RenderedMarkup {
    pub template: String,
    pub html: String,
}

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub filename: String,
    pub template: String,
    pub bytes: Vec<u8>,
}

/// Turns a validated request into a paged document.
pub struct PdfGenerator {
    templates: Arc<TemplateStore>,
    renderer: Arc<dyn PageRenderer>,
    config: PdfConfig,
}

impl PdfGenerator {
    pub fn new(templates: Arc<TemplateStore>, renderer: Arc<dyn PageRenderer>) -> Self {
        PdfGenerator {
            templates,
            renderer,
            config: PdfConfig::default(),
        }
    }

    pub async fn generate(&self, request: &GeneratePdfRequest) -> DocumentResult<RenderedDocument> {
        self.generate_at(request, Local::now().naive_local()).await
    }

    /// Same as [`generate`](Self::generate) with a fixed generation timestamp.
    pub async fn generate_at(
        &self,
        request: &GeneratePdfRequest,
        generated_at: NaiveDateTime,
    ) -> DocumentResult<RenderedDocument> {
        let doc_type = request.document_type.as_str();
        let timer = metrics::RENDER_DURATION
            .with_label_values(&[doc_type])
            .start_timer();

        let rendered = async {
            let markup = self.render_markup(request, generated_at)?;
            let bytes = self
                .renderer
                .render(&markup.html, &self.config.to_css())
                .await?;
            Ok::<_, DocumentError>((markup, bytes))
        }
        .await;

        let (markup, bytes) = match rendered {
            Ok(rendered) => {
                timer.observe_duration();
                rendered
            }
            Err(e) => {
                timer.stop_and_discard();
                return Err(e);
            }
        };

        metrics::DOCUMENTS_GENERATED
            .with_label_values(&[doc_type])
            .inc();

        tracing::info!(
            document_type = doc_type,
            numero = %request.document_info.numero,
            template = %markup.template,
            engine = self.renderer.name(),
            bytes = bytes.len(),
            "Generated document"
        );

        Ok(RenderedDocument {
            filename: format!("{}.pdf", request.document_info.numero),
            template: markup.template,
            bytes,
        })
    }

    /// Binds the request into its template without converting to PDF.
    pub fn render_markup(
        &self,
        request: &GeneratePdfRequest,
        generated_at: NaiveDateTime,
    ) -> DocumentResult<RenderedMarkup> {
        let computed;
        let totals = match &request.totals {
            Some(totals) => totals,
            None => {
                computed = compute_totals(&request.products)?;
                &computed
            }
        };

        // Supplied totals stand on their own: a line that cannot be computed
        // prints without amounts instead of failing the document.
        let lines = request
            .products
            .iter()
            .map(|product| {
                let amounts = match line_amount(product) {
                    Ok(amounts) => Some(amounts),
                    Err(e) if request.totals.is_some() => {
                        tracing::debug!(
                            error = %e,
                            designation = %product.designation,
                            "Printing line without amounts"
                        );
                        None
                    }
                    Err(e) => return Err(e),
                };
                Ok(PrintedLine { product, amounts })
            })
            .collect::<DocumentResult<Vec<_>>>()?;

        let context = DocumentContext {
            document_title: request.document_type.title(),
            company: &request.company_info,
            client: &request.client_info,
            document: &request.document_info,
            products: &request.products,
            lines,
            totals,
            document_type: request.document_type,
            generated_date: Value::from_safe_string(generated_at.format("%d/%m/%Y %H:%M").to_string()),
            total_ttc_words: amount_in_words(&totals.total_ttc),
            logo_url: request.logo_url.as_deref(),
        };

        let template = self.templates.resolve(request.document_type).to_string();
        let html = self.templates.render(&template, &context)?;

        Ok(RenderedMarkup { template, html })
    }
}
