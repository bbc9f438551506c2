use actix_web::http::header;
use actix_web::{web, HttpResponse};
use prometheus::{Encoder, TextEncoder};

use super::error::{ApiError, ApiResult};
use super::state::ApiState;
use crate::models::GeneratePdfRequest;

/// `POST /generate-pdf`: render the document and return it as an attachment.
pub async fn generate_pdf(
    data: web::Json<GeneratePdfRequest>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let request = data.into_inner();

    let document = state.generator.generate(&request).await.map_err(|e| {
        tracing::error!(
            error = %e,
            stage = e.stage(),
            numero = %request.document_info.numero,
            "Failed to generate document"
        );
        ApiError::from(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", header_safe(&document.filename)),
        ))
        .body(document.bytes))
}

/// Drops characters that would break out of the header value or its
/// `filename` parameter.
fn header_safe(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .collect()
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "pdf-generation"
    }))
}

pub async fn metrics_endpoint() -> ApiResult<HttpResponse> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];

    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to encode metrics: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer))
}
