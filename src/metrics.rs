use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec,
};

pub static DOCUMENTS_GENERATED: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "documents_generated_total",
        "Documents rendered successfully, by document type",
        &["type"]
    )
    .expect("documents_generated_total can be registered")
});

pub static GENERATION_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "document_generation_failures_total",
        "Failed document generations, by pipeline stage",
        &["stage"]
    )
    .expect("document_generation_failures_total can be registered")
});

pub static RENDER_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "document_render_duration_seconds",
        "Time spent producing a document, by document type",
        &["type"]
    )
    .expect("document_render_duration_seconds can be registered")
});
