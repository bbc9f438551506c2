use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("template not found: {0}")]
    MissingTemplate(String),

    #[error("rendering failed: {0}")]
    Rendering(String),

    #[error("numeric conversion failed: {0}")]
    Numeric(String),
}

impl DocumentError {
    /// Pipeline stage label used for metrics and logs.
    pub fn stage(&self) -> &'static str {
        match self {
            DocumentError::Io(_) | DocumentError::Rendering(_) => "page",
            DocumentError::Template(_) | DocumentError::MissingTemplate(_) => "template",
            DocumentError::Numeric(_) => "totals",
        }
    }
}

pub type DocumentResult<T> = Result<T, DocumentError>;
