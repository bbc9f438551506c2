use serde::{Deserialize, Serialize};

/// Issuer of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub raison_sociale: String,
    pub adresse: String,
    pub telephone: String,
    pub email: Option<String>,
    pub nif: String,
    pub nis: String,
    pub rc: String,
    pub art: Option<String>,
}

/// Recipient of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub nom: String,
    pub adresse: String,
    pub telephone: Option<String>,
    pub nif: Option<String>,
    pub nis: Option<String>,
    pub art: Option<String>,
}

/// A single validation failure, reported with the JSON path of the field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}
