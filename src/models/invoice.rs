use serde::{Deserialize, Serialize};

/// One printed line of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub designation: String,
    pub quantite: f64,
    pub unite: String,
    pub prix_unitaire: Option<f64>,
    #[serde(rename = "tauxTVA")]
    pub taux_tva: Option<f64>,
    pub observation: Option<String>,
    pub motif_retour: Option<String>,
}

/// Document totals as printed. Supplied totals are used verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(rename = "totalHT")]
    pub total_ht: String,
    #[serde(rename = "totalTVA")]
    pub total_tva: String,
    #[serde(rename = "totalTTC")]
    pub total_ttc: String,
}
