use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ClientInfo, CompanyInfo, Product, Totals};

/// The closed set of commercial documents the service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    BonLivraison,
    BonCommande,
    Facture,
    FactureProforma,
    Proforma,
    BonRetour,
    FactureAvoir,
    BonVersement,
    BonReception,
}

impl DocumentType {
    pub const ALL: [DocumentType; 9] = [
        DocumentType::BonLivraison,
        DocumentType::BonCommande,
        DocumentType::Facture,
        DocumentType::FactureProforma,
        DocumentType::Proforma,
        DocumentType::BonRetour,
        DocumentType::FactureAvoir,
        DocumentType::BonVersement,
        DocumentType::BonReception,
    ];

    /// Wire identifier, also the template key.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::BonLivraison => "bon-livraison",
            DocumentType::BonCommande => "bon-commande",
            DocumentType::Facture => "facture",
            DocumentType::FactureProforma => "facture-proforma",
            DocumentType::Proforma => "proforma",
            DocumentType::BonRetour => "bon-retour",
            DocumentType::FactureAvoir => "facture-avoir",
            DocumentType::BonVersement => "bon-versement",
            DocumentType::BonReception => "bon-reception",
        }
    }

    /// Title printed at the top of the document.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentType::BonLivraison => "BON DE LIVRAISON",
            DocumentType::BonCommande => "BON DE COMMANDE",
            DocumentType::Facture => "FACTURE",
            DocumentType::FactureProforma | DocumentType::Proforma => "FACTURE PROFORMA",
            DocumentType::BonRetour => "BON DE RETOUR",
            DocumentType::FactureAvoir => "FACTURE AVOIR",
            DocumentType::BonVersement => "BON DE VERSEMENT",
            DocumentType::BonReception => "BON DE RÉCEPTION",
        }
    }

    pub fn template_name(&self) -> String {
        format!("{}.html", self.as_str())
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub numero: String,
    pub date: String,
    pub bon_commande: Option<String>,
    pub date_livraison: Option<String>,
    pub date_echeance: Option<String>,
    pub conditions: Option<String>,
    pub mode_paiement: Option<String>,
    pub facture: Option<String>,
    pub motif_general: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePdfRequest {
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub company_info: CompanyInfo,
    pub client_info: ClientInfo,
    pub document_info: DocumentInfo,
    pub products: Vec<Product>,
    pub totals: Option<Totals>,
    pub logo_url: Option<String>,
}
