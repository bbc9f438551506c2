mod common;

use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

use common::{sample_request, template_store, FailingRenderer, MarkupRenderer};
use pdf_generation_service::metrics::RENDER_DURATION;
use pdf_generation_service::{DocumentType, GeneratePdfRequest, PdfGenerator, Totals};

fn generator() -> PdfGenerator {
    PdfGenerator::new(template_store(), Arc::new(MarkupRenderer::default()))
}

fn request(doc_type: &str) -> GeneratePdfRequest {
    serde_json::from_value(sample_request(doc_type)).unwrap()
}

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

#[test]
fn every_shipped_template_loads() {
    let store = template_store();
    let names: Vec<&str> = store.names().collect();
    for name in [
        "layout.html",
        "bon-livraison.html",
        "bon-commande.html",
        "bon-retour.html",
        "facture.html",
        "facture-avoir.html",
        "facture-proforma.html",
    ] {
        assert!(names.contains(&name), "missing {}", name);
    }
    assert_eq!(store.default_template(), "bon-livraison.html");
}

#[test]
fn types_without_a_template_fall_back_to_default() {
    let store = template_store();
    assert_eq!(store.resolve(DocumentType::Facture), "facture.html");
    for doc_type in [
        DocumentType::Proforma,
        DocumentType::BonVersement,
        DocumentType::BonReception,
    ] {
        assert_eq!(store.resolve(doc_type), "bon-livraison.html");
    }
}

#[test]
fn every_document_type_renders_its_title() {
    let generator = generator();
    for doc_type in DocumentType::ALL {
        let markup = generator
            .render_markup(&request(doc_type.as_str()), timestamp())
            .unwrap();
        assert!(
            markup.html.contains(&format!("<h1>{}</h1>", doc_type.title())),
            "{} rendered without its title",
            doc_type
        );
    }
}

#[test]
fn markup_contains_metadata_and_line_amounts() {
    let markup = generator()
        .render_markup(&request("facture"), timestamp())
        .unwrap();

    assert_eq!(markup.template, "facture.html");
    assert!(markup.html.contains("Document généré le 15/01/2024 10:30"));
    assert!(markup.html.contains("Date : 15/01/2024"));
    assert!(markup.html.contains("Mode de paiement : Virement bancaire"));
    assert!(markup.html.contains("Produit A"));
    assert!(markup.html.contains("100.50"));
    assert!(markup.html.contains("1,005.00"));
    assert!(markup.html.contains("<td class=\"num\">10</td>"));
    assert!(markup.html.contains("example.com"));
}

#[test]
fn uncomputable_line_prints_without_amounts_when_totals_are_supplied() {
    let mut request = request("facture");
    request.products[0].quantite = 1e30;
    request.totals = Some(Totals {
        total_ht: "1.00".to_string(),
        total_tva: "0.00".to_string(),
        total_ttc: "1.00".to_string(),
    });

    let markup = generator().render_markup(&request, timestamp()).unwrap();
    assert!(markup.html.contains("Produit A"));
    assert!(markup.html.contains("<td class=\"num\"></td>"));
    assert!(markup.html.contains("<strong>un dinar</strong>"));
}

#[test]
fn return_note_lists_return_reasons() {
    let mut value = sample_request("bon-retour");
    value["products"][0]["motifRetour"] = serde_json::json!("Produit défectueux");
    let request: GeneratePdfRequest = serde_json::from_value(value).unwrap();

    let markup = generator().render_markup(&request, timestamp()).unwrap();
    assert_eq!(markup.template, "bon-retour.html");
    assert!(markup.html.contains("Produit défectueux"));
}

#[actix_rt::test]
async fn same_request_renders_identical_bytes() {
    let generator = generator();
    let request = request("facture-avoir");

    let first = generator.generate_at(&request, timestamp()).await.unwrap();
    let second = generator.generate_at(&request, timestamp()).await.unwrap();

    assert_eq!(first.bytes, second.bytes);
    assert_eq!(first.filename, "FAC-2024-001.pdf");
    assert_eq!(first.template, "facture-avoir.html");
}

#[actix_rt::test]
async fn out_of_range_quantity_fails_generation() {
    let mut request = request("facture");
    request.products[0].quantite = 1e30;

    let err = generator().generate_at(&request, timestamp()).await.unwrap_err();
    assert_eq!(err.stage(), "totals");
}

#[actix_rt::test]
async fn failed_renders_are_not_timed() {
    let generator = PdfGenerator::new(template_store(), Arc::new(FailingRenderer));
    let timings = RENDER_DURATION.with_label_values(&["bon-reception"]);
    let before = timings.get_sample_count();

    let err = generator
        .generate_at(&request("bon-reception"), timestamp())
        .await
        .unwrap_err();

    assert_eq!(err.stage(), "page");
    assert_eq!(timings.get_sample_count(), before);
}
