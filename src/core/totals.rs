//! Line and document totals.
//!
//! Amounts are computed with `rust_decimal` and rounded once, at the end, to
//! two places using round-half-away-from-zero (`0.125` prints as `0.13`).

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::core::{DocumentError, DocumentResult};
use crate::models::{Product, Totals};

/// Computed amounts for a single product line, formatted for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAmounts {
    pub montant_ht: String,
    pub montant_tva: String,
    pub montant_ttc: String,
}

/// Derives document totals from the product lines.
pub fn compute_totals(products: &[Product]) -> DocumentResult<Totals> {
    let mut total_ht = Decimal::ZERO;
    let mut total_tva = Decimal::ZERO;

    for product in products {
        let (ht, tva) = line_values(product)?;
        total_ht = checked(total_ht.checked_add(ht), "totalHT")?;
        total_tva = checked(total_tva.checked_add(tva), "totalTVA")?;
    }

    let total_ttc = checked(total_ht.checked_add(total_tva), "totalTTC")?;

    Ok(Totals {
        total_ht: format_amount(total_ht),
        total_tva: format_amount(total_tva),
        total_ttc: format_amount(total_ttc),
    })
}

/// Amounts for one product line.
pub fn line_amount(product: &Product) -> DocumentResult<LineAmounts> {
    let (ht, tva) = line_values(product)?;
    let ttc = checked(ht.checked_add(tva), &product.designation)?;
    Ok(LineAmounts {
        montant_ht: format_amount(ht),
        montant_tva: format_amount(tva),
        montant_ttc: format_amount(ttc),
    })
}

/// Formats an amount with exactly two decimals.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

fn line_values(product: &Product) -> DocumentResult<(Decimal, Decimal)> {
    let quantity = to_decimal(product.quantite, "quantite")?;
    let unit_price = match product.prix_unitaire {
        Some(price) => to_decimal(price, "prixUnitaire")?,
        None => Decimal::ZERO,
    };
    let rate = match product.taux_tva {
        Some(rate) => to_decimal(rate, "tauxTVA")?,
        None => Decimal::ZERO,
    };

    let ht = checked(quantity.checked_mul(unit_price), &product.designation)?;
    let tva = checked(
        ht.checked_mul(rate)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED)),
        &product.designation,
    )?;
    Ok((ht, tva))
}

fn to_decimal(value: f64, field: &str) -> DocumentResult<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| {
        DocumentError::Numeric(format!("{} value {} cannot be represented", field, value))
    })
}

fn checked(value: Option<Decimal>, context: &str) -> DocumentResult<Decimal> {
    value.ok_or_else(|| DocumentError::Numeric(format!("overflow while computing {}", context)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(quantite: f64, prix: Option<f64>, taux: Option<f64>) -> Product {
        Product {
            designation: "Produit".to_string(),
            quantite,
            unite: "pièce".to_string(),
            prix_unitaire: prix,
            taux_tva: taux,
            observation: None,
            motif_retour: None,
        }
    }

    #[test]
    fn test_single_line_with_tax() {
        let totals = compute_totals(&[product(10.0, Some(100.5), Some(19.0))]).unwrap();
        assert_eq!(totals.total_ht, "1005.00");
        assert_eq!(totals.total_tva, "190.95");
        assert_eq!(totals.total_ttc, "1195.95");
    }

    #[test]
    fn test_empty_products_give_zero_totals() {
        let totals = compute_totals(&[]).unwrap();
        assert_eq!(totals.total_ht, "0.00");
        assert_eq!(totals.total_tva, "0.00");
        assert_eq!(totals.total_ttc, "0.00");
    }

    #[test]
    fn test_missing_price_contributes_nothing() {
        let products = vec![
            product(3.0, None, Some(19.0)),
            product(2.0, Some(50.0), None),
        ];
        let totals = compute_totals(&products).unwrap();
        assert_eq!(totals.total_ht, "100.00");
        assert_eq!(totals.total_tva, "0.00");
        assert_eq!(totals.total_ttc, "100.00");
    }

    #[test]
    fn test_multiple_lines_sum_before_rounding() {
        let products = vec![
            product(1.0, Some(0.125), None),
            product(1.0, Some(0.125), None),
        ];
        assert_eq!(compute_totals(&products).unwrap().total_ht, "0.25");
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(compute_totals(&[product(1.0, Some(0.125), None)]).unwrap().total_ht, "0.13");
        assert_eq!(compute_totals(&[product(1.5, Some(0.25), None)]).unwrap().total_ht, "0.38");
        assert_eq!(format_amount(Decimal::new(-125, 3)), "-0.13");
    }

    #[test]
    fn test_fractional_quantity() {
        let totals = compute_totals(&[product(2.5, Some(40.0), Some(9.0))]).unwrap();
        assert_eq!(totals.total_ht, "100.00");
        assert_eq!(totals.total_tva, "9.00");
        assert_eq!(totals.total_ttc, "109.00");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        let totals = compute_totals(&[product(-1.0, Some(0.0), None)]).unwrap();
        assert_eq!(totals.total_ht, "0.00");
    }

    #[test]
    fn test_unrepresentable_amount_is_an_error() {
        let err = compute_totals(&[product(1e30, Some(1.0), None)]).unwrap_err();
        assert!(matches!(err, DocumentError::Numeric(_)));
    }

    #[test]
    fn test_line_amount_with_tax() {
        assert_eq!(
            line_amount(&product(10.0, Some(100.5), Some(19.0))).unwrap(),
            LineAmounts {
                montant_ht: "1005.00".to_string(),
                montant_tva: "190.95".to_string(),
                montant_ttc: "1195.95".to_string(),
            }
        );
        assert_eq!(line_amount(&product(1.0, None, None)).unwrap().montant_ttc, "0.00");
    }

    #[test]
    fn test_line_amount_rejects_unrepresentable_quantity() {
        let err = line_amount(&product(1e30, Some(1.0), None)).unwrap_err();
        assert!(matches!(err, DocumentError::Numeric(_)));
    }
}
