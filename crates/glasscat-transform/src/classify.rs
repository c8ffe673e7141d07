//! Row classification.
//!
//! Rules apply in order, first match wins: blank rows are noise; an
//! all-letters upper-case row with no price cell is a brand header; an
//! upper-case row carrying a model token (`MOD.`, apostrophe, slash,
//! `EN ADEL`) and no price cell is a model header; any remaining row with a
//! price-like cell is a product candidate; everything else is
//! unclassifiable noise. Brand/model rules require the absence of a price
//! while products require its presence, so ties cannot occur.

use glasscat_model::{RawRow, is_price_like};

use crate::text::clean_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseKind {
    Blank,
    Unclassifiable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRole {
    BrandHeader(String),
    ModelHeader(String),
    ProductCandidate,
    Noise(NoiseKind),
}

fn is_brand_text(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
        && text.chars().all(|ch| ch.is_alphabetic() || ch == ' ')
        && text.chars().all(|ch| !ch.is_lowercase())
}

fn has_model_token(text: &str) -> bool {
    text.contains("MOD.") || text.contains('\'') || text.contains('/') || text.contains("EN ADEL")
}

pub fn classify(row: &RawRow) -> RowRole {
    if row.is_blank() {
        return RowRole::Noise(NoiseKind::Blank);
    }

    let has_price = row.cells.iter().any(|cell| is_price_like(cell));
    if !has_price
        && let Some(text) = row.primary_text().and_then(clean_text)
    {
        if is_brand_text(&text) {
            return RowRole::BrandHeader(text);
        }
        if text.chars().all(|ch| !ch.is_lowercase()) && has_model_token(&text) {
            return RowRole::ModelHeader(text);
        }
    }

    if has_price {
        RowRole::ProductCandidate
    } else {
        RowRole::Noise(NoiseKind::Unclassifiable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        RawRow::new("page 1", 0, cells.iter().map(|c| (*c).to_string()).collect())
    }

    #[test]
    fn brand_headers_are_upper_case_letters_only() {
        assert_eq!(
            classify(&row(&["CHEVROLET"])),
            RowRole::BrandHeader("CHEVROLET".to_string())
        );
        assert_eq!(
            classify(&row(&["ALFA ROMEO"])),
            RowRole::BrandHeader("ALFA ROMEO".to_string())
        );
        assert_eq!(
            classify(&row(&["CITRO\u{cb}N"])),
            RowRole::BrandHeader("CITRO\u{cb}N".to_string())
        );
    }

    #[test]
    fn model_headers_need_a_model_token() {
        assert_eq!(
            classify(&row(&["ASTRA MOD.'05/'12"])),
            RowRole::ModelHeader("ASTRA MOD.'05/'12".to_string())
        );
        assert_eq!(
            classify(&row(&["CORSA MOD.'08 EN ADEL."])),
            RowRole::ModelHeader("CORSA MOD.'08 EN ADEL.".to_string())
        );
    }

    #[test]
    fn rows_with_prices_are_product_candidates() {
        assert_eq!(
            classify(&row(&["PUERTA TRAS.IZQ.", "31193", "$238.788,11", "497x745"])),
            RowRole::ProductCandidate
        );
        // A bare numeric code is enough to read as a price.
        assert_eq!(classify(&row(&["LUNETA", "31193"])), RowRole::ProductCandidate);
    }

    #[test]
    fn blank_and_leftover_rows_are_noise() {
        assert_eq!(classify(&row(&["", "  "])), RowRole::Noise(NoiseKind::Blank));
        assert_eq!(
            classify(&row(&["ver nota al pie"])),
            RowRole::Noise(NoiseKind::Unclassifiable)
        );
        // Lower-case text with a slash is not a model header, and carries
        // no price: unclassifiable.
        assert_eq!(
            classify(&row(&["precios s/iva"])),
            RowRole::Noise(NoiseKind::Unclassifiable)
        );
    }

    #[test]
    fn price_presence_beats_header_patterns() {
        // Upper-case text plus a price cell elsewhere in the row.
        assert_eq!(
            classify(&row(&["PARABRISAS FIESTA", "$100.000,00"])),
            RowRole::ProductCandidate
        );
    }
}
