//! Validator accounting behavior.

use glasscat_model::{DiscardReason, Position, RecordCandidate, Side};
use glasscat_validate::Validator;

fn candidate(brand: Option<&str>, model: Option<&str>, piece: Option<&str>) -> RecordCandidate {
    RecordCandidate {
        source_page: "page 1".to_string(),
        source_row: 0,
        brand: brand.map(str::to_string),
        model: model.map(str::to_string),
        piece: piece.map(str::to_string),
        code: Some("31193".to_string()),
        price: Some(238788.11),
        dimensions: None,
        color: None,
        degrade: None,
        position: Position::Unknown,
        side: Side::Izquierda,
    }
}

#[test]
fn accepts_complete_records() {
    let mut validator = Validator::new();
    let record = validator
        .check(candidate(
            Some("CHEVROLET"),
            Some("ASTRA MOD.'05/'12"),
            Some("PUERTA TRAS.IZQ."),
        ))
        .expect("record accepted");
    assert_eq!(record.brand, "CHEVROLET");
    assert_eq!(record.price, 238788.11);

    let report = validator.finish();
    assert_eq!(report.rows_read, 1);
    assert_eq!(report.valid, 1);
    assert!(report.is_balanced());
}

#[test]
fn first_failing_check_names_the_reason() {
    let mut validator = Validator::new();
    // Missing everything: counted once, as missing-brand.
    assert!(validator.check(candidate(None, None, None)).is_none());
    assert!(
        validator
            .check(candidate(Some("FORD"), None, None))
            .is_none()
    );
    assert!(
        validator
            .check(candidate(Some("FORD"), Some("KA"), None))
            .is_none()
    );

    let mut no_price = candidate(Some("FORD"), Some("KA"), Some("LUNETA"));
    no_price.price = None;
    assert!(validator.check(no_price).is_none());

    let mut zero_price = candidate(Some("FORD"), Some("KA"), Some("LUNETA"));
    zero_price.price = Some(0.0);
    assert!(validator.check(zero_price).is_none());

    let report = validator.finish();
    assert_eq!(report.rows_read, 5);
    assert_eq!(report.valid, 0);
    assert_eq!(report.discarded(DiscardReason::MissingBrand), 1);
    assert_eq!(report.discarded(DiscardReason::MissingModel), 1);
    assert_eq!(report.discarded(DiscardReason::MissingPiece), 1);
    assert_eq!(report.discarded(DiscardReason::MissingPrice), 2);
    assert!(report.is_balanced());
}

#[test]
fn duplicates_keep_the_first_record() {
    let mut validator = Validator::new();
    let first = validator.check(candidate(
        Some("CHEVROLET"),
        Some("ASTRA"),
        Some("PUERTA TRAS.IZQ."),
    ));
    assert!(first.is_some());

    // Identical on (brand, model, piece, code) even with a different price.
    let mut second = candidate(Some("CHEVROLET"), Some("ASTRA"), Some("PUERTA TRAS.IZQ."));
    second.price = Some(999.99);
    assert!(validator.check(second).is_none());

    // Different code: not a duplicate.
    let mut third = candidate(Some("CHEVROLET"), Some("ASTRA"), Some("PUERTA TRAS.IZQ."));
    third.code = Some("31194".to_string());
    assert!(validator.check(third).is_some());

    let report = validator.finish();
    assert_eq!(report.valid, 2);
    assert_eq!(report.discarded(DiscardReason::Duplicate), 1);
    assert!(report.is_balanced());
}

#[test]
fn missing_code_records_dedupe_on_empty_code() {
    let mut validator = Validator::new();
    let mut first = candidate(Some("FIAT"), Some("UNO"), Some("LUNETA"));
    first.code = None;
    let mut second = candidate(Some("FIAT"), Some("UNO"), Some("LUNETA"));
    second.code = None;

    assert!(validator.check(first).is_some());
    assert!(validator.check(second).is_none());
    assert_eq!(validator.report().discarded(DiscardReason::Duplicate), 1);
}

#[test]
fn header_and_noise_counters_stay_out_of_the_balance() {
    let mut validator = Validator::new();
    validator.note_brand_header();
    validator.note_model_header();
    validator.note_noise();
    validator.note_unclassifiable();
    assert!(
        validator
            .check(candidate(Some("FORD"), Some("KA"), Some("LUNETA")))
            .is_some()
    );

    let report = validator.finish();
    assert_eq!(report.rows_read, 1);
    assert_eq!(report.valid, 1);
    assert_eq!(report.noise, 1);
    assert_eq!(report.unclassifiable, 1);
    assert_eq!(report.brand_headers, 1);
    assert_eq!(report.model_headers, 1);
    assert!(report.is_balanced());
}
