//! End-to-end pipeline behavior.

use std::fs;

use glasscat_cli::pipeline::{RunConfig, process_pages, run};
use glasscat_ingest::{ExtractionLog, Page, SourceOptions};
use glasscat_model::{ColumnMapping, DiscardReason, Position, RawRow, Side};
use tempfile::tempdir;

fn page(label: &str, rows: &[&[&str]]) -> Page {
    Page {
        label: label.to_string(),
        rows: rows
            .iter()
            .enumerate()
            .map(|(index, cells)| {
                RawRow::new(
                    label,
                    index,
                    cells.iter().map(|cell| (*cell).to_string()).collect(),
                )
            })
            .collect(),
    }
}

#[test]
fn hierarchy_carries_onto_product_rows() {
    let pages = vec![page(
        "page 1",
        &[
            &["CHEVROLET"],
            &["ASTRA MOD.'05/'12"],
            &["PUERTA TRAS.IZQ.", "31193", "$238.788,11", "497x745"],
        ],
    )];
    let mut log = ExtractionLog::disabled();
    let (records, report) = process_pages(&pages, &ColumnMapping::default(), &mut log);

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.brand, "CHEVROLET");
    assert_eq!(record.model, "ASTRA MOD.'05/'12");
    assert_eq!(record.piece, "PUERTA TRAS.IZQ.");
    assert_eq!(record.code.as_deref(), Some("31193"));
    assert_eq!(record.price, 238788.11);
    assert_eq!(record.dimensions.as_deref(), Some("497x745"));
    assert_eq!(record.side, Side::Izquierda);
    assert_eq!(record.position, Position::Unknown);

    assert_eq!(report.rows_read, 1);
    assert_eq!(report.valid, 1);
    assert_eq!(report.brand_headers, 1);
    assert_eq!(report.model_headers, 1);
    assert!(report.is_balanced());
}

#[test]
fn product_before_any_brand_header_is_discarded() {
    let pages = vec![page(
        "page 1",
        &[
            &["PUERTA DEL.DER.", "11111", "$10.000,00"],
            &["CHEVROLET"],
            &["CORSA MOD.'08 EN ADEL."],
            &["PARABRISAS", "22222", "$20.000,00"],
        ],
    )];
    let mut log = ExtractionLog::disabled();
    let (records, report) = process_pages(&pages, &ColumnMapping::default(), &mut log);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].model, "CORSA MOD.2008 EN ADELANTE");
    assert_eq!(records[0].position, Position::Delantero);
    assert_eq!(report.rows_read, 2);
    assert_eq!(report.discarded(DiscardReason::MissingBrand), 1);
    assert!(report.is_balanced());
}

#[test]
fn duplicates_and_noise_are_accounted_separately() {
    let pages = vec![page(
        "page 1",
        &[
            &["FORD"],
            &["KA MOD.'97/'05"],
            &["LUNETA", "20627", "$48.293,94"],
            &["", ""],
            &["ver listado adjunto"],
            &["LUNETA", "20627", "$48.293,94"],
            &["LUNETA TERMICA", "20628", "CONSULTAR"],
        ],
    )];
    let mut log = ExtractionLog::disabled();
    let (records, report) = process_pages(&pages, &ColumnMapping::default(), &mut log);

    assert_eq!(records.len(), 1);
    assert_eq!(report.rows_read, 3);
    assert_eq!(report.valid, 1);
    assert_eq!(report.discarded(DiscardReason::Duplicate), 1);
    assert_eq!(report.discarded(DiscardReason::MissingPrice), 1);
    assert_eq!(report.noise, 1);
    assert_eq!(report.unclassifiable, 1);
    assert!(report.is_balanced());
}

#[test]
fn header_rows_reshape_the_layout_mid_document() {
    let pages = vec![page(
        "sheet Hoja1",
        &[
            &["MARCA", "MODELO", "PIEZA", "PRECIO", "LADO"],
            &["fiat", "uno", "parabrisas", "$1.500,00", "izquierda"],
        ],
    )];
    let mut log = ExtractionLog::disabled();
    let (records, report) = process_pages(&pages, &ColumnMapping::default(), &mut log);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].brand, "FIAT");
    assert_eq!(records[0].model, "UNO");
    assert_eq!(records[0].position, Position::Delantero);
    assert_eq!(records[0].side, Side::Izquierda);
    // The header row itself counts as neither record nor noise.
    assert_eq!(report.rows_read, 1);
    assert!(report.is_balanced());
}

#[test]
fn full_run_writes_artifact_and_logs() {
    let dir = tempdir().expect("tempdir");
    let source = dir.path().join("catalog.csv");
    fs::write(
        &source,
        "CHEVROLET\nASTRA MOD.'05/'12\n\"PUERTA TRAS.IZQ.\",31193,\"$238.788,11\",497x745\n",
    )
    .expect("write source");

    let config = RunConfig {
        source,
        mapping: None,
        output: dir.path().join("data").join("catalog.json"),
        extraction_log: dir.path().join("logs").join("extraction.log"),
        validation_log: dir.path().join("logs").join("validation.log"),
        options: SourceOptions::default(),
    };
    let result = run(&config).expect("run succeeds");
    assert_eq!(result.records, 1);

    let artifact = fs::read_to_string(&config.output).expect("artifact exists");
    let parsed: serde_json::Value = serde_json::from_str(&artifact).expect("artifact parses");
    assert_eq!(parsed[0]["brand"], "CHEVROLET");
    assert_eq!(parsed[0]["price"], "$238,788.11");

    let extraction = fs::read_to_string(&config.extraction_log).expect("extraction log");
    assert!(extraction.contains("catalog.csv: 3 rows"));
    let validation = fs::read_to_string(&config.validation_log).expect("validation log");
    assert!(validation.contains("valid records: 1"));
}

#[test]
fn zero_tables_fails_without_writing_an_artifact() {
    let dir = tempdir().expect("tempdir");
    let empty_source = dir.path().join("pages");
    fs::create_dir(&empty_source).expect("create source dir");

    let config = RunConfig {
        source: empty_source,
        mapping: None,
        output: dir.path().join("catalog.json"),
        extraction_log: dir.path().join("extraction.log"),
        validation_log: dir.path().join("validation.log"),
        options: SourceOptions::default(),
    };
    let error = run(&config).expect_err("zero tables is fatal");
    assert!(format!("{error:#}").contains("extract tables"));
    assert!(!config.output.exists());
    assert!(!config.validation_log.exists());
}
