//! Single-pass catalog pipeline.
//!
//! Stages run strictly in source order, one row fully processed before the
//! next: read → classify → stamp hierarchy → normalize → validate →
//! export. Row order carries the brand/model context, so rows within one
//! document are never processed in parallel.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use glasscat_ingest::{ExtractionLog, Page, SourceOptions, load_mapping, open_source};
use glasscat_model::{CatalogRecord, ColumnMapping, ValidationReport};
use glasscat_output::{export_records, write_validation_log};
use glasscat_transform::{ColumnLayout, HierarchyTracker, NoiseKind, RowRole, classify, materialize};
use glasscat_validate::Validator;

/// File locations and source options for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: PathBuf,
    pub mapping: Option<PathBuf>,
    pub output: PathBuf,
    pub extraction_log: PathBuf,
    pub validation_log: PathBuf,
    pub options: SourceOptions,
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunResult {
    pub records: usize,
    pub report: ValidationReport,
    pub output: PathBuf,
}

/// Executes the whole pipeline for one source document.
///
/// Fatal failures (unopenable source, zero tables, unwritable output)
/// surface as errors naming the failing stage; per-row and per-page
/// problems are recovered and accounted for in the logs.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let mapping = load_mapping(config.mapping.as_deref()).context("load column mapping")?;
    let mut log =
        ExtractionLog::create(&config.extraction_log).context("open extraction log")?;
    log.info(format!("processing catalog: {}", config.source.display()));

    let mut source =
        open_source(&config.source, config.options.clone()).context("open source")?;
    let pages = source.read_pages(&mut log).context("extract tables")?;
    info!(pages = pages.len(), source = %config.source.display(), "extraction complete");

    let (records, report) = process_pages(&pages, &mapping, &mut log);
    if !report.is_balanced() {
        error!("validation report does not balance; accounting bug");
    }

    export_records(&records, &config.output).context("export records")?;
    write_validation_log(&report, &config.validation_log).context("write validation log")?;
    log.info(format!("export complete: {}", config.output.display()));
    info!(
        valid = report.valid,
        discarded = report.discarded_total(),
        "validation complete"
    );

    Ok(RunResult {
        records: records.len(),
        report,
        output: config.output.clone(),
    })
}

/// The core pass over extracted pages.
///
/// Header rows (cells resolving canonical fields through the mapping)
/// update the active column layout and count as neither records nor noise;
/// everything else goes through classification.
pub fn process_pages(
    pages: &[Page],
    mapping: &ColumnMapping,
    log: &mut ExtractionLog,
) -> (Vec<CatalogRecord>, ValidationReport) {
    let mut layout = ColumnLayout::default();
    let mut tracker = HierarchyTracker::new();
    let mut validator = Validator::new();
    let mut records = Vec::new();

    for page in pages {
        for row in &page.rows {
            if let Some(detected) = ColumnLayout::detect_header(row, mapping) {
                debug!(location = %row.location(), "header row adopted as column layout");
                layout = detected;
                continue;
            }
            match classify(row) {
                RowRole::BrandHeader(text) => {
                    validator.note_brand_header();
                    tracker.on_brand(text);
                }
                RowRole::ModelHeader(text) => {
                    validator.note_model_header();
                    tracker.on_model(text, &row.location());
                }
                RowRole::Noise(NoiseKind::Blank) => {
                    validator.note_noise();
                    debug!(location = %row.location(), "blank row");
                }
                RowRole::Noise(NoiseKind::Unclassifiable) => {
                    validator.note_unclassifiable();
                    debug!(location = %row.location(), "unclassifiable row");
                }
                RowRole::ProductCandidate => {
                    let (brand, model) = tracker.stamp();
                    let (candidate, warnings) = materialize(row, &layout, brand, model);
                    for warning in &warnings {
                        log.unparsed_token(&warning.location, &warning.token);
                    }
                    if let Some(record) = validator.check(candidate) {
                        records.push(record);
                    }
                }
            }
        }
    }

    (records, validator.finish())
}
