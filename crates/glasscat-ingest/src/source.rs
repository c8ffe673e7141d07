use std::path::Path;

use glasscat_model::{ExtractionError, RawRow};

use crate::extraction_log::ExtractionLog;
use crate::pages::TablePagesSource;
use crate::spreadsheet::SpreadsheetSource;

/// One extracted table page (or sheet), rows in source order.
#[derive(Debug, Clone)]
pub struct Page {
    pub label: String,
    pub rows: Vec<RawRow>,
}

/// Sheet selection for spreadsheet sources: numeric index or name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl SheetSelector {
    /// A bare integer selects by index, anything else by name.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<usize>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Name(raw.trim().to_string()),
        }
    }
}

/// Location parameters for opening a source document.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    pub sheet: SheetSelector,
    /// Zero-based row where the table (header included) starts; rows above
    /// it are title matter and are not read.
    pub header_row: usize,
}

/// Common contract for source adapters.
///
/// Reads every page in source order, emitting one extraction-log line per
/// page. Individual bad pages are logged and skipped; only whole-source
/// failures (unopenable, missing sheet, zero tables) are fatal.
pub trait SourceReader {
    fn read_pages(&mut self, log: &mut ExtractionLog) -> Result<Vec<Page>, ExtractionError>;
}

/// Opens the right adapter for a source path.
///
/// Directories and `.csv` files become table-page sources; `.xlsx`/`.xls`
/// become spreadsheet sources.
pub fn open_source(
    path: &Path,
    options: SourceOptions,
) -> Result<Box<dyn SourceReader>, ExtractionError> {
    if path.is_dir() {
        return Ok(Box::new(TablePagesSource::from_dir(path)?));
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    match extension.as_str() {
        "xlsx" | "xls" => Ok(Box::new(SpreadsheetSource::new(path, options))),
        "csv" => Ok(Box::new(TablePagesSource::single_file(path))),
        _ => Err(ExtractionError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
