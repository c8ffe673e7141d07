//! Adapter for catalogs already extracted into per-page CSV tables.
//!
//! A directory of `.csv` files is read as one document, one file per page
//! in file-name order; a single `.csv` file is a one-page document.

use std::fs;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use glasscat_model::{ExtractionError, RawRow};

use crate::extraction_log::{ExtractionLog, PageStatus};
use crate::source::{Page, SourceReader};

pub struct TablePagesSource {
    origin: PathBuf,
    files: Vec<PathBuf>,
}

impl TablePagesSource {
    pub fn from_dir(dir: &Path) -> Result<Self, ExtractionError> {
        let entries = fs::read_dir(dir).map_err(|source| ExtractionError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ExtractionError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let is_csv = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if is_csv {
                files.push(path);
            }
        }
        files.sort();
        Ok(Self {
            origin: dir.to_path_buf(),
            files,
        })
    }

    pub fn single_file(path: &Path) -> Self {
        Self {
            origin: path.to_path_buf(),
            files: vec![path.to_path_buf()],
        }
    }
}

impl SourceReader for TablePagesSource {
    fn read_pages(&mut self, log: &mut ExtractionLog) -> Result<Vec<Page>, ExtractionError> {
        if self.files.is_empty() {
            return Err(ExtractionError::NoTables {
                path: self.origin.clone(),
            });
        }

        let mut pages = Vec::new();
        for path in &self.files {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let label = format!("page {name}");

            let mut reader = match ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_path(path)
            {
                Ok(reader) => reader,
                Err(error) => {
                    return Err(ExtractionError::Open {
                        path: path.clone(),
                        message: error.to_string(),
                    });
                }
            };

            let mut rows = Vec::new();
            let mut irregular = false;
            for (index, record) in reader.records().enumerate() {
                match record {
                    Ok(record) => {
                        let cells = record.iter().map(|cell| cell.trim().to_string()).collect();
                        rows.push(RawRow::new(label.clone(), index, cells));
                    }
                    Err(error) => {
                        debug!(page = %label, %error, "unreadable record, skipping page");
                        irregular = true;
                        break;
                    }
                }
            }

            if irregular {
                log.page(&label, PageStatus::IrregularLayout);
            } else if rows.is_empty() {
                log.page(&label, PageStatus::Empty);
            } else {
                log.page(&label, PageStatus::Ok { rows: rows.len() });
                pages.push(Page { label, rows });
            }
        }

        if pages.is_empty() {
            return Err(ExtractionError::NoTables {
                path: self.origin.clone(),
            });
        }
        Ok(pages)
    }
}
