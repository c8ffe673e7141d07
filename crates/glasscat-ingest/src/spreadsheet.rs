//! Spreadsheet adapter backed by calamine.

use std::path::{Path, PathBuf};

use calamine::{Reader, open_workbook_auto};

use glasscat_model::{ExtractionError, RawRow};

use crate::extraction_log::{ExtractionLog, PageStatus};
use crate::source::{Page, SheetSelector, SourceOptions, SourceReader};

pub struct SpreadsheetSource {
    path: PathBuf,
    options: SourceOptions,
}

impl SpreadsheetSource {
    pub fn new(path: &Path, options: SourceOptions) -> Self {
        Self {
            path: path.to_path_buf(),
            options,
        }
    }
}

impl SourceReader for SpreadsheetSource {
    fn read_pages(&mut self, log: &mut ExtractionLog) -> Result<Vec<Page>, ExtractionError> {
        let mut workbook =
            open_workbook_auto(&self.path).map_err(|error| ExtractionError::Open {
                path: self.path.clone(),
                message: error.to_string(),
            })?;

        let sheet_names = workbook.sheet_names().to_vec();
        let sheet = match &self.options.sheet {
            SheetSelector::Index(index) => {
                sheet_names
                    .get(*index)
                    .cloned()
                    .ok_or_else(|| ExtractionError::SheetNotFound {
                        path: self.path.clone(),
                        sheet: index.to_string(),
                    })?
            }
            SheetSelector::Name(name) => sheet_names
                .iter()
                .find(|candidate| candidate.as_str() == name)
                .cloned()
                .ok_or_else(|| ExtractionError::SheetNotFound {
                    path: self.path.clone(),
                    sheet: name.clone(),
                })?,
        };

        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|error| ExtractionError::Open {
                path: self.path.clone(),
                message: error.to_string(),
            })?;

        let label = format!("sheet {sheet}");
        let mut rows = Vec::new();
        for (index, cells) in range.rows().enumerate() {
            // Rows above the configured header offset are title matter.
            if index < self.options.header_row {
                continue;
            }
            let cells: Vec<String> = cells
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();
            rows.push(RawRow::new(label.clone(), index, cells));
        }

        if rows.is_empty() {
            log.page(&label, PageStatus::Empty);
            return Err(ExtractionError::NoTables {
                path: self.path.clone(),
            });
        }

        log.page(&label, PageStatus::Ok { rows: rows.len() });
        Ok(vec![Page { label, rows }])
    }
}
