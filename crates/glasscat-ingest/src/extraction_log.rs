//! Per-run extraction log: one timestamped line per page or sheet read,
//! plus unparsed-token warnings from downstream normalization.
//!
//! This is an audit artifact separate from `tracing` output; operators read
//! it after silent catalog updates.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use tracing::warn;

/// Outcome of reading one page/sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok { rows: usize },
    Empty,
    IrregularLayout,
}

/// Appending, line-buffered log writer. Write failures degrade to a
/// `tracing` warning rather than aborting the run.
pub struct ExtractionLog {
    writer: Option<BufWriter<File>>,
}

impl ExtractionLog {
    /// Opens (appending) the log file, creating parent directories.
    pub fn create(path: &Path) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
        })
    }

    /// A log that discards everything; used by tests.
    pub fn disabled() -> Self {
        Self { writer: None }
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        self.line("INFO", message.as_ref());
    }

    pub fn warning(&mut self, message: impl AsRef<str>) {
        self.line("WARNING", message.as_ref());
    }

    /// One entry per page read: location, row count or status marker.
    pub fn page(&mut self, label: &str, status: PageStatus) {
        match status {
            PageStatus::Ok { rows } => self.info(format!("{label}: {rows} rows")),
            PageStatus::Empty => self.warning(format!("{label}: empty")),
            PageStatus::IrregularLayout => {
                self.warning(format!("{label}: irregular layout, skipped"));
            }
        }
    }

    /// Records a token the normalizer could not interpret.
    pub fn unparsed_token(&mut self, location: &str, token: &str) {
        self.warning(format!("{location}: unparsed token {token:?}"));
    }

    fn line(&mut self, level: &str, message: &str) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if writeln!(writer, "{stamp} - {level} - {message}")
            .and_then(|()| writer.flush())
            .is_err()
        {
            warn!("failed to write extraction log line");
            self.writer = None;
        }
    }
}
