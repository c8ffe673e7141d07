use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures while opening or extracting a source document.
///
/// Per-page problems are recovered and logged by the reader; these variants
/// abort the whole run before any output is produced.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("cannot open source {path}: {message}")]
    Open { path: PathBuf, message: String },
    #[error("sheet {sheet:?} not found in {path}")]
    SheetNotFound { path: PathBuf, sheet: String },
    #[error("no tables extracted from {path}")]
    NoTables { path: PathBuf },
    #[error("unsupported source format: {path}")]
    UnsupportedFormat { path: PathBuf },
    #[error("invalid column mapping {path}: {message}")]
    Mapping { path: PathBuf, message: String },
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fatal failures while writing the output artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write output {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot serialize records: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}
