//! CLI argument definitions for the catalog processor.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "glasscat",
    version,
    about = "Normalize automotive-glass price catalogs into a validated JSON record set",
    long_about = "Reads a semi-structured price catalog (a spreadsheet, a CSV table, or a\n\
                  directory of per-page CSV tables), classifies brand/model header rows,\n\
                  carries the hierarchy onto product rows, normalizes text and prices,\n\
                  validates every record, and exports a flat JSON artifact plus\n\
                  extraction and validation logs."
)]
pub struct Cli {
    /// Source document: .xlsx/.xls file, .csv table, or directory of per-page .csv tables.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// JSON column-mapping override file ({"source label": "canonical field"}).
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Output artifact path.
    #[arg(long = "output", value_name = "FILE", default_value = "data/catalog.json")]
    pub output: PathBuf,

    /// Extraction log path (one line per page/sheet read).
    #[arg(
        long = "extraction-log",
        value_name = "FILE",
        default_value = "logs/extraction.log"
    )]
    pub extraction_log: PathBuf,

    /// Validation log path (one summary per run).
    #[arg(
        long = "validation-log",
        value_name = "FILE",
        default_value = "logs/validation.log"
    )]
    pub validation_log: PathBuf,

    /// Sheet to read from spreadsheet sources, by index or name.
    #[arg(long = "sheet", value_name = "NAME|INDEX", default_value = "0")]
    pub sheet: String,

    /// Zero-based row where the table starts in spreadsheet sources.
    #[arg(long = "header-row", value_name = "N", default_value_t = 0)]
    pub header_row: usize,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
