pub mod extraction_log;
pub mod mapping_file;
pub mod pages;
pub mod source;
pub mod spreadsheet;

pub use extraction_log::{ExtractionLog, PageStatus};
pub use mapping_file::load_mapping;
pub use pages::TablePagesSource;
pub use source::{Page, SheetSelector, SourceOptions, SourceReader, open_source};
pub use spreadsheet::SpreadsheetSource;
