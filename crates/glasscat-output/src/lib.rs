pub mod exporter;
pub mod validation_log;

pub use exporter::export_records;
pub use validation_log::write_validation_log;
