//! Per-run validation summary in the audit-log format.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::Local;

use glasscat_model::ValidationReport;

/// Appends the run summary: rows read, valid, discarded with per-reason
/// breakdown, plus the separately tracked noise and header counters.
pub fn write_validation_log(report: &ValidationReport, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut line = |message: String| writeln!(writer, "{stamp} - INFO - {message}");
    line(format!("rows read: {}", report.rows_read))?;
    line(format!("valid records: {}", report.valid))?;
    line(format!("discarded records: {}", report.discarded_total()))?;
    for (reason, count) in report.breakdown() {
        line(format!(" - {reason}: {count}"))?;
    }
    line(format!("noise rows: {}", report.noise))?;
    line(format!("unclassifiable rows: {}", report.unclassifiable))?;
    line(format!(
        "headers seen: {} brand, {} model",
        report.brand_headers, report.model_headers
    ))?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glasscat_model::DiscardReason;

    #[test]
    fn summary_lists_every_reason() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("logs").join("validation.log");

        let mut report = ValidationReport::default();
        for _ in 0..3 {
            report.read();
        }
        report.accept();
        report.discard(DiscardReason::MissingBrand);
        report.discard(DiscardReason::Duplicate);
        write_validation_log(&report, &path).expect("write log");

        let contents = std::fs::read_to_string(&path).expect("read log");
        assert!(contents.contains("rows read: 3"));
        assert!(contents.contains("valid records: 1"));
        assert!(contents.contains("discarded records: 2"));
        assert!(contents.contains(" - missing-brand: 1"));
        assert!(contents.contains(" - missing-price: 0"));
        assert!(contents.contains(" - duplicate: 1"));
    }
}
