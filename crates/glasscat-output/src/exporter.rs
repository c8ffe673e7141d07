//! JSON export of the validated record set.

use std::fs;
use std::path::Path;

use tracing::info;

use glasscat_model::{CatalogRecord, ExportError};

/// Writes the records as a pretty-printed UTF-8 JSON array.
///
/// Output is deterministic for identical input: record order is preserved
/// and struct field order is fixed, so re-exporting an artifact read back
/// in is byte-identical. The file is written to a sibling temp path and
/// renamed into place; a failed run leaves no partial artifact behind.
pub fn export_records(records: &[CatalogRecord], path: &Path) -> Result<(), ExportError> {
    let mut json = serde_json::to_string_pretty(records)
        .map_err(|source| ExportError::Serialize { source })?;
    json.push('\n');

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json.as_bytes()).map_err(|source| ExportError::Io {
        path: tmp.clone(),
        source,
    })?;
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(ExportError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    info!(records = records.len(), path = %path.display(), "export complete");
    Ok(())
}
