use std::collections::BTreeMap;
use std::path::Path;

use glasscat_model::{CanonicalField, ColumnMapping, ExtractionError};

/// Loads the optional column-mapping override file.
///
/// The file is a JSON object from source column label (any case) to a
/// canonical field name; entries merge over the built-in defaults. `None`
/// returns the defaults untouched.
pub fn load_mapping(path: Option<&Path>) -> Result<ColumnMapping, ExtractionError> {
    let mut mapping = ColumnMapping::default();
    let Some(path) = path else {
        return Ok(mapping);
    };

    let text = std::fs::read_to_string(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: BTreeMap<String, String> =
        serde_json::from_str(&text).map_err(|error| ExtractionError::Mapping {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    for (label, target) in entries {
        let field =
            CanonicalField::from_key(&target).ok_or_else(|| ExtractionError::Mapping {
                path: path.to_path_buf(),
                message: format!("unknown canonical field {target:?} for label {label:?}"),
            })?;
        mapping.insert(&label, field);
    }
    Ok(mapping)
}
