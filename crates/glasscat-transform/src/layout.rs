use glasscat_model::{CanonicalField, ColumnMapping, RawRow};

/// Assignment of column positions to canonical fields for product rows.
///
/// Sources with no header row (page-extracted tables) use the positional
/// default `[piece, code, price, dimensions]`; any row resolving at least
/// two canonical fields through the column mapping is adopted as a header
/// and replaces the active layout, which supports multi-page documents
/// that repeat their headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    fields: Vec<Option<CanonicalField>>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            fields: vec![
                Some(CanonicalField::Piece),
                Some(CanonicalField::Code),
                Some(CanonicalField::Price),
                Some(CanonicalField::Dimensions),
            ],
        }
    }
}

impl ColumnLayout {
    pub fn field_at(&self, index: usize) -> Option<CanonicalField> {
        self.fields.get(index).copied().flatten()
    }

    /// Reads a row as a header if enough of its cells are known labels.
    /// Header detection runs before classification; a header row is counted
    /// as neither record nor noise.
    pub fn detect_header(row: &RawRow, mapping: &ColumnMapping) -> Option<Self> {
        let fields: Vec<Option<CanonicalField>> = row
            .cells
            .iter()
            .map(|cell| mapping.field_for(cell))
            .collect();
        let resolved = fields.iter().flatten().count();
        if resolved >= 2 { Some(Self { fields }) } else { None }
    }
}
