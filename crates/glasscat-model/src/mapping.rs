use std::collections::BTreeMap;

/// Canonical output fields a source column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CanonicalField {
    Brand,
    Model,
    Piece,
    Code,
    Price,
    Dimensions,
    Color,
    Degrade,
    Position,
    Side,
}

impl CanonicalField {
    /// Resolves a canonical field name as used in mapping files.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "brand" | "marca" => Some(Self::Brand),
            "model" | "modelo" => Some(Self::Model),
            "piece" | "pieza" => Some(Self::Piece),
            "code" | "codigo" => Some(Self::Code),
            "price" | "precio" => Some(Self::Price),
            "dimensions" | "dimensiones" => Some(Self::Dimensions),
            "color" => Some(Self::Color),
            "degrade" => Some(Self::Degrade),
            "position" | "posicion" => Some(Self::Position),
            "side" | "lado" => Some(Self::Side),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Model => "model",
            Self::Piece => "piece",
            Self::Code => "code",
            Self::Price => "price",
            Self::Dimensions => "dimensions",
            Self::Color => "color",
            Self::Degrade => "degrade",
            Self::Position => "position",
            Self::Side => "side",
        }
    }
}

/// Case-insensitive source-label to canonical-field mapping.
///
/// Built-in defaults cover the Spanish and English header labels seen in
/// the catalogs; an override file merges on top of them. Labels beginning
/// with `UNNAMED` (synthetic index columns from table extractors) never map
/// to a field.
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    labels: BTreeMap<String, CanonicalField>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        let defaults = [
            ("MARCA", CanonicalField::Brand),
            ("BRAND", CanonicalField::Brand),
            ("MODELO", CanonicalField::Model),
            ("MODELO/ANIO", CanonicalField::Model),
            ("MODELO/A\u{d1}O", CanonicalField::Model),
            ("MODEL", CanonicalField::Model),
            ("PIEZA", CanonicalField::Piece),
            ("DESCRIPCION", CanonicalField::Piece),
            ("DESCRIPCI\u{d3}N", CanonicalField::Piece),
            ("CRISTAL", CanonicalField::Piece),
            ("PIECE", CanonicalField::Piece),
            ("COD", CanonicalField::Code),
            ("CODIGO", CanonicalField::Code),
            ("C\u{d3}DIGO", CanonicalField::Code),
            ("CODE", CanonicalField::Code),
            ("PRECIO", CanonicalField::Price),
            ("PVP", CanonicalField::Price),
            ("PRICE", CanonicalField::Price),
            ("DIMENSION", CanonicalField::Dimensions),
            ("DIMENSIONES", CanonicalField::Dimensions),
            ("DIMENSIONS", CanonicalField::Dimensions),
            ("COLOR", CanonicalField::Color),
            ("DEGRADE", CanonicalField::Degrade),
            ("DEGRAD\u{c9}", CanonicalField::Degrade),
            ("POSICION", CanonicalField::Position),
            ("POSICI\u{d3}N", CanonicalField::Position),
            ("POSITION", CanonicalField::Position),
            ("LADO", CanonicalField::Side),
            ("SIDE", CanonicalField::Side),
        ];
        Self {
            labels: defaults
                .into_iter()
                .map(|(label, field)| (label.to_string(), field))
                .collect(),
        }
    }
}

impl ColumnMapping {
    /// Adds or replaces a label, normalizing it to uppercase.
    pub fn insert(&mut self, label: &str, field: CanonicalField) {
        self.labels.insert(label.trim().to_uppercase(), field);
    }

    /// Resolves a source column label to its canonical field, if any.
    pub fn field_for(&self, label: &str) -> Option<CanonicalField> {
        let normalized = label.trim().to_uppercase();
        if normalized.starts_with("UNNAMED") {
            return None;
        }
        self.labels.get(&normalized).copied()
    }
}
