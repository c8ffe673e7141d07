use serde::{Deserialize, Serialize};

/// Glass position relative to the vehicle, inferred from description text
/// when the source carries no explicit column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Delantero,
    Trasero,
    #[default]
    Unknown,
}

impl Position {
    /// Reads an explicitly supplied source value; anything unrecognized is
    /// `Unknown` so inference can still run.
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "delantero" | "delantera" => Self::Delantero,
            "trasero" | "trasera" => Self::Trasero,
            _ => Self::Unknown,
        }
    }

    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }
}

/// Vehicle side, same conventions as [`Position`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Izquierda,
    Derecha,
    #[default]
    Unknown,
}

impl Side {
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "izquierda" | "izq" | "izq." => Self::Izquierda,
            "derecha" | "der" | "der." => Self::Derecha,
            _ => Self::Unknown,
        }
    }

    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }
}

/// Normalizer output, not yet validated.
///
/// Every sourceable field is optional so the validator can tell missing
/// from present; an unparseable price is `None`, never zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordCandidate {
    pub source_page: String,
    pub source_row: usize,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub piece: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub dimensions: Option<String>,
    pub color: Option<String>,
    pub degrade: Option<String>,
    pub position: Position,
    pub side: Side,
}

/// A validated catalog record, immutable once accepted.
///
/// `price` is held as a two-decimal amount and crosses the serialization
/// boundary in the fixed `"$1,234.56"` textual form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub brand: String,
    pub model: String,
    pub piece: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(with = "price_serde")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degrade: Option<String>,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub side: Side,
}

impl CatalogRecord {
    /// Equality key for duplicate suppression.
    pub fn dedup_key(&self) -> (String, String, String, String) {
        (
            self.brand.clone(),
            self.model.clone(),
            self.piece.clone(),
            self.code.clone().unwrap_or_default(),
        )
    }
}

mod price_serde {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::money::{format_price, parse_price, round2};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_price(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_price(&raw)
            .map(round2)
            .ok_or_else(|| D::Error::custom(format!("invalid price: {raw}")))
    }
}
