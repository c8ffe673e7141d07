pub mod error;
pub mod mapping;
pub mod money;
pub mod record;
pub mod report;
pub mod row;

pub use error::{ExportError, ExtractionError};
pub use mapping::{CanonicalField, ColumnMapping};
pub use money::{format_price, is_price_like, parse_price, round2};
pub use record::{CatalogRecord, Position, RecordCandidate, Side};
pub use report::{DiscardReason, ValidationReport};
pub use row::RawRow;
