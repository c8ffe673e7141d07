//! Materialization of a stamped product row into a record candidate.

use glasscat_model::{CanonicalField, Position, RawRow, RecordCandidate, Side, parse_price, round2};

use crate::infer::{infer_position, infer_side};
use crate::layout::ColumnLayout;
use crate::text::{clean_text, clean_upper};
use crate::year::{YearExpansion, expand_open_range};

/// A token the normalizer could not interpret, destined for the
/// extraction log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeWarning {
    pub location: String,
    pub token: String,
}

/// Builds a candidate record from a product row, its active column layout
/// and the stamped `(brand, model)` context.
///
/// Field cells are trimmed and whitespace-collapsed; brand and model are
/// upper-cased; the price cell parses to a rounded amount or stays absent.
/// Explicit brand/model/position/side cells take precedence over stamped
/// context and keyword inference.
pub fn materialize(
    row: &RawRow,
    layout: &ColumnLayout,
    brand: Option<String>,
    model: Option<String>,
) -> (RecordCandidate, Vec<NormalizeWarning>) {
    let mut candidate = RecordCandidate {
        source_page: row.page.clone(),
        source_row: row.index,
        brand: brand.as_deref().and_then(clean_upper),
        ..RecordCandidate::default()
    };
    let mut warnings = Vec::new();

    if let Some(model) = model.as_deref().and_then(clean_upper) {
        candidate.model = Some(expand_model(model, row, &mut warnings));
    }

    for (index, cell) in row.cells.iter().enumerate() {
        let Some(field) = layout.field_at(index) else {
            continue;
        };
        match field {
            CanonicalField::Brand => {
                if let Some(value) = clean_upper(cell) {
                    candidate.brand = Some(value);
                }
            }
            CanonicalField::Model => {
                if let Some(value) = clean_upper(cell) {
                    candidate.model = Some(expand_model(value, row, &mut warnings));
                }
            }
            CanonicalField::Piece => candidate.piece = clean_text(cell),
            CanonicalField::Code => candidate.code = clean_text(cell),
            CanonicalField::Price => candidate.price = parse_price(cell).map(round2),
            CanonicalField::Dimensions => candidate.dimensions = clean_text(cell),
            CanonicalField::Color => candidate.color = clean_text(cell),
            CanonicalField::Degrade => candidate.degrade = clean_text(cell),
            CanonicalField::Position => candidate.position = Position::parse(cell),
            CanonicalField::Side => candidate.side = Side::parse(cell),
        }
    }

    if candidate.position.is_unknown()
        && let Some(piece) = &candidate.piece
    {
        candidate.position = infer_position(piece);
    }
    if candidate.side.is_unknown()
        && let Some(piece) = &candidate.piece
    {
        candidate.side = infer_side(piece);
    }

    (candidate, warnings)
}

fn expand_model(model: String, row: &RawRow, warnings: &mut Vec<NormalizeWarning>) -> String {
    match expand_open_range(&model) {
        YearExpansion::Expanded(expanded) => expanded,
        YearExpansion::Unparsed => {
            warnings.push(NormalizeWarning {
                location: row.location(),
                token: model.clone(),
            });
            model
        }
        YearExpansion::None => model,
    }
}
