//! Record validation with full discard accounting.
//!
//! Checks run in a fixed order (brand, model, piece, price, duplicate);
//! the first failing check names the discard reason, so a record failing
//! several checks is counted exactly once. All counters accumulate into
//! one [`ValidationReport`] per document pass.

use std::collections::BTreeSet;

use tracing::debug;

use glasscat_model::{
    CatalogRecord, DiscardReason, RecordCandidate, ValidationReport,
};

#[derive(Debug, Default)]
pub struct Validator {
    seen: BTreeSet<(String, String, String, String)>,
    report: ValidationReport,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note_noise(&mut self) {
        self.report.noise += 1;
    }

    pub fn note_unclassifiable(&mut self) {
        self.report.unclassifiable += 1;
    }

    pub fn note_brand_header(&mut self) {
        self.report.brand_headers += 1;
    }

    pub fn note_model_header(&mut self) {
        self.report.model_headers += 1;
    }

    /// Checks one candidate, returning the accepted record or counting the
    /// discard under its first failing reason.
    pub fn check(&mut self, candidate: RecordCandidate) -> Option<CatalogRecord> {
        self.report.read();
        let location = format!("{}, row {}", candidate.source_page, candidate.source_row);

        let Some(brand) = candidate.brand else {
            return self.reject(DiscardReason::MissingBrand, &location);
        };
        let Some(model) = candidate.model else {
            return self.reject(DiscardReason::MissingModel, &location);
        };
        let piece = match candidate.piece {
            Some(piece) if !piece.is_empty() => piece,
            _ => return self.reject(DiscardReason::MissingPiece, &location),
        };
        let price = match candidate.price {
            Some(price) if price > 0.0 => price,
            _ => return self.reject(DiscardReason::MissingPrice, &location),
        };

        let record = CatalogRecord {
            brand,
            model,
            piece,
            code: candidate.code,
            price,
            dimensions: candidate.dimensions,
            color: candidate.color,
            degrade: candidate.degrade,
            position: candidate.position,
            side: candidate.side,
        };
        if !self.seen.insert(record.dedup_key()) {
            return self.reject(DiscardReason::Duplicate, &location);
        }

        self.report.accept();
        Some(record)
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Finalizes the report. The balance invariant holds by construction;
    /// it is asserted here so accounting bugs cannot pass silently.
    pub fn finish(self) -> ValidationReport {
        debug_assert!(self.report.is_balanced());
        self.report
    }

    fn reject(&mut self, reason: DiscardReason, location: &str) -> Option<CatalogRecord> {
        debug!(%reason, %location, "record discarded");
        self.report.discard(reason);
        None
    }
}
