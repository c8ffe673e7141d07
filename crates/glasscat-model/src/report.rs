use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// The specific validation failure attributed to a rejected record.
///
/// A record failing several checks is counted once, under the first failing
/// check in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscardReason {
    MissingBrand,
    MissingModel,
    MissingPiece,
    MissingPrice,
    Duplicate,
}

impl DiscardReason {
    pub const ALL: [Self; 5] = [
        Self::MissingBrand,
        Self::MissingModel,
        Self::MissingPiece,
        Self::MissingPrice,
        Self::Duplicate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::MissingBrand => "missing-brand",
            Self::MissingModel => "missing-model",
            Self::MissingPiece => "missing-piece",
            Self::MissingPrice => "missing-price",
            Self::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate counters for one processing run; the single source of truth
/// for the validation log.
///
/// `rows_read` counts product candidates handed to the validator. Noise,
/// unclassifiable rows and headers are tracked separately so that
/// `valid + discarded_total() == rows_read` holds exactly at completion.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationReport {
    pub rows_read: u64,
    pub valid: u64,
    pub noise: u64,
    pub unclassifiable: u64,
    pub brand_headers: u64,
    pub model_headers: u64,
    discarded: BTreeMap<DiscardReason, u64>,
}

impl ValidationReport {
    pub fn read(&mut self) {
        self.rows_read += 1;
    }

    pub fn accept(&mut self) {
        self.valid += 1;
    }

    pub fn discard(&mut self, reason: DiscardReason) {
        *self.discarded.entry(reason).or_insert(0) += 1;
    }

    pub fn discarded(&self, reason: DiscardReason) -> u64 {
        self.discarded.get(&reason).copied().unwrap_or(0)
    }

    pub fn discarded_total(&self) -> u64 {
        self.discarded.values().sum()
    }

    /// The accounting invariant checked at end of run.
    pub fn is_balanced(&self) -> bool {
        self.valid + self.discarded_total() == self.rows_read
    }

    /// Per-reason breakdown in stable order, zero counts included.
    pub fn breakdown(&self) -> impl Iterator<Item = (DiscardReason, u64)> + '_ {
        DiscardReason::ALL
            .into_iter()
            .map(|reason| (reason, self.discarded(reason)))
    }
}
