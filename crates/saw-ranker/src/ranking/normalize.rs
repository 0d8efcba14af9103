use super::criteria::{Criterion, CriterionSpec, Polarity};
use super::domain::{CandidateRecord, NormalizedRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Starting point for the running minimum.
pub const MIN_SEED: f64 = f64::MAX;
/// Starting point for the running maximum: the smallest positive float, so an
/// all-zero column still reports a positive (but negligible) maximum.
pub const MAX_SEED: f64 = f64::MIN_POSITIVE;

/// Observed span of one criterion across the whole candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriterionBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for CriterionBounds {
    fn default() -> Self {
        Self {
            min: MIN_SEED,
            max: MAX_SEED,
        }
    }
}

impl CriterionBounds {
    fn observe(&mut self, value: f64) {
        self.max = self.max.max(value);
        self.min = self.min.min(value);
    }

    /// Benefit: `raw / max`. Cost: `min / raw`. Both are ratio transforms, and
    /// a cost value of exactly 0 maps to 0 rather than to the best score.
    pub fn normalize(&self, polarity: Polarity, raw: f64) -> f64 {
        match polarity {
            Polarity::Benefit if self.max > 0.0 => raw / self.max,
            Polarity::Cost if raw > 0.0 => self.min / raw,
            Polarity::Benefit | Polarity::Cost => 0.0,
        }
    }
}

/// Global min/max per criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionRanges {
    bounds: BTreeMap<Criterion, CriterionBounds>,
}

impl CriterionRanges {
    /// Scans every candidate once.
    pub fn scan(records: &[CandidateRecord], specs: &[CriterionSpec]) -> Self {
        let mut bounds: BTreeMap<Criterion, CriterionBounds> = specs
            .iter()
            .map(|spec| (spec.criterion, CriterionBounds::default()))
            .collect();

        for record in records {
            for (criterion, span) in bounds.iter_mut() {
                span.observe(record.value(*criterion));
            }
        }

        Self { bounds }
    }

    pub fn get(&self, criterion: Criterion) -> CriterionBounds {
        self.bounds.get(&criterion).copied().unwrap_or_default()
    }
}

pub(crate) fn normalize_records(
    records: Vec<CandidateRecord>,
    specs: &[CriterionSpec],
    ranges: &CriterionRanges,
) -> Vec<NormalizedRecord> {
    records
        .into_iter()
        .map(|record| {
            let values = specs
                .iter()
                .map(|spec| {
                    let raw = record.value(spec.criterion);
                    let normalized = ranges.get(spec.criterion).normalize(spec.polarity, raw);
                    (spec.criterion, normalized)
                })
                .collect();
            NormalizedRecord { record, values }
        })
        .collect()
}
