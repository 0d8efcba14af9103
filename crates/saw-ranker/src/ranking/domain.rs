use super::criteria::Criterion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One car listing as loaded from the source rows.
///
/// The identifying fields are carried through untouched and never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub engine_size: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub mileage: f64,
    pub doors: i64,
    pub owner_count: i64,
    pub price: f64,
}

impl CandidateRecord {
    /// Raw value of a criterion as a float.
    pub fn value(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::EngineSize => self.engine_size,
            Criterion::Mileage => self.mileage,
            Criterion::Doors => self.doors as f64,
            Criterion::OwnerCount => self.owner_count as f64,
            Criterion::Price => self.price,
        }
    }
}

/// A candidate paired with its per-criterion normalized values.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub record: CandidateRecord,
    pub values: BTreeMap<Criterion, f64>,
}

impl NormalizedRecord {
    pub fn value(&self, criterion: Criterion) -> f64 {
        self.values.get(&criterion).copied().unwrap_or(0.0)
    }
}

/// A candidate with its final preference score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    pub record: CandidateRecord,
    pub normalized: BTreeMap<Criterion, f64>,
    pub preference_score: f64,
}
