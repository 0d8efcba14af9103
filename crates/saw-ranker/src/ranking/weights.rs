use super::criteria::{Criterion, UnknownCriterion};
use crate::import::coerce::coerce_float;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Importance values as entered by a caller, before normalization.
pub type RawWeights = BTreeMap<Criterion, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightSource {
    Default,
    User,
}

/// Weights applied by the aggregator.
///
/// User weights are divided by their sum. The fallback weights are the raw
/// defaults (2, 2, 1, 2, 3) and are deliberately left unnormalized, so scores
/// computed with them range up to the default total rather than 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightVector {
    source: WeightSource,
    weights: BTreeMap<Criterion, f64>,
}

impl WeightVector {
    pub fn defaults() -> Self {
        Self {
            source: WeightSource::Default,
            weights: default_weights(),
        }
    }

    /// Builds the vector from optional caller input, falling back to the
    /// defaults when nothing is supplied or the supplied total is not positive.
    pub fn resolve(raw: Option<&RawWeights>) -> Self {
        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            return Self::defaults();
        };

        let total: f64 = raw.values().sum();
        if total > 0.0 {
            Self {
                source: WeightSource::User,
                weights: raw
                    .iter()
                    .map(|(criterion, weight)| (*criterion, weight / total))
                    .collect(),
            }
        } else {
            Self::defaults()
        }
    }

    pub fn source(&self) -> WeightSource {
        self.source
    }

    pub fn get(&self, criterion: Criterion) -> Option<f64> {
        self.weights.get(&criterion).copied()
    }

    /// Weight used for scoring; criteria without an entry contribute nothing.
    pub fn weight(&self, criterion: Criterion) -> f64 {
        self.get(criterion).unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::defaults()
    }
}

pub fn default_weights() -> RawWeights {
    Criterion::ordered()
        .into_iter()
        .map(|criterion| (criterion, criterion.default_weight()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeightParseError {
    #[error("weight '{0}' must be written as NAME=VALUE")]
    MissingSeparator(String),
    #[error(transparent)]
    UnknownCriterion(#[from] UnknownCriterion),
}

/// Parses a `NAME=VALUE` assignment. The value is coerced the same way CSV
/// numbers are, so a non-numeric value becomes 0.
pub fn parse_weight_assignment(raw: &str) -> Result<(Criterion, f64), WeightParseError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| WeightParseError::MissingSeparator(raw.to_string()))?;
    let criterion = name.parse::<Criterion>()?;
    Ok((criterion, coerce_float(value)))
}
