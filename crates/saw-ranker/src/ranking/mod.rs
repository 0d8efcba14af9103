//! Simple Additive Weighting over car listings.
//!
//! A run flows one way: candidate records are normalized against the global
//! per-criterion span, weighted into a single preference score, and ranked.
//! Nothing is kept between runs; callers resupply records and weights every
//! time they need the ranking.

mod aggregate;
mod criteria;
mod domain;
mod normalize;
pub mod page;
mod rank;
mod router;
pub mod views;
mod weights;

pub use criteria::{Criterion, CriterionSpec, Polarity, UnknownCriterion};
pub use domain::{CandidateRecord, NormalizedRecord, ScoredRecord};
pub use normalize::{CriterionBounds, CriterionRanges, MAX_SEED, MIN_SEED};
pub use page::PageWindow;
pub use router::{ranking_router, RankingRequest, RankingSettings};
pub use views::{RankedEntryView, RankingSummary, WeightView};
pub use weights::{
    default_weights, parse_weight_assignment, RawWeights, WeightParseError, WeightSource,
    WeightVector,
};

use tracing::{debug, info};

/// Stateless evaluator holding the criteria and the weights for a run.
#[derive(Debug, Clone)]
pub struct SawEngine {
    specs: [CriterionSpec; 5],
    configured: RawWeights,
    weights: WeightVector,
}

impl SawEngine {
    /// Resolves caller-supplied weights, or the defaults when none are given.
    pub fn new(raw_weights: Option<&RawWeights>) -> Self {
        let configured = match raw_weights {
            Some(raw) if !raw.is_empty() => raw.clone(),
            _ => default_weights(),
        };

        Self {
            specs: CriterionSpec::standard(),
            configured,
            weights: WeightVector::resolve(raw_weights),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(None)
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// The importance values as entered, before normalization.
    pub fn configured_weights(&self) -> &RawWeights {
        &self.configured
    }

    pub fn specs(&self) -> &[CriterionSpec] {
        &self.specs
    }

    pub fn rank(&self, records: Vec<CandidateRecord>) -> RankingOutcome {
        debug!(
            candidates = records.len(),
            weight_source = ?self.weights.source(),
            "ranking candidates"
        );

        let ranges = CriterionRanges::scan(&records, &self.specs);
        let normalized = normalize::normalize_records(records, &self.specs, &ranges);
        let scored = aggregate::score_records(normalized, &self.weights);
        let ranked = rank::rank_descending(scored);

        if let Some(top) = ranked.first() {
            info!(
                brand = %top.record.brand,
                model = %top.record.model,
                score = top.preference_score,
                "top ranked candidate"
            );
        }

        RankingOutcome {
            configured: self.configured.clone(),
            weights: self.weights.clone(),
            ranges,
            ranked,
        }
    }
}

impl Default for SawEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Result of one ranking run: the full ordered sequence plus the inputs that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingOutcome {
    pub configured: RawWeights,
    pub weights: WeightVector,
    pub ranges: CriterionRanges,
    pub ranked: Vec<ScoredRecord>,
}

impl RankingOutcome {
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }
}

/// One-shot helper: resolve weights, then rank.
pub fn rank_candidates(
    records: Vec<CandidateRecord>,
    raw_weights: Option<&RawWeights>,
) -> Vec<ScoredRecord> {
    SawEngine::new(raw_weights).rank(records).ranked
}
