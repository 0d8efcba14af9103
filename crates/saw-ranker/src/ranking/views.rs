use super::criteria::{Criterion, Polarity};
use super::domain::CandidateRecord;
use super::page::PageWindow;
use super::weights::WeightSource;
use super::RankingOutcome;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Podium {
    Gold,
    Silver,
    Bronze,
}

impl Podium {
    pub const fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightView {
    pub criterion: Criterion,
    pub criterion_label: &'static str,
    pub polarity: Polarity,
    pub polarity_label: &'static str,
    /// Value as entered (or the default), shown on a 0-10 scale.
    pub configured: f64,
    pub configured_label: String,
    /// Value actually multiplied into the score.
    pub applied: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedEntryView {
    pub rank: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podium: Option<Podium>,
    pub record: CandidateRecord,
    pub preference_score: f64,
    pub score_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingSummary {
    pub weight_source: WeightSource,
    pub weights: Vec<WeightView>,
    pub total_candidates: usize,
    pub page: PageWindow,
    pub entries: Vec<RankedEntryView>,
}

impl RankingOutcome {
    pub fn weight_views(&self) -> Vec<WeightView> {
        Criterion::ordered()
            .into_iter()
            .map(|criterion| {
                let configured = self.configured.get(&criterion).copied().unwrap_or(0.0);
                WeightView {
                    criterion,
                    criterion_label: criterion.label(),
                    polarity: criterion.polarity(),
                    polarity_label: criterion.polarity().label(),
                    configured,
                    configured_label: format!("{:.0}%", configured * 10.0),
                    applied: self.weights.weight(criterion),
                }
            })
            .collect()
    }

    /// Renders one page of the ranking. Ranks are global, not per page.
    pub fn summary(&self, window: PageWindow) -> RankingSummary {
        let entries = self
            .ranked
            .iter()
            .enumerate()
            .skip(window.start)
            .take(window.per_page)
            .map(|(index, scored)| {
                let rank = index + 1;
                RankedEntryView {
                    rank,
                    podium: Podium::for_rank(rank),
                    record: scored.record.clone(),
                    preference_score: scored.preference_score,
                    score_label: format!("{:.4}", scored.preference_score),
                }
            })
            .collect();

        RankingSummary {
            weight_source: self.weights.source(),
            weights: self.weight_views(),
            total_candidates: self.ranked.len(),
            page: window,
            entries,
        }
    }
}
