use super::domain::ScoredRecord;
use std::cmp::Ordering;

/// Highest score first. `sort_by` is stable, so ties keep their input order.
pub(crate) fn rank_descending(mut scored: Vec<ScoredRecord>) -> Vec<ScoredRecord> {
    scored.sort_by(|a, b| descending_score(a.preference_score, b.preference_score));
    scored
}

/// Total preorder over scores: NaN ranks last, `0.0` and `-0.0` tie.
fn descending_score(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
