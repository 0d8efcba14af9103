use super::criteria::Criterion;
use super::domain::{NormalizedRecord, ScoredRecord};
use super::weights::WeightVector;

/// Raw weighted sum; the range follows whatever weights are in force.
pub(crate) fn preference_score(normalized: &NormalizedRecord, weights: &WeightVector) -> f64 {
    Criterion::ordered()
        .into_iter()
        .map(|criterion| normalized.value(criterion) * weights.weight(criterion))
        .sum()
}

pub(crate) fn score_records(
    normalized: Vec<NormalizedRecord>,
    weights: &WeightVector,
) -> Vec<ScoredRecord> {
    normalized
        .into_iter()
        .map(|row| {
            let preference_score = preference_score(&row, weights);
            ScoredRecord {
                record: row.record,
                normalized: row.values,
                preference_score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::domain::CandidateRecord;
    use crate::ranking::weights::RawWeights;
    use std::collections::BTreeMap;

    fn normalized(values: [f64; 5]) -> NormalizedRecord {
        NormalizedRecord {
            record: CandidateRecord {
                brand: String::new(),
                model: String::new(),
                year: String::new(),
                engine_size: 0.0,
                fuel_type: String::new(),
                transmission: String::new(),
                mileage: 0.0,
                doors: 0,
                owner_count: 0,
                price: 0.0,
            },
            values: Criterion::ordered().into_iter().zip(values).collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn default_weights_are_not_rescaled() {
        let row = normalized([1.0; 5]);
        assert_eq!(preference_score(&row, &WeightVector::defaults()), 10.0);
    }

    #[test]
    fn missing_weights_contribute_nothing() {
        let row = normalized([0.5, 0.5, 1.0, 0.5, 0.25]);
        let raw: RawWeights = [(Criterion::Doors, 1.0), (Criterion::Price, 1.0)].into_iter().collect();
        let weights = WeightVector::resolve(Some(&raw));
        assert_eq!(preference_score(&row, &weights), 0.625);
    }
}
