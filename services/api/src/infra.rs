use metrics_exporter_prometheus::PrometheusHandle;
use saw_ranker::ranking::{parse_weight_assignment, Criterion, RawWeights};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_weight(raw: &str) -> Result<(Criterion, f64), String> {
    parse_weight_assignment(raw).map_err(|err| err.to_string())
}

/// No `--weight` flags means no user configuration, so the engine falls back
/// to its defaults. A repeated criterion keeps the last value.
pub(crate) fn collect_weights(pairs: Vec<(Criterion, f64)>) -> Option<RawWeights> {
    if pairs.is_empty() {
        None
    } else {
        Some(pairs.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_weight_reports_readable_errors() {
        assert_eq!(parse_weight("Mileage=2.5"), Ok((Criterion::Mileage, 2.5)));
        let err = parse_weight("Mileage").expect_err("separator required");
        assert!(err.contains("NAME=VALUE"));
    }

    #[test]
    fn collect_weights_keeps_last_duplicate() {
        assert_eq!(collect_weights(Vec::new()), None);
        let weights = collect_weights(vec![(Criterion::Price, 1.0), (Criterion::Price, 4.0)])
            .expect("weights present");
        assert_eq!(weights.get(&Criterion::Price), Some(&4.0));
        assert_eq!(weights.len(), 1);
    }
}
