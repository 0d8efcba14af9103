use crate::infra::{collect_weights, parse_weight};
use clap::Args;
use saw_ranker::config::AppConfig;
use saw_ranker::error::AppError;
use saw_ranker::import::CandidateImporter;
use saw_ranker::ranking::{Criterion, PageWindow, RankingSummary, SawEngine, WeightSource};
use saw_ranker::telemetry;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// CSV export with a header row followed by one listing per line
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Criterion importance as NAME=VALUE (repeatable). Omit to use the defaults.
    #[arg(long = "weight", value_name = "NAME=VALUE", value_parser = parse_weight)]
    pub(crate) weights: Vec<(Criterion, f64)>,
    /// Page of the ranking to display (1-based)
    #[arg(long, default_value_t = 1)]
    pub(crate) page: i64,
    /// Rows per page (defaults to SAW_PAGE_SIZE)
    #[arg(long)]
    pub(crate) per_page: Option<usize>,
    /// Print the page as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        csv,
        weights,
        page,
        per_page,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let records = CandidateImporter::from_path(&csv)?;
    let raw_weights = collect_weights(weights);
    let outcome = SawEngine::new(raw_weights.as_ref()).rank(records);
    let window = PageWindow::from_requested(
        page,
        per_page.unwrap_or(config.ranking.page_size),
        outcome.len(),
    );
    let summary = outcome.summary(window);

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Ranking payload unavailable: {err}"),
        }
    } else {
        println!("{}", render_summary(&summary));
    }

    Ok(())
}

pub(crate) fn render_summary(summary: &RankingSummary) -> String {
    let mut lines = Vec::new();

    let source = match summary.weight_source {
        WeightSource::Default => "default weights",
        WeightSource::User => "custom weights",
    };
    lines.push(format!(
        "Car ranking: {} candidate(s), {}",
        summary.total_candidates, source
    ));

    lines.push(String::new());
    lines.push("Criteria weights used".to_string());
    for weight in &summary.weights {
        lines.push(format!(
            "- {} [{}]: {}",
            weight.criterion_label, weight.polarity_label, weight.configured_label
        ));
    }

    lines.push(String::new());
    if summary.entries.is_empty() {
        lines.push("No candidates on this page".to_string());
        return lines.join("\n");
    }

    lines.push(format!(
        "{:<10} {:<12} {:<12} {:<6} {:>6} {:<10} {:<12} {:>9} {:>5} {:>6} {:>10} {:>9}",
        "Rank",
        "Brand",
        "Model",
        "Year",
        "Engine",
        "Fuel",
        "Transmission",
        "Mileage",
        "Doors",
        "Owners",
        "Price",
        "Score"
    ));
    for entry in &summary.entries {
        let rank = match entry.podium {
            Some(podium) => format!("{} {}", entry.rank, podium.label()),
            None => entry.rank.to_string(),
        };
        let record = &entry.record;
        lines.push(format!(
            "{:<10} {:<12} {:<12} {:<6} {:>6} {:<10} {:<12} {:>9} {:>5} {:>6} {:>10} {:>9}",
            rank,
            record.brand,
            record.model,
            record.year,
            record.engine_size,
            record.fuel_type,
            record.transmission,
            record.mileage,
            record.doors,
            record.owner_count,
            record.price,
            entry.score_label
        ));
    }

    let page = &summary.page;
    let visible = page.visible_pages();
    lines.push(String::new());
    lines.push(format!(
        "Page {} of {} (showing pages {}-{}){}{}",
        page.page,
        page.total_pages,
        visible.start(),
        visible.end(),
        if page.has_previous() { " | previous page available" } else { "" },
        if page.has_next() { " | more results on the next page" } else { "" }
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use saw_ranker::ranking::CandidateRecord;

    fn car(model: &str, price: f64) -> CandidateRecord {
        CandidateRecord {
            brand: "Ford".to_string(),
            model: model.to_string(),
            year: "2020".to_string(),
            engine_size: 1.0,
            fuel_type: "Petrol".to_string(),
            transmission: "Manual".to_string(),
            mileage: 10_000.0,
            doors: 5,
            owner_count: 1,
            price,
        }
    }

    #[test]
    fn table_marks_podium_and_scores() {
        let outcome = SawEngine::with_default_weights().rank(vec![
            car("Focus", 9_000.0),
            car("Fiesta", 6_000.0),
            car("Puma", 12_000.0),
            car("Kuga", 18_000.0),
        ]);
        let rendered = render_summary(&outcome.summary(PageWindow::new(1, 10, outcome.len())));

        assert!(rendered.contains("4 candidate(s), default weights"));
        assert!(rendered.contains("- Price [Cost]: 30%"));
        assert!(rendered.contains("- Doors [Benefit]: 10%"));
        assert!(rendered.contains("1 Gold"));
        assert!(rendered.contains("10.0000"));
        assert!(rendered.contains("Page 1 of 1"));
    }

    #[test]
    fn empty_page_is_reported() {
        let outcome = SawEngine::with_default_weights().rank(Vec::new());
        let rendered = render_summary(&outcome.summary(PageWindow::new(1, 10, 0)));
        assert!(rendered.contains("No candidates on this page"));
    }
}
