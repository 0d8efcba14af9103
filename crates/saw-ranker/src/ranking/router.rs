use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::page::PageWindow;
use super::views::RankingSummary;
use super::weights::RawWeights;
use super::SawEngine;
use crate::error::AppError;
use crate::import::CandidateImporter;

/// Presentation defaults for the ranking endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingSettings {
    pub page_size: usize,
    pub upload_limit_bytes: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            upload_limit_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Request body: the CSV text (header row included) and optional weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRequest {
    pub csv: String,
    #[serde(default)]
    pub weights: Option<RawWeights>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub per_page: Option<usize>,
}

/// Router exposing the stateless ranking endpoint.
pub fn ranking_router(settings: RankingSettings) -> Router {
    let body_limit = settings.upload_limit_bytes;
    Router::new()
        .route("/api/v1/rankings", post(rank_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(Arc::new(settings))
}

pub(crate) async fn rank_handler(
    State(settings): State<Arc<RankingSettings>>,
    Json(request): Json<RankingRequest>,
) -> Result<Json<RankingSummary>, AppError> {
    let RankingRequest {
        csv,
        weights,
        page,
        per_page,
    } = request;

    let records = CandidateImporter::from_reader(Cursor::new(csv.into_bytes()))?;
    let outcome = SawEngine::new(weights.as_ref()).rank(records);

    let window = PageWindow::from_requested(
        page.unwrap_or(1),
        per_page.unwrap_or(settings.page_size),
        outcome.len(),
    );

    Ok(Json(outcome.summary(window)))
}
