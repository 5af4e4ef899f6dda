use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::ApplicantRecord;
use super::engine::{PositionRequirements, ScoreBreakdown, ScoringEngine};
use super::persistence::ResultsDocument;
use super::ranking::rank;
use super::weights::WeightTable;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub applicant: ApplicantRecord,
    #[serde(default)]
    pub weights: Option<WeightTable>,
    #[serde(default)]
    pub requirements: PositionRequirements,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub name: String,
    pub score: f64,
    pub score_breakdown: ScoreBreakdown,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub applicants: Vec<ApplicantRecord>,
    #[serde(default)]
    pub weights: Option<WeightTable>,
    #[serde(default)]
    pub requirements: PositionRequirements,
}

/// Stateless scoring endpoints. `default_weights` apply when a request omits its own table.
pub fn scoring_router(default_weights: WeightTable) -> Router {
    Router::new()
        .route("/api/v1/applicants/score", post(score_handler))
        .route("/api/v1/applicants/rank", post(rank_handler))
        .with_state(Arc::new(default_weights))
}

fn engine_for(
    defaults: &WeightTable,
    weights: Option<WeightTable>,
    requirements: PositionRequirements,
) -> ScoringEngine {
    ScoringEngine::new(weights.unwrap_or(*defaults)).with_requirements(requirements)
}

fn unprocessable(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

pub(crate) async fn score_handler(
    State(defaults): State<Arc<WeightTable>>,
    Json(request): Json<ScoreRequest>,
) -> Response {
    let ScoreRequest {
        applicant,
        weights,
        requirements,
    } = request;

    if let Err(error) = applicant.validate() {
        return unprocessable(error.to_string());
    }

    let breakdown = engine_for(&defaults, weights, requirements).score(&applicant);
    let response = ScoreResponse {
        name: applicant.name,
        score: breakdown.total,
        score_breakdown: breakdown,
    };
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn rank_handler(
    State(defaults): State<Arc<WeightTable>>,
    Json(request): Json<RankRequest>,
) -> Response {
    let RankRequest {
        applicants,
        weights,
        requirements,
    } = request;

    for (index, applicant) in applicants.iter().enumerate() {
        if let Err(error) = applicant.validate() {
            return unprocessable(format!("applicant #{}: {error}", index + 1));
        }
    }

    let engine = engine_for(&defaults, weights, requirements);
    let ranked = rank(&applicants, &engine);
    let document = ResultsDocument::new(&ranked, engine.weights());
    (StatusCode::OK, Json(document)).into_response()
}
