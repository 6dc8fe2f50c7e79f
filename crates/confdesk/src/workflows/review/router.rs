use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ReviewRecord, SubmissionId};
use super::report::views::{ProgramBoardRow, ProgramInsightsSummary, ScoringView};
use super::scoring::compute_scoring;
use super::service::{ReviewScoringService, ReviewServiceError};
use super::source::{ReviewSource, SourceError};

/// Router builder exposing the scoring and insights endpoints.
pub fn review_router<S>(service: Arc<ReviewScoringService<S>>) -> Router
where
    S: ReviewSource + 'static,
{
    Router::new()
        .route("/api/v1/reviews/scoring", post(scoring_handler))
        .route(
            "/api/v1/submissions/:submission_id/scoring",
            get(submission_scoring_handler::<S>),
        )
        .route(
            "/api/v1/program/insights",
            get(program_insights_handler::<S>),
        )
        .with_state(service)
}

/// Stateless compute request: the caller supplies the review rows and the
/// panel denominator directly.
#[derive(Debug, Deserialize)]
pub struct ScoringRequest {
    pub reviews: Vec<ReviewRecord>,
    pub total_reviewers: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProgramInsightsResponse {
    pub(crate) submissions: Vec<ProgramBoardRow>,
    pub(crate) insights: ProgramInsightsSummary,
}

pub(crate) async fn scoring_handler(
    axum::Json(request): axum::Json<ScoringRequest>,
) -> axum::Json<ScoringView> {
    let scoring = compute_scoring(&request.reviews, request.total_reviewers);
    axum::Json(scoring.to_view())
}

pub(crate) async fn submission_scoring_handler<S>(
    State(service): State<Arc<ReviewScoringService<S>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    S: ReviewSource + 'static,
{
    let id = SubmissionId(submission_id);
    match service.score_submission(&id) {
        Ok(scoring) => {
            let row = ProgramBoardRow {
                submission_id: id,
                scoring: scoring.to_view(),
            };
            (StatusCode::OK, axum::Json(row)).into_response()
        }
        Err(ReviewServiceError::Source(SourceError::NotFound)) => {
            let payload = json!({
                "error": "submission not found",
                "submission_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn program_insights_handler<S>(
    State(service): State<Arc<ReviewScoringService<S>>>,
) -> Response
where
    S: ReviewSource + 'static,
{
    match service.program_board() {
        Ok(board) => {
            let response = ProgramInsightsResponse {
                insights: board.insights.summary(),
                submissions: board.submissions,
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
