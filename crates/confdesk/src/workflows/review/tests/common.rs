use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::review::domain::{ReviewRecord, ReviewerId, SubmissionId};
use crate::workflows::review::ledger::ReviewLedger;
use crate::workflows::review::scoring::ScoringFacts;
use crate::workflows::review::service::ReviewScoringService;
use crate::workflows::review::source::{ReviewSnapshot, ReviewSource, SourceError};

pub(super) fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0)
        .single()
        .expect("valid fixture date")
}

pub(super) fn review(submission: &str, reviewer: &str, score: Option<f64>, on: u32) -> ReviewRecord {
    ReviewRecord {
        reviewer_id: ReviewerId(reviewer.to_string()),
        submission_id: SubmissionId(submission.to_string()),
        score_overall: score,
        created_at: day(on),
    }
}

pub(super) fn facts(
    avg_score: Option<f64>,
    review_count: usize,
    coverage_ratio: f64,
) -> ScoringFacts {
    ScoringFacts {
        avg_score,
        review_count,
        coverage_ratio,
    }
}

/// Ledger with three submissions spanning the status spectrum:
/// `talk-strong` shortlists, `talk-weak` rejects, `ws-thin` lacks reviews.
pub(super) fn seeded_ledger() -> ReviewLedger {
    let mut ledger = ReviewLedger::new();

    for record in [
        review("talk-strong", "ada", Some(3.0), 2),
        review("talk-strong", "grace", Some(4.0), 3),
        review("talk-strong", "linus", Some(3.0), 4),
        review("talk-weak", "ada", Some(1.5), 2),
        review("talk-weak", "grace", Some(1.0), 5),
        review("talk-weak", "barbara", Some(2.0), 6),
        review("ws-thin", "linus", Some(4.0), 7),
    ] {
        ledger.record(record);
    }

    let strong = SubmissionId("talk-strong".to_string());
    let weak = SubmissionId("talk-weak".to_string());
    let thin = SubmissionId("ws-thin".to_string());
    ledger.observe_panel_size(&strong, 5);
    ledger.observe_panel_size(&weak, 4);
    ledger.observe_panel_size(&thin, 6);

    ledger
}

pub(super) fn build_service() -> Arc<ReviewScoringService<ReviewLedger>> {
    Arc::new(ReviewScoringService::new(Arc::new(seeded_ledger())))
}

pub(super) struct UnavailableSource;

impl ReviewSource for UnavailableSource {
    fn snapshot(&self, _: &SubmissionId) -> Result<Option<ReviewSnapshot>, SourceError> {
        Err(SourceError::Unavailable("review store offline".to_string()))
    }

    fn submissions(&self) -> Result<Vec<SubmissionId>, SourceError> {
        Err(SourceError::Unavailable("review store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
