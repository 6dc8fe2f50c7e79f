use chrono::{TimeZone, Utc};
use confdesk::workflows::review::{
    ReviewLedger, ReviewRecord, ReviewSnapshot, ReviewSource, ReviewerId, SourceError,
    SubmissionId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory stand-in for the real review store, backing the HTTP service
/// with a ledger behind a mutex.
pub(crate) struct InMemoryReviewSource {
    ledger: Mutex<ReviewLedger>,
}

impl InMemoryReviewSource {
    pub(crate) fn new(ledger: ReviewLedger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
        }
    }
}

impl ReviewSource for InMemoryReviewSource {
    fn snapshot(&self, submission: &SubmissionId) -> Result<Option<ReviewSnapshot>, SourceError> {
        let guard = self
            .ledger
            .lock()
            .map_err(|_| SourceError::Unavailable("ledger mutex poisoned".to_string()))?;
        guard.snapshot(submission)
    }

    fn submissions(&self) -> Result<Vec<SubmissionId>, SourceError> {
        let guard = self
            .ledger
            .lock()
            .map_err(|_| SourceError::Unavailable("ledger mutex poisoned".to_string()))?;
        guard.submissions()
    }
}

/// Sample ledger used by `demo` when no CSV export is supplied.
pub(crate) fn seeded_demo_ledger() -> ReviewLedger {
    let mut ledger = ReviewLedger::new();

    let reviews = [
        ("talk-101", "ada", Some(3.0), 1),
        ("talk-101", "grace", Some(4.0), 2),
        ("talk-101", "linus", Some(3.0), 3),
        ("talk-205", "barbara", Some(1.5), 2),
        ("talk-205", "ada", Some(1.0), 4),
        ("talk-205", "grace", Some(2.0), 5),
        ("ws-12", "linus", Some(4.5), 6),
        ("ws-30", "barbara", Some(2.5), 3),
        ("ws-30", "linus", None, 4),
        ("ws-30", "ada", Some(2.8), 6),
    ];

    for (submission, reviewer, score, day) in reviews {
        ledger.record(ReviewRecord {
            reviewer_id: ReviewerId(reviewer.to_string()),
            submission_id: SubmissionId(submission.to_string()),
            score_overall: score,
            created_at: Utc
                .with_ymd_and_hms(2026, 4, day, 10, 0, 0)
                .single()
                .unwrap_or_else(Utc::now),
        });
    }

    for (submission, panel) in [("talk-101", 5), ("talk-205", 4), ("ws-12", 6), ("ws-30", 4)] {
        ledger.observe_panel_size(&SubmissionId(submission.to_string()), panel);
    }

    ledger
}
