use crate::workflows::review::domain::{ReviewRecord, SubmissionId};
use crate::workflows::review::source::{ReviewSnapshot, ReviewSource, SourceError};
use std::collections::BTreeMap;

/// In-library value store of review snapshots keyed by submission, as
/// produced by the CSV importer or assembled by hand in tests and demos.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReviewLedger {
    entries: BTreeMap<SubmissionId, ReviewSnapshot>,
}

impl ReviewLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a review to its submission's snapshot, creating the snapshot
    /// on first sight.
    pub fn record(&mut self, review: ReviewRecord) {
        self.entries
            .entry(review.submission_id.clone())
            .or_default()
            .reviews
            .push(review);
    }

    /// Records a panel-size observation; the largest value seen per
    /// submission wins.
    pub fn observe_panel_size(&mut self, submission: &SubmissionId, panel_size: u32) {
        let snapshot = self.entries.entry(submission.clone()).or_default();
        if panel_size > snapshot.panel_size {
            snapshot.panel_size = panel_size;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReviewSource for ReviewLedger {
    fn snapshot(&self, submission: &SubmissionId) -> Result<Option<ReviewSnapshot>, SourceError> {
        Ok(self.entries.get(submission).cloned())
    }

    fn submissions(&self) -> Result<Vec<SubmissionId>, SourceError> {
        Ok(self.entries.keys().cloned().collect())
    }
}
