use std::sync::Arc;

use serde::Serialize;

use super::domain::{SubmissionId, SubmissionScoring};
use super::report::views::ProgramBoardRow;
use super::report::{summarize, ProgramInsights};
use super::scoring::compute_scoring;
use super::source::{ReviewSource, SourceError};

/// Program board payload: one scored row per submission plus the
/// distribution tallies over the whole set.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramBoard {
    pub submissions: Vec<ProgramBoardRow>,
    pub insights: ProgramInsights,
}

/// Service composing the review source with the scoring core.
///
/// Holds only the source handle, never results: every call re-reads a fresh
/// snapshot and recomputes, so staleness is bounded by the source alone.
pub struct ReviewScoringService<S> {
    source: Arc<S>,
}

impl<S> ReviewScoringService<S>
where
    S: ReviewSource + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Score one submission from its current snapshot.
    pub fn score_submission(
        &self,
        submission: &SubmissionId,
    ) -> Result<SubmissionScoring, ReviewServiceError> {
        let snapshot = self
            .source
            .snapshot(submission)?
            .ok_or(SourceError::NotFound)?;
        Ok(compute_scoring(&snapshot.reviews, snapshot.panel_size))
    }

    /// Score every known submission and tally the program-wide insights.
    pub fn program_board(&self) -> Result<ProgramBoard, ReviewServiceError> {
        let mut rows = Vec::new();
        let mut scorings = Vec::new();

        for submission in self.source.submissions()? {
            let snapshot = self
                .source
                .snapshot(&submission)?
                .ok_or(SourceError::NotFound)?;
            let scoring = compute_scoring(&snapshot.reviews, snapshot.panel_size);
            rows.push(ProgramBoardRow {
                submission_id: submission,
                scoring: scoring.to_view(),
            });
            scorings.push(scoring);
        }

        let insights = summarize(&scorings);
        Ok(ProgramBoard {
            submissions: rows,
            insights,
        })
    }
}

/// Error raised by the review scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ReviewServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
}
