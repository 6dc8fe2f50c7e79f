use crate::workflows::review::domain::{ReviewRecord, SubmissionId};
use serde::{Deserialize, Serialize};

/// Point-in-time read of everything the scoring core needs for one
/// submission: the review rows and the panel size at the moment of the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewSnapshot {
    pub reviews: Vec<ReviewRecord>,
    pub panel_size: u32,
}

/// The narrow seam to the persistence layer. Scoring never caches what it
/// reads through this trait, so freshness is entirely the implementor's
/// concern.
pub trait ReviewSource: Send + Sync {
    fn snapshot(&self, submission: &SubmissionId) -> Result<Option<ReviewSnapshot>, SourceError>;
    fn submissions(&self) -> Result<Vec<SubmissionId>, SourceError>;
}

/// Error enumeration for review-source failures.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("submission not found")]
    NotFound,
    #[error("review source unavailable: {0}")]
    Unavailable(String),
}
