use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for CFP submissions (talks and workshops).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Identifier wrapper for program-committee reviewers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewerId(pub String);

/// A single reviewer's recorded activity on a submission.
///
/// `score_overall` is `None` when the reviewer left remarks without a numeric
/// score; such reviews still count toward coverage but not toward the average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub reviewer_id: ReviewerId,
    pub submission_id: SubmissionId,
    pub score_overall: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Categorical shortlist recommendation for the program committee.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ShortlistStatus {
    LikelyShortlisted,
    Borderline,
    NeedsMoreReviews,
    LikelyReject,
}

impl ShortlistStatus {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::LikelyShortlisted,
            Self::Borderline,
            Self::NeedsMoreReviews,
            Self::LikelyReject,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LikelyShortlisted => "Likely Shortlisted",
            Self::Borderline => "Borderline",
            Self::NeedsMoreReviews => "Needs More Reviews",
            Self::LikelyReject => "Likely Reject",
        }
    }

    /// Badge color used by dashboard views.
    pub const fn color(self) -> &'static str {
        match self {
            Self::LikelyShortlisted => "green",
            Self::Borderline => "amber",
            Self::NeedsMoreReviews => "gray",
            Self::LikelyReject => "red",
        }
    }
}

/// Derived scoring facts for one submission. Never persisted; recomputed on
/// every read from a fresh snapshot of the review rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionScoring {
    pub review_count: usize,
    pub avg_score: Option<f64>,
    pub total_reviewers: u32,
    pub coverage_ratio: f64,
    pub coverage_percent: f64,
    pub last_reviewed_at: Option<DateTime<Utc>>,
    pub status: ShortlistStatus,
}
