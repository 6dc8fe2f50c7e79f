use super::policy::{classify, ScoringFacts};
use crate::workflows::review::domain::{ReviewRecord, SubmissionScoring};

/// Reduces the reviews recorded for one submission into aggregate scoring
/// facts and the derived shortlist status.
///
/// `total_reviewers` is the panel size supplied by the caller and may
/// legitimately be zero; the coverage ratio is guarded to `0.0` in that case
/// rather than producing NaN. Range validation of the inputs is deliberately
/// not done here; it belongs to whatever persists a review.
pub fn compute_scoring(reviews: &[ReviewRecord], total_reviewers: u32) -> SubmissionScoring {
    let review_count = reviews.len();

    let scored: Vec<f64> = reviews
        .iter()
        .filter_map(|review| review.score_overall)
        .collect();
    let avg_score = if scored.is_empty() {
        None
    } else {
        Some(scored.iter().sum::<f64>() / scored.len() as f64)
    };

    // Score-less reviews still move the last-activity marker.
    let last_reviewed_at = reviews.iter().map(|review| review.created_at).max();

    let coverage_ratio = if total_reviewers > 0 {
        review_count as f64 / total_reviewers as f64
    } else {
        0.0
    };
    let coverage_percent = coverage_ratio * 100.0;

    let status = classify(ScoringFacts {
        avg_score,
        review_count,
        coverage_ratio,
    });

    SubmissionScoring {
        review_count,
        avg_score,
        total_reviewers,
        coverage_ratio,
        coverage_percent,
        last_reviewed_at,
        status,
    }
}
