use crate::workflows::review::domain::ShortlistStatus;

/// The triple a shortlist status is derived from. Two identical triples
/// always classify identically; there is no hidden state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringFacts {
    pub avg_score: Option<f64>,
    pub review_count: usize,
    pub coverage_ratio: f64,
}

/// Maps aggregate scoring facts to one shortlist status.
///
/// The rules overlap, so evaluation order is part of the contract: the
/// data-sufficiency gate outranks every score-based rule, then shortlist,
/// then reject, then the borderline default. Total over its input domain.
pub fn classify(facts: ScoringFacts) -> ShortlistStatus {
    let avg_score = match facts.avg_score {
        Some(avg_score) => avg_score,
        None => return ShortlistStatus::NeedsMoreReviews,
    };

    if facts.review_count < 2 || (facts.review_count < 4 && facts.coverage_ratio < 0.5) {
        return ShortlistStatus::NeedsMoreReviews;
    }

    if avg_score >= 3.0
        && facts.review_count >= 2
        && (facts.coverage_ratio >= 0.5 || facts.review_count >= 4)
    {
        return ShortlistStatus::LikelyShortlisted;
    }

    if avg_score < 2.0 && facts.review_count >= 2 {
        return ShortlistStatus::LikelyReject;
    }

    ShortlistStatus::Borderline
}
