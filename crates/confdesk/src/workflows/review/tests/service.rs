use std::sync::Arc;

use super::common::*;
use crate::workflows::review::domain::{ShortlistStatus, SubmissionId};
use crate::workflows::review::report::summarize;
use crate::workflows::review::scoring::compute_scoring;
use crate::workflows::review::service::{ReviewScoringService, ReviewServiceError};
use crate::workflows::review::source::SourceError;

#[test]
fn service_scores_known_submissions() {
    let service = build_service();

    let scoring = service
        .score_submission(&SubmissionId("talk-strong".to_string()))
        .expect("scoring succeeds");
    assert_eq!(scoring.review_count, 3);
    assert_eq!(scoring.total_reviewers, 5);
    assert_eq!(scoring.status, ShortlistStatus::LikelyShortlisted);

    let scoring = service
        .score_submission(&SubmissionId("talk-weak".to_string()))
        .expect("scoring succeeds");
    assert_eq!(scoring.status, ShortlistStatus::LikelyReject);
}

#[test]
fn service_maps_unknown_submission_to_not_found() {
    let service = build_service();

    let error = service
        .score_submission(&SubmissionId("talk-missing".to_string()))
        .expect_err("unknown submission fails");
    assert!(matches!(
        error,
        ReviewServiceError::Source(SourceError::NotFound)
    ));
}

#[test]
fn service_propagates_source_outages() {
    let service = ReviewScoringService::new(Arc::new(UnavailableSource));

    let error = service.program_board().expect_err("source offline");
    assert!(matches!(
        error,
        ReviewServiceError::Source(SourceError::Unavailable(_))
    ));
}

#[test]
fn program_board_covers_every_submission() {
    let service = build_service();

    let board = service.program_board().expect("board builds");
    assert_eq!(board.submissions.len(), 3);

    let status_total: usize = board.insights.by_status.values().sum();
    assert_eq!(status_total, board.submissions.len());

    assert_eq!(
        board.insights.by_status[&ShortlistStatus::LikelyShortlisted],
        1
    );
    assert_eq!(board.insights.by_status[&ShortlistStatus::LikelyReject], 1);
    assert_eq!(
        board.insights.by_status[&ShortlistStatus::NeedsMoreReviews],
        1
    );
    assert_eq!(board.insights.by_status[&ShortlistStatus::Borderline], 0);
}

#[test]
fn insights_summary_keeps_zero_count_categories() {
    let scorings = vec![compute_scoring(
        &[
            review("talk-1", "ada", Some(3.2), 2),
            review("talk-1", "grace", Some(3.6), 3),
        ],
        3,
    )];

    let insights = summarize(&scorings);
    let summary = insights.summary();

    assert_eq!(summary.by_status.len(), 4);
    assert_eq!(summary.by_score_band.len(), 4);
    assert_eq!(summary.by_coverage_band.len(), 4);
    assert_eq!(
        summary
            .by_status
            .iter()
            .map(|entry| entry.count)
            .sum::<usize>(),
        scorings.len()
    );
}

#[test]
fn summarize_skips_score_less_submissions_in_score_bands() {
    let scorings = vec![
        compute_scoring(&[review("talk-1", "ada", None, 2)], 4),
        compute_scoring(
            &[
                review("talk-2", "ada", Some(3.0), 2),
                review("talk-2", "grace", Some(3.4), 3),
            ],
            4,
        ),
    ];

    let insights = summarize(&scorings);
    let score_total: usize = insights.by_score_band.values().sum();
    assert_eq!(score_total, 1);

    let coverage_total: usize = insights.by_coverage_band.values().sum();
    assert_eq!(coverage_total, 2);
}
