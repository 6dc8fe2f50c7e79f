use chrono::{TimeZone, Utc};
use confdesk::workflows::review::{
    classify, compute_scoring, summarize, ReviewRecord, ReviewerId, ScoringFacts, ShortlistStatus,
    SubmissionId,
};

fn review(reviewer: &str, score: Option<f64>, day: u32) -> ReviewRecord {
    ReviewRecord {
        reviewer_id: ReviewerId(reviewer.to_string()),
        submission_id: SubmissionId("talk-101".to_string()),
        score_overall: score,
        created_at: Utc
            .with_ymd_and_hms(2026, 4, day, 9, 0, 0)
            .single()
            .expect("valid date"),
    }
}

#[test]
fn full_panel_scenario_shortlists() {
    let reviews = [
        review("ada", Some(3.0), 1),
        review("grace", Some(4.0), 2),
        review("linus", Some(3.0), 3),
    ];

    let scoring = compute_scoring(&reviews, 5);

    assert_eq!(scoring.review_count, 3);
    let avg = scoring.avg_score.expect("average present");
    assert!((avg - 3.333333).abs() < 1e-5);
    assert_eq!(scoring.coverage_ratio, 0.6);
    assert_eq!(scoring.coverage_percent, 60.0);
    assert_eq!(
        scoring.last_reviewed_at,
        Some(Utc.with_ymd_and_hms(2026, 4, 3, 9, 0, 0).single().unwrap())
    );
    assert_eq!(scoring.status, ShortlistStatus::LikelyShortlisted);
}

#[test]
fn scoring_is_a_pure_function_of_its_inputs() {
    let reviews = [review("ada", Some(2.5), 1), review("grace", Some(2.2), 2)];

    let first = compute_scoring(&reviews, 4);
    let second = compute_scoring(&reviews, 4);
    assert_eq!(first, second);
}

#[test]
fn data_sufficiency_gate_wins_for_any_count_below_two() {
    for avg in [1.0, 2.0, 3.0, 4.0, 5.0] {
        for (count, ratio) in [(0usize, 0.0), (1, 1.0)] {
            assert_eq!(
                classify(ScoringFacts {
                    avg_score: Some(avg),
                    review_count: count,
                    coverage_ratio: ratio,
                }),
                ShortlistStatus::NeedsMoreReviews,
                "avg {avg} with {count} review(s) must stay in the review queue",
            );
        }
    }
}

#[test]
fn status_tallies_always_sum_to_the_submission_count() {
    // Sweep a grid of scoring shapes and check the invariant on each prefix.
    let mut scorings = Vec::new();
    for count in 0..6usize {
        for panel in [0u32, 2, 5, 8] {
            let reviews: Vec<ReviewRecord> = (0..count)
                .map(|i| {
                    let score = match i % 3 {
                        0 => Some(1.0 + i as f64 * 0.8),
                        1 => Some(4.2),
                        _ => None,
                    };
                    review(&format!("reviewer-{i}"), score, i as u32 + 1)
                })
                .collect();
            scorings.push(compute_scoring(&reviews, panel));

            let insights = summarize(&scorings);
            let total: usize = insights.by_status.values().sum();
            assert_eq!(total, scorings.len());
            assert_eq!(insights.by_status.len(), 4);
        }
    }
}
