use super::views::{
    CoverageBandEntry, ProgramInsightsSummary, ScoreBandEntry, StatusTallyEntry,
};
use crate::workflows::review::domain::{ShortlistStatus, SubmissionScoring};
use crate::workflows::review::scoring::{coverage_band, score_band, CoverageBand, ScoreBand};
use serde::Serialize;
use std::collections::BTreeMap;

/// Distribution tallies over a submission set for the committee dashboard.
///
/// Every key of each dimension is present even at zero count so empty
/// categories still render; callers rely on that. The status tally always
/// sums to the number of submissions, while score-less submissions are
/// absent from the score-band tally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramInsights {
    pub by_status: BTreeMap<ShortlistStatus, usize>,
    pub by_score_band: BTreeMap<ScoreBand, usize>,
    pub by_coverage_band: BTreeMap<CoverageBand, usize>,
}

pub fn summarize(submissions: &[SubmissionScoring]) -> ProgramInsights {
    let mut by_status: BTreeMap<ShortlistStatus, usize> = ShortlistStatus::ordered()
        .into_iter()
        .map(|status| (status, 0))
        .collect();
    let mut by_score_band: BTreeMap<ScoreBand, usize> = ScoreBand::ordered()
        .into_iter()
        .map(|band| (band, 0))
        .collect();
    let mut by_coverage_band: BTreeMap<CoverageBand, usize> = CoverageBand::ordered()
        .into_iter()
        .map(|band| (band, 0))
        .collect();

    for scoring in submissions {
        if let Some(count) = by_status.get_mut(&scoring.status) {
            *count += 1;
        }

        if let Some(band) = score_band(scoring.avg_score) {
            if let Some(count) = by_score_band.get_mut(&band) {
                *count += 1;
            }
        }

        let band = coverage_band(scoring.coverage_percent);
        if let Some(count) = by_coverage_band.get_mut(&band) {
            *count += 1;
        }
    }

    ProgramInsights {
        by_status,
        by_score_band,
        by_coverage_band,
    }
}

impl ProgramInsights {
    pub fn summary(&self) -> ProgramInsightsSummary {
        let by_status = ShortlistStatus::ordered()
            .into_iter()
            .map(|status| StatusTallyEntry {
                status,
                status_label: status.label(),
                status_color: status.color(),
                count: self.by_status.get(&status).copied().unwrap_or(0),
            })
            .collect();

        let by_score_band = ScoreBand::ordered()
            .into_iter()
            .map(|band| ScoreBandEntry {
                band,
                band_label: band.label(),
                count: self.by_score_band.get(&band).copied().unwrap_or(0),
            })
            .collect();

        let by_coverage_band = CoverageBand::ordered()
            .into_iter()
            .map(|band| CoverageBandEntry {
                band,
                band_label: band.label(),
                count: self.by_coverage_band.get(&band).copied().unwrap_or(0),
            })
            .collect();

        ProgramInsightsSummary {
            by_status,
            by_score_band,
            by_coverage_band,
        }
    }
}
