use crate::workflows::review::domain::{ShortlistStatus, SubmissionId, SubmissionScoring};
use crate::workflows::review::scoring::{
    format_percent, format_score, score_band, CoverageBand, ScoreBand,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Presentation-ready scoring for one submission: raw numbers plus the
/// labels dashboards render directly.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringView {
    pub review_count: usize,
    pub avg_score: Option<f64>,
    pub avg_label: String,
    pub total_reviewers: u32,
    pub coverage_ratio: f64,
    pub coverage_percent: f64,
    pub coverage_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    pub status: ShortlistStatus,
    pub status_label: &'static str,
    pub status_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_band: Option<ScoreBand>,
}

impl SubmissionScoring {
    pub fn to_view(&self) -> ScoringView {
        ScoringView {
            review_count: self.review_count,
            avg_score: self.avg_score,
            avg_label: format_score(self.avg_score),
            total_reviewers: self.total_reviewers,
            coverage_ratio: self.coverage_ratio,
            coverage_percent: self.coverage_percent,
            coverage_label: format_percent(self.coverage_percent),
            last_reviewed_at: self.last_reviewed_at,
            status: self.status,
            status_label: self.status.label(),
            status_color: self.status.color(),
            score_band: score_band(self.avg_score),
        }
    }
}

/// One row of the program board.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramBoardRow {
    pub submission_id: SubmissionId,
    pub scoring: ScoringView,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusTallyEntry {
    pub status: ShortlistStatus,
    pub status_label: &'static str,
    pub status_color: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreBandEntry {
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageBandEntry {
    pub band: CoverageBand,
    pub band_label: &'static str,
    pub count: usize,
}

/// Flattened, label-carrying distribution tallies in fixed presentation
/// order, including zero-count categories.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramInsightsSummary {
    pub by_status: Vec<StatusTallyEntry>,
    pub by_score_band: Vec<ScoreBandEntry>,
    pub by_coverage_band: Vec<CoverageBandEntry>,
}
