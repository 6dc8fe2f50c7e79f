use super::format::round_to;
use serde::{Deserialize, Serialize};

/// Fixed distribution band for average scores.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Weak,
    Middling,
    Solid,
    Strong,
}

impl ScoreBand {
    pub const fn ordered() -> [Self; 4] {
        [Self::Weak, Self::Middling, Self::Solid, Self::Strong]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "0-1.99",
            Self::Middling => "2-2.99",
            Self::Solid => "3-3.49",
            Self::Strong => "3.5-4",
        }
    }
}

/// Fixed distribution band for review coverage, in percent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CoverageBand {
    Sparse,
    Partial,
    Majority,
    Full,
}

impl CoverageBand {
    pub const fn ordered() -> [Self; 4] {
        [Self::Sparse, Self::Partial, Self::Majority, Self::Full]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sparse => "0-24",
            Self::Partial => "25-49",
            Self::Majority => "50-74",
            Self::Full => "75-100",
        }
    }
}

// Inclusive-inclusive bounds, scanned ascending; first match wins.
const SCORE_BANDS: [(ScoreBand, f64, f64); 4] = [
    (ScoreBand::Weak, 0.0, 1.99),
    (ScoreBand::Middling, 2.0, 2.99),
    (ScoreBand::Solid, 3.0, 3.49),
    (ScoreBand::Strong, 3.5, 4.0),
];

const COVERAGE_BANDS: [(CoverageBand, i64, i64); 4] = [
    (CoverageBand::Sparse, 0, 24),
    (CoverageBand::Partial, 25, 49),
    (CoverageBand::Majority, 50, 74),
    (CoverageBand::Full, 75, 100),
];

/// Band for an average score. Score-less submissions stay out of the score
/// distribution, and abnormal values outside every band map to `None`.
pub fn score_band(score: Option<f64>) -> Option<ScoreBand> {
    let score = score?;
    SCORE_BANDS
        .iter()
        .find(|(_, low, high)| score >= *low && score <= *high)
        .map(|(band, _, _)| *band)
}

/// Band for a coverage percentage. Always yields a band: fractional percents
/// are rounded half-up to match the integer bounds, and anything outside
/// 0-100 (denominator skew, rounding overshoot) clamps into the edge bands.
pub fn coverage_band(percent: f64) -> CoverageBand {
    let rounded = (round_to(percent, 0) as i64).clamp(0, 100);
    COVERAGE_BANDS
        .iter()
        .find(|(_, low, high)| rounded >= *low && rounded <= *high)
        .map(|(band, _, _)| *band)
        .unwrap_or(CoverageBand::Full)
}
