mod aggregate;
mod bands;
mod format;
mod policy;

pub use aggregate::compute_scoring;
pub use bands::{coverage_band, score_band, CoverageBand, ScoreBand};
pub use format::{format_percent, format_score, round_to};
pub use policy::{classify, ScoringFacts};
