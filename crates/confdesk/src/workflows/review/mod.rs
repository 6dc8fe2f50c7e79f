//! Proposal review scoring and shortlist classification.
//!
//! The core is four pure components composed top-down: the score aggregator,
//! the shortlist classifier, the band indexer, and the insights aggregator.
//! Around them sit the review source seam, a recompute-on-read service, the
//! HTTP router, and the CSV importer that forms the validating write
//! boundary.

pub mod domain;
pub mod import;
pub mod ledger;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod source;

#[cfg(test)]
mod tests;

pub use domain::{ReviewRecord, ReviewerId, ShortlistStatus, SubmissionId, SubmissionScoring};
pub use import::{ReviewCsvImporter, ReviewImportError};
pub use ledger::ReviewLedger;
pub use report::{summarize, ProgramInsights};
pub use router::review_router;
pub use scoring::{
    classify, compute_scoring, coverage_band, format_percent, format_score, round_to, score_band,
    CoverageBand, ScoreBand, ScoringFacts,
};
pub use service::{ProgramBoard, ReviewScoringService, ReviewServiceError};
pub use source::{ReviewSnapshot, ReviewSource, SourceError};
