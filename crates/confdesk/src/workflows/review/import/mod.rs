//! CSV import of CFP-tool review exports.
//!
//! This is the write boundary: score-range and timestamp validation happen
//! here, row by row, so the scoring core can stay a total function over
//! whatever it is handed.

mod parser;

use crate::workflows::review::domain::{ReviewRecord, ReviewerId, SubmissionId};
use crate::workflows::review::ledger::ReviewLedger;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ReviewImportError {
    #[error("failed to read review export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid review CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: overall score '{value}' is not a number within the 1.0-5.0 scale")]
    InvalidScore { row: usize, value: String },
    #[error("row {row}: '{value}' is not an RFC 3339 timestamp or YYYY-MM-DD date")]
    InvalidTimestamp { row: usize, value: String },
    #[error("row {row}: submission id is empty")]
    MissingSubmission { row: usize },
}

pub struct ReviewCsvImporter;

impl ReviewCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ReviewLedger, ReviewImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ReviewLedger, ReviewImportError> {
        let mut ledger = ReviewLedger::new();

        for (index, row) in parser::parse_rows(reader)?.into_iter().enumerate() {
            // Row numbers in errors count the header line.
            let row_number = index + 2;

            let submission_id = row.submission_id.trim();
            if submission_id.is_empty() {
                return Err(ReviewImportError::MissingSubmission { row: row_number });
            }
            let submission_id = SubmissionId(submission_id.to_string());

            let score_overall = match row.overall_score {
                Some(raw) => Some(parse_score(&raw, row_number)?),
                None => None,
            };

            let created_at = parser::parse_timestamp(&row.submitted_at).ok_or_else(|| {
                ReviewImportError::InvalidTimestamp {
                    row: row_number,
                    value: row.submitted_at.clone(),
                }
            })?;

            if let Some(panel_size) = row
                .panel_size
                .as_deref()
                .and_then(|value| value.trim().parse::<u32>().ok())
            {
                ledger.observe_panel_size(&submission_id, panel_size);
            }

            ledger.record(ReviewRecord {
                reviewer_id: ReviewerId(row.reviewer.trim().to_string()),
                submission_id,
                score_overall,
                created_at,
            });
        }

        Ok(ledger)
    }
}

fn parse_score(raw: &str, row_number: usize) -> Result<f64, ReviewImportError> {
    let score: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ReviewImportError::InvalidScore {
            row: row_number,
            value: raw.to_string(),
        })?;

    if !(1.0..=5.0).contains(&score) {
        return Err(ReviewImportError::InvalidScore {
            row: row_number,
            value: raw.to_string(),
        });
    }

    Ok(score)
}
