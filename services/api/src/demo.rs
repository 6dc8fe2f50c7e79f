use crate::infra::seeded_demo_ledger;
use clap::Args;
use confdesk::error::AppError;
use confdesk::workflows::review::{
    ProgramBoard, ReviewCsvImporter, ReviewLedger, ReviewScoringService,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ProgramInsightsArgs {
    /// Review export CSV to score (Submission ID, Reviewer, Overall Score,
    /// Submitted At, Panel Size)
    #[arg(long)]
    pub(crate) reviews_csv: PathBuf,
    /// Include the per-submission board rows in the output
    #[arg(long)]
    pub(crate) list_submissions: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional review export CSV; a seeded ledger is used when absent
    #[arg(long)]
    pub(crate) reviews_csv: Option<PathBuf>,
    /// Include the per-submission board rows in the output
    #[arg(long)]
    pub(crate) list_submissions: bool,
}

pub(crate) fn run_program_insights(args: ProgramInsightsArgs) -> Result<(), AppError> {
    let ledger = ReviewCsvImporter::from_path(args.reviews_csv)?;
    let board = board_over(ledger)?;
    render_program_board(&board, true, args.list_submissions);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Program desk review scoring demo");

    let (ledger, imported) = match args.reviews_csv {
        Some(path) => (ReviewCsvImporter::from_path(path)?, true),
        None => (seeded_demo_ledger(), false),
    };

    let board = board_over(ledger)?;
    render_program_board(&board, imported, args.list_submissions);
    Ok(())
}

fn board_over(ledger: ReviewLedger) -> Result<ProgramBoard, AppError> {
    let service = ReviewScoringService::new(Arc::new(ledger));
    Ok(service.program_board()?)
}

fn render_program_board(board: &ProgramBoard, imported: bool, list_submissions: bool) {
    if imported {
        println!("Data source: review export CSV");
    } else {
        println!("Data source: seeded demo ledger");
    }

    let summary = board.insights.summary();

    println!("\nShortlist status distribution");
    for entry in &summary.by_status {
        println!(
            "- {} ({}): {} submission(s)",
            entry.status_label, entry.status_color, entry.count
        );
    }

    println!("\nScore distribution");
    for entry in &summary.by_score_band {
        println!("- {}: {} submission(s)", entry.band_label, entry.count);
    }

    println!("\nCoverage distribution (percent of panel)");
    for entry in &summary.by_coverage_band {
        println!("- {}: {} submission(s)", entry.band_label, entry.count);
    }

    if list_submissions {
        println!("\nProgram board");
        for row in &board.submissions {
            let scoring = &row.scoring;
            let last_reviewed = scoring
                .last_reviewed_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "- {} | avg {} | {} review(s) of {} | coverage {} | last {} | {}",
                row.submission_id.0,
                scoring.avg_label,
                scoring.review_count,
                scoring.total_reviewers,
                scoring.coverage_label,
                last_reviewed,
                scoring.status_label,
            );
        }
    }
}
