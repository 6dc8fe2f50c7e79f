mod summary;
pub mod views;

pub use summary::{summarize, ProgramInsights};
