pub mod calc;
pub mod pipeline;
pub mod report;

pub use pipeline::{ReportPipeline, RunOutcome, RunSettings};
