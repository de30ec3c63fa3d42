//! Single-pass pipeline: fetch, process, publish

pub mod driver;
pub mod summary;

pub use driver::PipelineDriver;
pub use summary::{RunError, RunErrorType, RunSummary};
