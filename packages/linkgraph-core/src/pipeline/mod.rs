//! Pipeline
//!
//! - `Pipeline`: stage orchestration (extract → expand → assemble → map → export)
//! - `PipelineContext`: per-run state; upstream changes discard the graph

pub mod context;
pub mod error;
pub mod orchestrator;
pub mod result;

pub use context::PipelineContext;
pub use error::PipelineError;
pub use orchestrator::Pipeline;
pub use result::{PipelineResult, RunStats};
