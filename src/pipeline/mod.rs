// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

pub mod aggregator;
pub mod builder;
mod orchestrator;

pub use aggregator::{Aggregates, DeclaredStats};
pub use builder::RecordBuilder;
pub use orchestrator::{PipelineOrchestrator, PipelineOutput};
