// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use crate::config::{Config, ExportConfig, InputConfig};
pub use error::{PipelineError, Result};
pub use exporter::{
    ExportBundle, ExportOptions, JsonExporter, JsonReport, TableExporter, XLSX_MIME,
    XlsxExporter,
};
pub use extractor::RangeExtractor;
pub use models::{ExportRow, RawMatch, Record, RecordSet, SummaryRow};
pub use pipeline::{
    Aggregates, DeclaredStats, PipelineOrchestrator, PipelineOutput, RecordBuilder,
};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _orchestrator = PipelineOrchestrator::new(ExportOptions::default());
    }
}
