// file: src/pipeline/orchestrator.rs
// description: runs extraction, record building, aggregation and export for one input
// reference: one synchronous run per uploaded report

use crate::error::{PipelineError, Result};
use crate::exporter::{ExportBundle, ExportOptions, TableExporter};
use crate::extractor::RangeExtractor;
use crate::models::RecordSet;
use crate::pipeline::aggregator::Aggregates;
use crate::pipeline::builder::RecordBuilder;
use std::time::Instant;
use tracing::{debug, info};

/// Everything one successful run produces. Built fresh per input, never shared.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub records: RecordSet,
    pub aggregates: Aggregates,
    pub export: ExportBundle,
}

#[derive(Debug, Clone, Default)]
pub struct PipelineOrchestrator {
    extractor: RangeExtractor,
    builder: RecordBuilder,
    exporter: TableExporter,
}

impl PipelineOrchestrator {
    pub fn new(options: ExportOptions) -> Self {
        Self {
            extractor: RangeExtractor::new(),
            builder: RecordBuilder::new(),
            exporter: TableExporter::new(options),
        }
    }

    /// Records only, without aggregation or export.
    pub fn records(&self, text: &str) -> Result<RecordSet> {
        let raw_matches = self.extractor.extract(text);
        if raw_matches.is_empty() {
            return Err(PipelineError::NoMatchFound);
        }
        self.builder.build_all(&raw_matches)
    }

    pub fn run(&self, text: &str) -> Result<PipelineOutput> {
        let started = Instant::now();

        let records = self.records(text)?;
        let aggregates = Aggregates::compute(&records);
        let export = self.exporter.export(&records);

        info!(
            "Found {} ranges with {} missing documents",
            records.len(),
            aggregates.total_missing
        );
        debug!("Pipeline run took {:.2?}", started.elapsed());

        Ok(PipelineOutput {
            records,
            aggregates,
            export,
        })
    }

    /// Entry point for raw uploaded bytes.
    pub fn run_bytes(&self, bytes: Vec<u8>) -> Result<PipelineOutput> {
        let text = String::from_utf8(bytes)?;
        self.run(&text)
    }
}
