// file: src/pipeline/builder.rs
// description: converts raw digit captures into typed records with expanded gaps
// reference: str::parse with error propagation

use crate::error::{PipelineError, Result};
use crate::models::{RawMatch, Record, RecordSet};
use tracing::debug;

/// The Record Builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordBuilder;

impl RecordBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, raw: &RawMatch) -> Result<Record> {
        let start = parse_field("start", &raw.start_text)?;
        let end = parse_field("end", &raw.end_text)?;
        let declared = parse_field("declared_missing_count", &raw.declared_missing_text)?;

        let record = Record::new(start, end, declared);
        if !record.is_consistent() {
            debug!(
                "Range {}..{} declares {} missing but the gap holds {}",
                start,
                end,
                declared,
                record.computed_missing_count()
            );
        }
        Ok(record)
    }

    /// Builds every record or none: the first unparsable field aborts the run.
    pub fn build_all(&self, raw_matches: &[RawMatch]) -> Result<RecordSet> {
        raw_matches.iter().map(|raw| self.build(raw)).collect()
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<u64> {
    text.parse::<u64>()
        .map_err(|source| PipelineError::MalformedNumericField {
            field,
            value: text.to_string(),
            source,
        })
}
