// file: src/extractor/range.rs
// description: scans report text for start / end / declared-count triplets
// reference: regex captures_iter, non-overlapping left-to-right matching

use crate::extractor::patterns::{MISSING_RANGE, mentions_range_start};
use crate::models::RawMatch;
use tracing::debug;

/// The Pattern Extractor. Stateless; one instance can serve any number of inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeExtractor;

impl RangeExtractor {
    pub fn new() -> Self {
        Self
    }

    /// All non-overlapping triplets in order of appearance. An empty result is
    /// not an error at this level; the pipeline decides what "nothing found" means.
    pub fn extract(&self, text: &str) -> Vec<RawMatch> {
        if !mentions_range_start(text) {
            debug!("No range start label in {} bytes of input", text.len());
            return Vec::new();
        }

        let matches: Vec<RawMatch> = MISSING_RANGE
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(RawMatch::new(
                    caps.name("start")?.as_str(),
                    caps.name("end")?.as_str(),
                    caps.name("declared")?.as_str(),
                    whole.start(),
                ))
            })
            .collect();

        debug!("Extracted {} raw ranges", matches.len());
        matches
    }
}
