// file: src/models/raw_match.rs
// description: verbatim digit captures for one reported range
// reference: regex capture groups

use serde::{Deserialize, Serialize};

/// One occurrence of the start / end / declared-count triplet, exactly as
/// captured from the report text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatch {
    pub start_text: String,
    pub end_text: String,
    pub declared_missing_text: String,
    /// Byte offset of the match in the source text.
    pub offset: usize,
}

impl RawMatch {
    pub fn new(
        start_text: impl Into<String>,
        end_text: impl Into<String>,
        declared_missing_text: impl Into<String>,
        offset: usize,
    ) -> Self {
        Self {
            start_text: start_text.into(),
            end_text: end_text.into(),
            declared_missing_text: declared_missing_text.into(),
            offset,
        }
    }
}
