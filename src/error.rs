// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::num::ParseIntError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("No data in the expected format: no range of missing documents was found")]
    NoMatchFound,

    #[error("Matched {field} value '{value}' is not a valid document number: {source}")]
    MalformedNumericField {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("Aggregate statistics requested over zero records")]
    EmptyAggregateRequest,

    #[error("Input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PipelineError {
    /// True for the graceful "nothing to report" halt, as opposed to a real failure.
    pub fn is_no_match(&self) -> bool {
        matches!(self, PipelineError::NoMatchFound)
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_is_graceful() {
        assert!(PipelineError::NoMatchFound.is_no_match());
        assert!(!PipelineError::EmptyAggregateRequest.is_no_match());
    }

    #[test]
    fn test_malformed_field_message() {
        let source = "99999999999999999999999".parse::<u64>().unwrap_err();
        let err = PipelineError::MalformedNumericField {
            field: "start",
            value: "99999999999999999999999".to_string(),
            source,
        };
        let message = err.to_string();
        assert!(message.contains("start"));
        assert!(message.contains("99999999999999999999999"));
    }
}
