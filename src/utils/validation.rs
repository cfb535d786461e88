// file: src/utils/validation.rs
// description: input and output validation helpers
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::fs;
use std::path::Path;

const SHEET_NAME_MAX_LEN: usize = 31;
const SHEET_NAME_ILLEGAL: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            PipelineError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(PipelineError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    /// Rejects inputs above `max_bytes`. `None` means unlimited.
    pub fn validate_input_size(path: &Path, max_bytes: Option<u64>) -> Result<()> {
        let Some(max_bytes) = max_bytes else {
            return Ok(());
        };

        let size = fs::metadata(path)?.len();
        if size > max_bytes {
            return Err(PipelineError::Validation(format!(
                "Input {} is {} bytes, above the {} byte limit",
                path.display(),
                size,
                max_bytes
            )));
        }

        Ok(())
    }

    pub fn validate_sheet_name(name: &str) -> Result<()> {
        let len = name.chars().count();
        if len == 0 || len > SHEET_NAME_MAX_LEN {
            return Err(PipelineError::Validation(format!(
                "Sheet name '{}' must be 1 to {} characters",
                name, SHEET_NAME_MAX_LEN
            )));
        }

        if let Some(c) = name.chars().find(|c| SHEET_NAME_ILLEGAL.contains(c)) {
            return Err(PipelineError::Validation(format!(
                "Sheet name '{}' contains illegal character '{}'",
                name, c
            )));
        }

        if name.starts_with('\'') || name.ends_with('\'') {
            return Err(PipelineError::Validation(format!(
                "Sheet name '{}' cannot start or end with an apostrophe",
                name
            )));
        }

        Ok(())
    }

    pub fn sanitize_file_stem(stem: &str) -> String {
        stem.trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c => c,
            })
            .collect()
    }
}
