// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod export_row;
pub mod raw_match;
pub mod record;

pub use export_row::{DETAIL_COLUMNS, ExportRow, SUMMARY_COLUMNS, SummaryRow};
pub use raw_match::RawMatch;
pub use record::{Record, RecordSet, missing_between};
