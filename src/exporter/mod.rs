// file: src/exporter/mod.rs
// description: export module exports
// reference: internal module structure

pub mod csv;
pub mod json;
pub mod tables;
pub mod text;
pub mod xlsx;

pub use json::{JsonExporter, JsonReport};
pub use tables::{ExportBundle, ExportOptions, TableExporter, flatten, summarize};
pub use xlsx::{XLSX_MIME, XlsxExporter};
