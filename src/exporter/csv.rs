// file: src/exporter/csv.rs
// description: detail and summary tables as CSV for tools that cannot open spreadsheets
// reference: https://docs.rs/csv

use crate::error::{PipelineError, Result};
use crate::models::{ExportRow, SUMMARY_COLUMNS, SummaryRow};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn write_detail<W: Write>(writer: W, rows: &[ExportRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// One line per range; the whole missing sequence sits in the last field.
pub fn write_summary<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(SUMMARY_COLUMNS)?;
    for row in rows {
        csv_writer.write_record([
            row.start.to_string(),
            row.end.to_string(),
            row.declared_missing_count.to_string(),
            row.missing_numbers_cell(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn detail_to_string(rows: &[ExportRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_detail(&mut buffer, rows)?;
    buffer_to_string(buffer)
}

pub fn summary_to_string(rows: &[SummaryRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_summary(&mut buffer, rows)?;
    buffer_to_string(buffer)
}

fn buffer_to_string(buffer: Vec<u8>) -> Result<String> {
    String::from_utf8(buffer)
        .map_err(|e| PipelineError::Serialization(format!("CSV output is not UTF-8: {e}")))
}

pub fn save_detail(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_detail(file, rows)?;
    info!("Wrote {} CSV rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn save_summary(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_summary(file, rows)?;
    info!("Wrote {} CSV summary rows to {}", rows.len(), path.display());
    Ok(())
}
