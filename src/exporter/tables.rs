// file: src/exporter/tables.rs
// description: flattens records into row-per-number detail tables and per-record summaries
// reference: explode of a list-valued column, keeping the parent row's scalar fields

use crate::exporter::text;
use crate::models::{ExportRow, RecordSet, SummaryRow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which optional outputs an export carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub include_summary_sheet: bool,
    pub include_end_values_list: bool,
    /// Write missing numbers as text cells instead of numeric cells.
    #[serde(default)]
    pub numbers_as_text: bool,
}

/// Everything the sinks need, built in one pass from a record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportBundle {
    pub detail_rows: Vec<ExportRow>,
    pub summary_rows: Option<Vec<SummaryRow>>,
    pub missing_numbers_text: String,
    pub end_values_text: Option<String>,
    pub options: ExportOptions,
}

#[derive(Debug, Clone, Default)]
pub struct TableExporter {
    options: ExportOptions,
}

impl TableExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ExportOptions {
        self.options
    }

    pub fn export(&self, records: &RecordSet) -> ExportBundle {
        let detail_rows = flatten(records);
        debug!(
            "Flattened {} records into {} detail rows",
            records.len(),
            detail_rows.len()
        );

        ExportBundle {
            missing_numbers_text: text::missing_numbers_list(records),
            end_values_text: self
                .options
                .include_end_values_list
                .then(|| text::end_values_list(records)),
            summary_rows: self
                .options
                .include_summary_sheet
                .then(|| summarize(records)),
            detail_rows,
            options: self.options,
        }
    }
}

/// One row per missing number, grouped by record in source order and
/// ascending within each group. Records without a gap produce no rows.
pub fn flatten(records: &RecordSet) -> Vec<ExportRow> {
    records
        .iter()
        .enumerate()
        .flat_map(|(record_index, record)| {
            record
                .missing_numbers()
                .iter()
                .map(move |&missing_number| ExportRow {
                    start: record.start(),
                    end: record.end(),
                    declared_missing_count: record.declared_missing_count(),
                    missing_number,
                    record_index,
                })
        })
        .collect()
}

/// One row per record, gap or not.
pub fn summarize(records: &RecordSet) -> Vec<SummaryRow> {
    records.iter().map(SummaryRow::from_record).collect()
}
