// file: src/models/export_row.rs
// description: flattened detail rows and per-record summary rows for tabular export
// reference: column names of the Relatorio / Resumo sheets

use crate::models::Record;
use serde::{Deserialize, Serialize};

pub const DETAIL_COLUMNS: [&str; 4] = ["Inicio", "Fim", "Qtd_Faltantes", "Numeros_Faltantes"];
pub const SUMMARY_COLUMNS: [&str; 4] = DETAIL_COLUMNS;

/// One missing document number together with the context of its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Inicio")]
    pub start: u64,
    #[serde(rename = "Fim")]
    pub end: u64,
    #[serde(rename = "Qtd_Faltantes")]
    pub declared_missing_count: u64,
    #[serde(rename = "Numeros_Faltantes")]
    pub missing_number: u64,
    /// Position of the originating record in the record set.
    #[serde(skip)]
    pub record_index: usize,
}

/// One unflattened row per record, carrying its full missing sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Inicio")]
    pub start: u64,
    #[serde(rename = "Fim")]
    pub end: u64,
    #[serde(rename = "Qtd_Faltantes")]
    pub declared_missing_count: u64,
    #[serde(rename = "Numeros_Faltantes")]
    pub missing_numbers: Vec<u64>,
}

impl SummaryRow {
    pub fn from_record(record: &Record) -> Self {
        Self {
            start: record.start(),
            end: record.end(),
            declared_missing_count: record.declared_missing_count(),
            missing_numbers: record.missing_numbers().to_vec(),
        }
    }

    /// The sequence as a single cell value, e.g. `101, 102, 103`.
    pub fn missing_numbers_cell(&self) -> String {
        self.missing_numbers
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The same rendering split into pieces of at most `max_len` bytes,
    /// breaking only between numbers. Empty when there is no gap.
    pub fn missing_numbers_cells(&self, max_len: usize) -> Vec<String> {
        let mut cells = Vec::new();
        let mut current = String::new();

        for number in &self.missing_numbers {
            let text = number.to_string();
            if !current.is_empty() && current.len() + 2 + text.len() > max_len {
                cells.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push_str(", ");
            }
            current.push_str(&text);
        }

        if !current.is_empty() {
            cells.push(current);
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_cell_rendering() {
        let row = SummaryRow::from_record(&Record::new(100, 104, 3));
        assert_eq!(row.missing_numbers_cell(), "101, 102, 103");

        let empty = SummaryRow::from_record(&Record::new(10, 11, 0));
        assert_eq!(empty.missing_numbers_cell(), "");
    }

    #[test]
    fn test_cells_split_between_numbers() {
        let row = SummaryRow::from_record(&Record::new(100, 105, 4));
        assert_eq!(row.missing_numbers_cells(usize::MAX), vec!["101, 102, 103, 104"]);
        assert_eq!(row.missing_numbers_cells(10), vec!["101, 102", "103, 104"]);
        assert!(SummaryRow::from_record(&Record::new(1, 2, 0))
            .missing_numbers_cells(10)
            .is_empty());
    }

    #[test]
    fn test_cells_rejoin_to_single_rendering() {
        let row = SummaryRow::from_record(&Record::new(100_000, 105_001, 5_000));
        let cells = row.missing_numbers_cells(32_767);

        assert_eq!(cells.len(), 2);
        assert!(cells.iter().all(|c| c.len() <= 32_767));
        assert_eq!(cells.join(", "), row.missing_numbers_cell());
    }

    #[test]
    fn test_export_row_uses_sheet_column_names() {
        let row = ExportRow {
            start: 1,
            end: 3,
            declared_missing_count: 1,
            missing_number: 2,
            record_index: 0,
        };
        let json = serde_json::to_value(row).unwrap();
        for column in DETAIL_COLUMNS {
            assert!(json.get(column).is_some(), "missing column {column}");
        }
        assert!(json.get("record_index").is_none());
    }
}
