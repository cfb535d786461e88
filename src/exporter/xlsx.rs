// file: src/exporter/xlsx.rs
// description: spreadsheet sink writing the detail sheet and the optional summary sheet
// reference: https://docs.rs/rust_xlsxwriter

use crate::error::Result;
use crate::exporter::tables::ExportBundle;
use crate::models::{DETAIL_COLUMNS, ExportRow, SUMMARY_COLUMNS, SummaryRow};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::info;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const DEFAULT_DETAIL_SHEET: &str = "Relatorio";
pub const DEFAULT_SUMMARY_SHEET: &str = "Resumo";
/// Longest string Excel stores in one cell.
pub const CELL_TEXT_LIMIT: usize = 32_767;

#[derive(Debug, Clone)]
pub struct XlsxExporter {
    detail_sheet: String,
    summary_sheet: String,
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self::new(DEFAULT_DETAIL_SHEET, DEFAULT_SUMMARY_SHEET)
    }
}

impl XlsxExporter {
    pub fn new(detail_sheet: impl Into<String>, summary_sheet: impl Into<String>) -> Self {
        Self {
            detail_sheet: detail_sheet.into(),
            summary_sheet: summary_sheet.into(),
        }
    }

    pub fn build_workbook(&self, bundle: &ExportBundle) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let detail = workbook.add_worksheet();
        detail.set_name(&self.detail_sheet)?;
        write_header(detail, &DETAIL_COLUMNS, &header)?;
        write_detail_rows(detail, &bundle.detail_rows, bundle.options.numbers_as_text)?;

        if let Some(summary_rows) = &bundle.summary_rows {
            let summary = workbook.add_worksheet();
            summary.set_name(&self.summary_sheet)?;
            write_header(summary, &SUMMARY_COLUMNS, &header)?;
            write_summary_rows(summary, summary_rows)?;
        }

        Ok(workbook)
    }

    pub fn to_buffer(&self, bundle: &ExportBundle) -> Result<Vec<u8>> {
        let mut workbook = self.build_workbook(bundle)?;
        Ok(workbook.save_to_buffer()?)
    }

    pub fn save(&self, bundle: &ExportBundle, path: &Path) -> Result<()> {
        let mut workbook = self.build_workbook(bundle)?;
        workbook.save(path)?;
        info!(
            "Wrote {} detail rows to {}",
            bundle.detail_rows.len(),
            path.display()
        );
        Ok(())
    }
}

fn write_header(sheet: &mut Worksheet, columns: &[&str], format: &Format) -> Result<()> {
    for (col, name) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, format)?;
        sheet.set_column_width(col as u16, 18)?;
    }
    Ok(())
}

fn write_detail_rows(
    sheet: &mut Worksheet,
    rows: &[ExportRow],
    numbers_as_text: bool,
) -> Result<()> {
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_number(r, 0, row.start as f64)?;
        sheet.write_number(r, 1, row.end as f64)?;
        sheet.write_number(r, 2, row.declared_missing_count as f64)?;
        if numbers_as_text {
            sheet.write_string(r, 3, row.missing_number.to_string())?;
        } else {
            sheet.write_number(r, 3, row.missing_number as f64)?;
        }
    }
    Ok(())
}

fn write_summary_rows(sheet: &mut Worksheet, rows: &[SummaryRow]) -> Result<()> {
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_number(r, 0, row.start as f64)?;
        sheet.write_number(r, 1, row.end as f64)?;
        sheet.write_number(r, 2, row.declared_missing_count as f64)?;
        // long gaps continue into the next columns of the same row
        for (offset, cell) in row.missing_numbers_cells(CELL_TEXT_LIMIT).iter().enumerate() {
            sheet.write_string(r, 3 + offset as u16, cell)?;
        }
    }
    Ok(())
}
