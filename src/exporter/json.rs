// file: src/exporter/json.rs
// description: json report of records and aggregates

use crate::error::Result;
use crate::models::RecordSet;
use crate::pipeline::Aggregates;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub exported_at: String,
    pub source: Option<String>,
    pub total_records: usize,
    pub aggregates: &'a Aggregates,
    pub records: &'a RecordSet,
}

impl<'a> JsonReport<'a> {
    pub fn new(source: Option<&Path>, records: &'a RecordSet, aggregates: &'a Aggregates) -> Self {
        Self {
            exported_at: Utc::now().to_rfc3339(),
            source: source.map(|p| p.display().to_string()),
            total_records: records.len(),
            aggregates,
            records,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn export(
        &self,
        report: &JsonReport<'_>,
        file_stem: &str,
        pretty: bool,
    ) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("{file_stem}.json"));
        fs::write(&path, report.to_json(pretty)?)?;

        info!(
            "JSON export complete: {} records written to {}",
            report.total_records,
            path.display()
        );
        Ok(path)
    }
}
