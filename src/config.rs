// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use crate::exporter::ExportOptions;
use crate::exporter::xlsx::{DEFAULT_DETAIL_SHEET, DEFAULT_SUMMARY_SHEET};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportConfig {
    pub include_summary_sheet: bool,
    pub include_end_values_list: bool,
    pub numbers_as_text: bool,
    pub output_dir: PathBuf,
    pub file_stem: String,
    pub detail_sheet: String,
    pub summary_sheet: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Upload size guard; 0 disables it.
    pub max_file_size_mb: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_summary_sheet: false,
            include_end_values_list: false,
            numbers_as_text: false,
            output_dir: PathBuf::from("./exports"),
            file_stem: "relatorio_faltantes".to_string(),
            detail_sheet: DEFAULT_DETAIL_SHEET.to_string(),
            summary_sheet: DEFAULT_SUMMARY_SHEET.to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 50,
        }
    }
}

impl ExportConfig {
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            include_summary_sheet: self.include_summary_sheet,
            include_end_values_list: self.include_end_values_list,
            numbers_as_text: self.numbers_as_text,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(
                config::File::from(Path::new("config/default.toml")).required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PULANOTA")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            export: ExportConfig::default(),
            input: InputConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.export.file_stem.trim().is_empty() {
            return Err(PipelineError::Config(
                "file_stem must not be empty".to_string(),
            ));
        }

        Validator::validate_sheet_name(&self.export.detail_sheet)
            .map_err(|e| PipelineError::Config(e.to_string()))?;
        Validator::validate_sheet_name(&self.export.summary_sheet)
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        if self
            .export
            .detail_sheet
            .eq_ignore_ascii_case(&self.export.summary_sheet)
        {
            return Err(PipelineError::Config(
                "detail_sheet and summary_sheet must differ".to_string(),
            ));
        }

        Ok(())
    }

    pub fn max_input_bytes(&self) -> Option<u64> {
        match self.input.max_file_size_mb {
            0 => None,
            mb => Some((mb as u64).saturating_mul(1024 * 1024)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.export.detail_sheet, "Relatorio");
        assert_eq!(config.export.summary_sheet, "Resumo");
        assert_eq!(config.max_input_bytes(), Some(50 * 1024 * 1024));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pulanota.toml");
        fs::write(
            &path,
            "[export]\ninclude_summary_sheet = true\nfile_stem = \"faltantes\"\n\n[input]\nmax_file_size_mb = 0\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.export.include_summary_sheet);
        assert!(!config.export.include_end_values_list);
        assert_eq!(config.export.file_stem, "faltantes");
        assert_eq!(config.export.detail_sheet, "Relatorio");
        assert_eq!(config.max_input_bytes(), None);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_huge_size_limit_saturates() {
        let mut config = Config::default_config();
        config.input.max_file_size_mb = usize::MAX;
        assert_eq!(config.max_input_bytes(), Some(u64::MAX));
    }

    #[test]
    fn test_rejects_clashing_sheet_names() {
        let mut config = Config::default_config();
        config.export.summary_sheet = "relatorio".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_stem() {
        let mut config = Config::default_config();
        config.export.file_stem = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_options_projection() {
        let mut config = Config::default_config();
        config.export.include_end_values_list = true;
        let options = config.export.options();
        assert!(options.include_end_values_list);
        assert!(!options.include_summary_sheet);
    }
}
