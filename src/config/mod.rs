#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "./figures";
pub const DEFAULT_DELIMITER: &str = ",";
pub const DEFAULT_FORMATS: [&str; 2] = ["json", "csv"];
pub const INPUT_EXTENSIONS: [&str; 2] = ["csv", "tsv"];

/// Fully resolved settings, after layering flags over a config file over defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub inputs: Vec<String>,
    pub output_path: String,
    pub delimiter: String,
    pub formats: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            formats: DEFAULT_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Values set on the command line. `None`/empty means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub inputs: Vec<String>,
    pub output_path: Option<String>,
    pub delimiter: Option<String>,
    pub formats: Vec<String>,
}

impl AppConfig {
    pub fn resolve(file: Option<TomlConfig>, overrides: Overrides) -> Self {
        let mut config = Self::default();

        if let Some(file) = file {
            if !file.input.files.is_empty() {
                config.inputs = file.input.files;
            }
            if let Some(delimiter) = file.input.delimiter {
                config.delimiter = delimiter;
            }
            if let Some(path) = file.output.path {
                config.output_path = path;
            }
            if !file.output.formats.is_empty() {
                config.formats = file.output.formats;
            }
        }

        if !overrides.inputs.is_empty() {
            config.inputs = overrides.inputs;
        }
        if let Some(delimiter) = overrides.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(path) = overrides.output_path {
            config.output_path = path;
        }
        if !overrides.formats.is_empty() {
            config.formats = overrides.formats;
        }

        config
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_list("inputs", &self.inputs)?;
        validation::validate_file_extensions("inputs", &self.inputs, &INPUT_EXTENSIONS)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_delimiter("delimiter", &self.delimiter)?;
        validation::validate_formats("formats", &self.formats)?;
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn input_files(&self) -> &[String] {
        &self.inputs
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn delimiter(&self) -> u8 {
        self.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }

    fn formats(&self) -> Vec<OutputFormat> {
        self.formats.iter().filter_map(|f| f.parse().ok()).collect()
    }
}
