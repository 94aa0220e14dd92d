use crate::config::toml_config::TomlConfig;
use crate::config::{AppConfig, Overrides};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rgolf", version)]
#[command(about = "Runs analysis on CSV golf data and generates figures from it")]
pub struct CliConfig {
    /// CSV or TSV files to analyze
    pub inputs: Vec<String>,

    /// Directory figures are written to [default: ./figures]
    #[arg(short, long)]
    pub output_path: Option<String>,

    /// Field delimiter for .csv inputs (.tsv always uses tab) [default: ,]
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Output formats: json, csv, txt [default: json,csv]
    #[arg(short, long, value_delimiter = ',')]
    pub formats: Vec<String>,

    /// TOML config file; command-line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        let overrides = Overrides {
            inputs: self.inputs.clone(),
            output_path: self.output_path.clone(),
            delimiter: self.delimiter.clone(),
            formats: self.formats.clone(),
        };

        Ok(AppConfig::resolve(file, overrides))
    }
}
