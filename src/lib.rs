pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::AppConfig;
pub use crate::core::{analysis::Analyzer, engine::AnalysisEngine, pipeline::CsvPipeline};
pub use utils::error::{GolfError, Result};
