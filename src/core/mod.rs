pub mod analysis;
pub mod engine;
pub mod figures;
pub mod pipeline;

pub use crate::domain::model::{AnalysisReport, Table};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
