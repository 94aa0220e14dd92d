use crate::domain::model::{AnalysisReport, OutputFormat, Table};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_files(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn delimiter(&self) -> u8;
    fn formats(&self) -> Vec<OutputFormat>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn load(&self) -> Result<Vec<Table>>;
    async fn analyze(&self, tables: Vec<Table>) -> Result<AnalysisReport>;
    async fn render(&self, report: AnalysisReport) -> Result<Vec<String>>;
}
