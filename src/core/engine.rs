use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Drives a [`Pipeline`] through load, analyze and render.
pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Vec<String>> {
        let started = Instant::now();
        tracing::info!("Starting analysis");

        let tables = self.pipeline.load().await?;
        let rows: usize = tables.iter().map(|t| t.rows.len()).sum();
        tracing::info!("Loaded {} files ({} rows)", tables.len(), rows);

        let report = self.pipeline.analyze(tables).await?;
        let columns: usize = report.datasets.iter().map(|d| d.columns.len()).sum();
        tracing::info!("Profiled {} columns", columns);

        let artifacts = self.pipeline.render(report).await?;
        for path in &artifacts {
            tracing::info!("Wrote {}", path);
        }

        tracing::debug!("Finished in {:?}", started.elapsed());
        Ok(artifacts)
    }
}
