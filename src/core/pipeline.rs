use crate::core::analysis::Analyzer;
use crate::core::figures::FigureWriter;
use crate::core::{AnalysisReport, ConfigProvider, Pipeline, Storage, Table};
use crate::utils::error::Result;
use std::path::Path;

/// Reads CSV inputs from `source` and writes figure artifacts to `sink`.
pub struct CsvPipeline<S: Storage, C: ConfigProvider> {
    source: S,
    sink: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvPipeline<S, C> {
    pub fn new(source: S, sink: S, config: C) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    fn analyzer_for(&self, path: &str) -> Analyzer {
        let is_tsv = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));

        if is_tsv {
            Analyzer::new(b'\t')
        } else {
            Analyzer::new(self.config.delimiter())
        }
    }
}

fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CsvPipeline<S, C> {
    async fn load(&self) -> Result<Vec<Table>> {
        let mut tables = Vec::with_capacity(self.config.input_files().len());

        for path in self.config.input_files() {
            tracing::debug!("Reading {}", path);
            let data = self.source.read_file(path).await?;
            let table = self.analyzer_for(path).parse_table(&display_name(path), &data)?;
            tables.push(table);
        }

        Ok(tables)
    }

    async fn analyze(&self, tables: Vec<Table>) -> Result<AnalysisReport> {
        Ok(Analyzer::new(self.config.delimiter()).analyze(&tables))
    }

    async fn render(&self, report: AnalysisReport) -> Result<Vec<String>> {
        let writer = FigureWriter::new(&self.sink, self.config.formats());
        let written = writer.render(&report).await?;

        Ok(written
            .iter()
            .map(|name| {
                Path::new(self.config.output_path())
                    .join(name)
                    .display()
                    .to_string()
            })
            .collect())
    }
}
