use crate::domain::model::{AnalysisReport, ColumnSummary, OutputFormat};
use crate::domain::ports::Storage;
use crate::utils::error::{GolfError, Result};

const SUMMARY_HEADER: [&str; 9] = [
    "dataset", "column", "kind", "non_empty", "missing", "distinct", "min", "max", "mean",
];

/// Writes report artifacts, one file per output format, relative to the storage root.
pub struct FigureWriter<'a, S: Storage> {
    storage: &'a S,
    formats: Vec<OutputFormat>,
}

impl<'a, S: Storage> FigureWriter<'a, S> {
    pub fn new(storage: &'a S, formats: Vec<OutputFormat>) -> Self {
        Self { storage, formats }
    }

    pub async fn render(&self, report: &AnalysisReport) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(self.formats.len());

        for format in &self.formats {
            let data = match format {
                OutputFormat::Json => render_json(report)?,
                OutputFormat::Csv => render_csv(report)?,
                OutputFormat::Txt => render_text(report).into_bytes(),
            };

            let file_name = format.file_name();
            tracing::debug!("Writing {} ({} bytes)", file_name, data.len());
            self.storage.write_file(file_name, &data).await?;
            written.push(file_name.to_string());
        }

        Ok(written)
    }
}

pub fn render_json(report: &AnalysisReport) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(report)?)
}

pub fn render_csv(report: &AnalysisReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(SUMMARY_HEADER)?;

    for dataset in &report.datasets {
        for column in &dataset.columns {
            writer.write_record(summary_row(&dataset.name, column))?;
        }
    }

    writer.into_inner().map_err(|e| GolfError::RenderError {
        message: e.to_string(),
    })
}

pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = format!("Generated at {}\n", report.generated_at.to_rfc3339());

    for dataset in &report.datasets {
        out.push_str(&format!(
            "\n{} ({} rows, {} columns)\n",
            dataset.name,
            dataset.rows,
            dataset.columns.len()
        ));

        let rows: Vec<[String; 9]> = dataset
            .columns
            .iter()
            .map(|c| summary_row(&dataset.name, c))
            .collect();

        // Dataset name is already in the heading, so the table starts at "column".
        let mut widths = [0usize; 9];
        for (i, title) in SUMMARY_HEADER.iter().enumerate().skip(1) {
            widths[i] = rows
                .iter()
                .map(|r| r[i].len())
                .chain(std::iter::once(title.len()))
                .max()
                .unwrap_or(0);
        }

        let line = |cells: Vec<&str>| -> String {
            cells
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i + 1]))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        out.push_str(&line(SUMMARY_HEADER[1..].to_vec()));
        out.push('\n');
        for row in &rows {
            out.push_str(&line(row[1..].iter().map(String::as_str).collect()));
            out.push('\n');
        }
    }

    out
}

fn summary_row(dataset: &str, column: &ColumnSummary) -> [String; 9] {
    let opt_num = |v: Option<f64>| v.map(format_number).unwrap_or_default();
    [
        dataset.to_string(),
        column.name.clone(),
        column.kind.to_string(),
        column.non_empty.to_string(),
        column.missing.to_string(),
        column.distinct.map(|d| d.to_string()).unwrap_or_default(),
        opt_num(column.min),
        opt_num(column.max),
        opt_num(column.mean),
    ]
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.4}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ColumnKind, DatasetSummary};
    use chrono::{TimeZone, Utc};

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            generated_at: Utc.with_ymd_and_hms(2024, 10, 29, 12, 0, 0).unwrap(),
            datasets: vec![DatasetSummary {
                name: "rounds.csv".to_string(),
                rows: 3,
                columns: vec![
                    ColumnSummary {
                        name: "course".to_string(),
                        kind: ColumnKind::Text,
                        non_empty: 3,
                        missing: 0,
                        distinct: Some(2),
                        min: None,
                        max: None,
                        mean: None,
                    },
                    ColumnSummary {
                        name: "score".to_string(),
                        kind: ColumnKind::Numeric,
                        non_empty: 3,
                        missing: 0,
                        distinct: None,
                        min: Some(68.5),
                        max: Some(86.0),
                        mean: Some(75.5),
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(72.0), "72");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(75.5), "75.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333");
    }

    #[test]
    fn test_render_csv_has_one_row_per_column() {
        let csv = String::from_utf8(render_csv(&sample_report()).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "dataset,column,kind,non_empty,missing,distinct,min,max,mean");
        assert_eq!(lines[1], "rounds.csv,course,text,3,0,2,,,");
        assert_eq!(lines[2], "rounds.csv,score,numeric,3,0,,68.5,86,75.5");
    }

    #[test]
    fn test_render_json_skips_absent_statistics() {
        let json: serde_json::Value =
            serde_json::from_slice(&render_json(&sample_report()).unwrap()).unwrap();

        let course = &json["datasets"][0]["columns"][0];
        assert_eq!(course["kind"], "text");
        assert_eq!(course["distinct"], 2);
        assert!(course.get("mean").is_none());

        let score = &json["datasets"][0]["columns"][1];
        assert_eq!(score["mean"], 75.5);
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let text = render_text(&sample_report());

        assert!(text.starts_with("Generated at 2024-10-29T12:00:00+00:00"));
        assert!(text.contains("rounds.csv (3 rows, 2 columns)"));
        assert!(text.contains("column  kind     non_empty  missing  distinct  min   max  mean"));
        assert!(text.contains("course  text     3          0        2"));
        assert!(text.contains("score   numeric  3          0                  68.5  86   75.5"));
    }
}
