use crate::domain::model::{AnalysisReport, ColumnKind, ColumnSummary, DatasetSummary, Table};
use crate::utils::error::{GolfError, Result};
use chrono::Utc;
use csv::{ErrorKind, ReaderBuilder, Trim};
use std::collections::HashSet;

/// Loads CSV files into [`Table`]s and profiles their columns.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
    delimiter: u8,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl Analyzer {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Parses `data` as CSV with a header row. Empty input yields an empty table.
    pub fn parse_table(&self, name: &str, data: &[u8]) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(false)
            .from_reader(data);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| malformed(name, e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut seen = HashSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(GolfError::DuplicateColumn {
                    file: name.to_string(),
                    column: header.clone(),
                });
            }
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| malformed(name, e))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!("Parsed {}: {} columns, {} rows", name, headers.len(), rows.len());

        Ok(Table {
            name: name.to_string(),
            headers,
            rows,
        })
    }

    pub fn summarize(&self, table: &Table) -> DatasetSummary {
        let columns = table
            .headers
            .iter()
            .enumerate()
            .map(|(index, header)| summarize_column(header, table.column(index)))
            .collect();

        DatasetSummary {
            name: table.name.clone(),
            rows: table.rows.len(),
            columns,
        }
    }

    pub fn analyze(&self, tables: &[Table]) -> AnalysisReport {
        let datasets = tables.iter().map(|t| self.summarize(t)).collect();
        AnalysisReport {
            generated_at: Utc::now(),
            datasets,
        }
    }
}

fn malformed(name: &str, err: csv::Error) -> GolfError {
    match err.kind() {
        ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => GolfError::MalformedRow {
            file: name.to_string(),
            line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
            expected: *expected_len as usize,
            found: *len as usize,
        },
        _ => GolfError::CsvError(err),
    }
}

fn summarize_column<'a>(name: &str, cells: impl Iterator<Item = &'a str>) -> ColumnSummary {
    let mut non_empty = 0;
    let mut missing = 0;
    let mut numbers = Vec::new();
    let mut all_numeric = true;
    let mut distinct = HashSet::new();

    for cell in cells {
        if cell.is_empty() {
            missing += 1;
            continue;
        }
        non_empty += 1;
        distinct.insert(cell);

        if all_numeric {
            // NaN and inf parse as f64 but would poison min/max/mean.
            match cell.parse::<f64>() {
                Ok(value) if value.is_finite() => numbers.push(value),
                _ => all_numeric = false,
            }
        }
    }

    let kind = if non_empty == 0 {
        ColumnKind::Empty
    } else if all_numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    };

    let mut summary = ColumnSummary {
        name: name.to_string(),
        kind,
        non_empty,
        missing,
        distinct: None,
        min: None,
        max: None,
        mean: None,
    };

    match kind {
        ColumnKind::Numeric => {
            let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
            let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;
            summary.min = Some(min);
            summary.max = Some(max);
            // Rounding can push the mean a hair outside [min, max].
            summary.mean = Some(mean.clamp(min, max));
        }
        ColumnKind::Text => summary.distinct = Some(distinct.len()),
        ColumnKind::Empty => {}
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUNDS: &str = "\
player,course,score,putts
Ana, Pebble Beach ,72,30
Ben,Pebble Beach,86,
Cleo,St Andrews,68.5,28
";

    #[test]
    fn test_parse_table_trims_cells() {
        let table = Analyzer::default()
            .parse_table("rounds.csv", ROUNDS.as_bytes())
            .unwrap();

        assert_eq!(table.headers, vec!["player", "course", "score", "putts"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0][1], "Pebble Beach");
        assert_eq!(table.rows[1][3], "");
    }

    #[test]
    fn test_parse_empty_and_header_only_input() {
        let analyzer = Analyzer::default();

        let empty = analyzer.parse_table("empty.csv", b"").unwrap();
        assert!(empty.headers.is_empty());
        assert!(empty.rows.is_empty());

        let header_only = analyzer.parse_table("header.csv", b"hole,par\n").unwrap();
        assert_eq!(header_only.headers, vec!["hole", "par"]);
        assert!(header_only.rows.is_empty());
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = Analyzer::default()
            .parse_table("bad.csv", b"hole,par,yards\n1,4,410\n2,3\n")
            .unwrap_err();

        match err {
            GolfError::MalformedRow {
                file,
                line,
                expected,
                found,
            } => {
                assert_eq!(file, "bad.csv");
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_duplicate_headers() {
        let err = Analyzer::default()
            .parse_table("dup.csv", b"hole,par,par\n1,4,4\n")
            .unwrap_err();
        assert!(matches!(err, GolfError::DuplicateColumn { ref column, .. } if column == "par"));
    }

    #[test]
    fn test_parse_with_tab_delimiter() {
        let table = Analyzer::new(b'\t')
            .parse_table("holes.tsv", b"hole\tpar\n1\t4\n2\t5\n")
            .unwrap();
        assert_eq!(table.headers, vec!["hole", "par"]);
        assert_eq!(table.rows[1], vec!["2", "5"]);
    }

    #[test]
    fn test_summarize_profiles_each_column() {
        let analyzer = Analyzer::default();
        let table = analyzer.parse_table("rounds.csv", ROUNDS.as_bytes()).unwrap();
        let summary = analyzer.summarize(&table);

        assert_eq!(summary.name, "rounds.csv");
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.columns.len(), 4);

        let course = &summary.columns[1];
        assert_eq!(course.kind, ColumnKind::Text);
        assert_eq!(course.distinct, Some(2));
        assert_eq!(course.min, None);

        let score = &summary.columns[2];
        assert_eq!(score.kind, ColumnKind::Numeric);
        assert_eq!(score.min, Some(68.5));
        assert_eq!(score.max, Some(86.0));
        assert_eq!(score.mean, Some(75.5));
        assert_eq!(score.distinct, None);

        let putts = &summary.columns[3];
        assert_eq!(putts.kind, ColumnKind::Numeric);
        assert_eq!(putts.non_empty, 2);
        assert_eq!(putts.missing, 1);
        assert_eq!(putts.mean, Some(29.0));

        for column in &summary.columns {
            assert_eq!(column.non_empty + column.missing, summary.rows);
        }
    }

    #[test]
    fn test_summarize_empty_and_non_finite_columns() {
        let analyzer = Analyzer::default();
        let table = analyzer
            .parse_table("odd.csv", b"notes,strokes\n,NaN\n,4\n")
            .unwrap();
        let summary = analyzer.summarize(&table);

        assert_eq!(summary.columns[0].kind, ColumnKind::Empty);
        assert_eq!(summary.columns[0].missing, 2);
        assert_eq!(summary.columns[1].kind, ColumnKind::Text);
        assert_eq!(summary.columns[1].distinct, Some(2));
    }

    #[test]
    fn test_analyze_keeps_input_order() {
        let analyzer = Analyzer::default();
        let tables = vec![
            analyzer.parse_table("b.csv", b"x\n1\n").unwrap(),
            analyzer.parse_table("a.csv", b"y\n2\n").unwrap(),
        ];
        let report = analyzer.analyze(&tables);

        let names: Vec<&str> = report.datasets.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["b.csv", "a.csv"]);
    }
}
