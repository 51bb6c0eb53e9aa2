//! Per-run result files: `Query, Query ID, Total (ms), Rows` plus a trailing
//! `TOTAL` row.

use crate::error::{Error, Result};
use crate::record::{total_duration_ms, QueryExecutionRecord};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::path::Path;

pub const COL_QUERY: &str = "Query";
pub const COL_QUERY_ID: &str = "Query ID";
pub const COL_TOTAL_MS: &str = "Total (ms)";
pub const COL_ROWS: &str = "Rows";

pub const TOTAL_LABEL: &str = "TOTAL";

/// Contents of one run file, TOTAL row split out.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub records: Vec<QueryExecutionRecord>,
    pub total_ms: f64,
}

/// Write records plus the TOTAL row. Parent directories are created.
///
/// Returns the TOTAL value written.
pub fn save_run(path: &Path, records: &[QueryExecutionRecord]) -> Result<f64> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let total = total_duration_ms(records);
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record([COL_QUERY, COL_QUERY_ID, COL_TOTAL_MS, COL_ROWS])?;

    for r in records {
        let duration = r.duration_ms.to_string();
        let rows = r.rows_produced.to_string();
        writer.write_record([
            r.query_name.as_str(),
            r.engine_query_id.as_str(),
            duration.as_str(),
            rows.as_str(),
        ])?;
    }
    let total_cell = total.to_string();
    writer.write_record([TOTAL_LABEL, "", total_cell.as_str(), ""])?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), rows = records.len(), total_ms = total, "Saved run results");
    Ok(total)
}

/// Read a run file written by [`save_run`].
///
/// Columns are located by header name, so extra columns are tolerated.
pub fn load_run(path: &Path) -> Result<RunResult> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let query_idx = column_index(&headers, COL_QUERY, path)?;
    let id_idx = column_index(&headers, COL_QUERY_ID, path)?;
    let total_idx = column_index(&headers, COL_TOTAL_MS, path)?;
    let rows_idx = column_index(&headers, COL_ROWS, path)?;

    let mut records = Vec::new();
    let mut total_ms = None;

    for (line, result) in reader.records().enumerate() {
        let record = result?;
        let field = |idx: usize| record.get(idx).unwrap_or("");
        let line = line + 2;

        let query = field(query_idx);
        let duration = parse_f64(field(total_idx), path, line)?;

        if query == TOTAL_LABEL {
            total_ms = Some(duration);
            continue;
        }

        let rows = match field(rows_idx) {
            "" => 0,
            s => s.parse::<u64>().map_err(|e| {
                Error::Parse(format!(
                    "{}:{}: invalid row count '{}': {}",
                    path.display(),
                    line,
                    s,
                    e
                ))
            })?,
        };

        records.push(QueryExecutionRecord::new(query, field(id_idx), duration, rows));
    }

    let total_ms = total_ms.ok_or_else(|| {
        Error::Parse(format!("{}: no {} row", path.display(), TOTAL_LABEL))
    })?;

    Ok(RunResult { records, total_ms })
}

fn column_index(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::Parse(format!("{}: missing column '{}'", path.display(), name)))
}

fn parse_f64(s: &str, path: &Path, line: usize) -> Result<f64> {
    s.parse::<f64>().map_err(|e| {
        Error::Parse(format!(
            "{}:{}: invalid duration '{}': {}",
            path.display(),
            line,
            s,
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_writes_total_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("run_1.csv");
        let records = vec![
            QueryExecutionRecord::new("tpch-q1", "01a", 120.5, 4),
            QueryExecutionRecord::new("tpch-q2", "01b", 30.0, 100),
        ];

        let total = save_run(&path, &records).unwrap();
        assert_eq!(total, 150.5);

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Query,Query ID,Total (ms),Rows");
        assert_eq!(lines[1], "tpch-q1,01a,120.5,4");
        assert_eq!(lines[3], "TOTAL,,150.5,");
    }

    #[test]
    fn test_load_requires_total_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.csv");
        fs::write(&path, "Query,Query ID,Total (ms),Rows\ntpch-q1,a,1,1\n").unwrap();
        assert!(matches!(load_run(&path), Err(Error::Parse(_))));
    }

    #[test]
    fn test_load_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.csv");
        fs::write(&path, "Query,Total (ms)\nTOTAL,1\n").unwrap();
        let err = load_run(&path).unwrap_err();
        assert!(err.to_string().contains("Query ID"));
    }

    #[test]
    fn test_empty_run_total_is_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.csv");
        assert_eq!(save_run(&path, &[]).unwrap(), 0.0);
        let loaded = load_run(&path).unwrap();
        assert!(loaded.records.is_empty());
        assert_eq!(loaded.total_ms, 0.0);
    }
}
