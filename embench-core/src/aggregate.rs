//! Reduce repeated run files to one `avg_results.csv`.

use crate::catalog::compare_by_ordinal;
use crate::error::{Error, Result};
use crate::layout::{list_run_files, AVERAGE_FILE_NAME};
use crate::result_file::{load_run, RunResult, COL_QUERY, COL_TOTAL_MS, TOTAL_LABEL};
use csv::WriterBuilder;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How repeated runs are reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AveragingPolicy {
    /// Mean over every run file.
    #[default]
    All,
    /// Drop the runs with the lowest and highest TOTAL, then average the rest.
    /// Needs at least three runs.
    TrimExtremes,
}

impl AveragingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AveragingPolicy::All => "all",
            AveragingPolicy::TrimExtremes => "trim-extremes",
        }
    }
}

impl fmt::Display for AveragingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AveragingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(AveragingPolicy::All),
            "trim-extremes" | "trimmed" => Ok(AveragingPolicy::TrimExtremes),
            other => Err(Error::Unsupported(format!("averaging policy '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AverageRow {
    pub query: String,
    pub total_ms: f64,
}

#[derive(Debug, Clone)]
pub struct Aggregate {
    /// Ordered by query number, TOTAL last
    pub rows: Vec<AverageRow>,
    /// Files that contributed, after any trimming
    pub used_files: Vec<PathBuf>,
    pub output: PathBuf,
}

impl Aggregate {
    pub fn total_ms(&self) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.query == TOTAL_LABEL)
            .map(|r| r.total_ms)
    }
}

/// Average already-loaded runs.
///
/// `runs` must share one query set; the TOTAL row is averaged from each
/// file's own TOTAL, like any other row.
pub fn average_runs(
    dir: &Path,
    runs: &[(PathBuf, RunResult)],
    policy: AveragingPolicy,
) -> Result<(Vec<AverageRow>, Vec<PathBuf>)> {
    let input_error = |reason: String| Error::AggregationInput {
        dir: dir.to_path_buf(),
        reason,
    };

    if runs.is_empty() {
        return Err(input_error("no run files".to_string()));
    }

    check_query_sets(runs).map_err(input_error)?;

    let selected: Vec<&(PathBuf, RunResult)> = match policy {
        AveragingPolicy::All => runs.iter().collect(),
        AveragingPolicy::TrimExtremes => {
            if runs.len() < 3 {
                return Err(input_error(format!(
                    "trimming needs at least 3 runs, found {}",
                    runs.len()
                )));
            }
            let mut sorted: Vec<&(PathBuf, RunResult)> = runs.iter().collect();
            sorted.sort_by(|a, b| a.1.total_ms.total_cmp(&b.1.total_ms));
            tracing::info!(
                lowest = %sorted[0].0.display(),
                highest = %sorted[sorted.len() - 1].0.display(),
                "Discarding fastest and slowest runs"
            );
            let keep = &sorted[1..sorted.len() - 1];
            // keep original file order for deterministic summation
            let mut kept: Vec<&(PathBuf, RunResult)> = keep.to_vec();
            kept.sort_by(|a, b| a.0.cmp(&b.0));
            kept
        }
    };

    let count = selected.len() as f64;
    let mut sums: HashMap<&str, f64> = HashMap::new();
    let mut total_sum = 0.0;
    for (_, run) in &selected {
        for r in &run.records {
            *sums.entry(r.query_name.as_str()).or_insert(0.0) += r.duration_ms;
        }
        total_sum += run.total_ms;
    }

    let mut rows: Vec<AverageRow> = sums
        .into_iter()
        .map(|(query, sum)| AverageRow {
            query: query.to_string(),
            total_ms: sum / count,
        })
        .collect();
    rows.sort_by(|a, b| compare_by_ordinal(&a.query, &b.query));
    rows.push(AverageRow {
        query: TOTAL_LABEL.to_string(),
        total_ms: total_sum / count,
    });

    let used = selected.iter().map(|(p, _)| p.clone()).collect();
    Ok((rows, used))
}

// Every run must name the same queries, each exactly once.
fn check_query_sets(runs: &[(PathBuf, RunResult)]) -> std::result::Result<(), String> {
    let names_of = |path: &Path, run: &RunResult| {
        let names: BTreeSet<String> = run.records.iter().map(|r| r.query_name.clone()).collect();
        if names.len() != run.records.len() {
            return Err(format!("{} lists a query more than once", path.display()));
        }
        Ok(names)
    };

    let (first_path, first_run) = match runs.first() {
        Some(first) => first,
        None => return Ok(()),
    };
    let expected = names_of(first_path, first_run)?;

    for (path, run) in &runs[1..] {
        let names = names_of(path, run)?;
        if names != expected {
            let missing: Vec<&String> = expected.difference(&names).collect();
            let extra: Vec<&String> = names.difference(&expected).collect();
            return Err(format!(
                "{} differs from {} (missing: {:?}, extra: {:?})",
                path.display(),
                first_path.display(),
                missing,
                extra
            ));
        }
    }

    Ok(())
}

pub fn write_average(path: &Path, rows: &[AverageRow]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record([COL_QUERY, COL_TOTAL_MS])?;
    for row in rows {
        let total = row.total_ms.to_string();
        writer.write_record([row.query.as_str(), total.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Load every run file in `dir`, average them and overwrite `avg_results.csv`.
pub fn aggregate_directory(dir: &Path, policy: AveragingPolicy) -> Result<Aggregate> {
    let files = list_run_files(dir)?;

    let mut runs = Vec::with_capacity(files.len());
    for file in files {
        let run = load_run(&file).map_err(|e| Error::AggregationInput {
            dir: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        runs.push((file, run));
    }

    let (rows, used_files) = average_runs(dir, &runs, policy)?;
    let output = dir.join(AVERAGE_FILE_NAME);
    write_average(&output, &rows)?;

    tracing::info!(
        output = %output.display(),
        files = used_files.len(),
        policy = %policy,
        "Wrote averaged results"
    );

    Ok(Aggregate {
        rows,
        used_files,
        output,
    })
}

/// Aggregate only when exactly `trigger` run files exist.
///
/// Input errors are logged and skipped; nothing is written in that case.
pub fn maybe_aggregate(
    dir: &Path,
    trigger: usize,
    policy: AveragingPolicy,
) -> Result<Option<Aggregate>> {
    let found = list_run_files(dir)?.len();
    if found != trigger {
        tracing::debug!(
            dir = %dir.display(),
            found,
            trigger,
            "Skipping aggregation"
        );
        return Ok(None);
    }

    match aggregate_directory(dir, policy) {
        Ok(aggregate) => Ok(Some(aggregate)),
        Err(e @ Error::AggregationInput { .. }) => {
            tracing::warn!(error = %e, "Aggregation skipped");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
