use crate::catalog::Benchmark;
use crate::error::Result;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const AVERAGE_FILE_NAME: &str = "avg_results.csv";
const RUN_FILE_MARKER: &str = "_results_run_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warmth {
    /// Clean engine state before every query
    Cold,
    /// One live session/process for the whole run
    Warm,
}

/// Compute warmth and result caching are independent axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheMode {
    pub warmth: Warmth,
    pub result_cache: bool,
}

impl CacheMode {
    pub fn new(warmth: Warmth, result_cache: bool) -> Self {
        Self {
            warmth,
            result_cache,
        }
    }

    pub fn is_cold(&self) -> bool {
        self.warmth == Warmth::Cold
    }

    /// `warm`, `cold`, `warm_no_result_cache` or `cold_no_result_cache`
    pub fn dir_name(&self) -> String {
        let base = match self.warmth {
            Warmth::Cold => "cold",
            Warmth::Warm => "warm",
        };
        if self.result_cache {
            base.to_string()
        } else {
            format!("{}_no_result_cache", base)
        }
    }
}

impl Default for CacheMode {
    fn default() -> Self {
        Self::new(Warmth::Warm, true)
    }
}

impl fmt::Display for CacheMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dir_name())
    }
}

/// Identifies one result configuration (everything except the run ordinal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultKey {
    pub engine: String,
    pub benchmark: Benchmark,
    pub dataset: String,
    /// Warehouse name or instance name
    pub label: String,
    pub mode: CacheMode,
}

/// Directory layout under the result root:
/// `{engine}_{benchmark}_results/{dataset}/{label}/{mode}/{engine}_results_run_{n}.csv`
#[derive(Debug, Clone)]
pub struct ResultLayout {
    root: PathBuf,
}

impl ResultLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn directory(&self, key: &ResultKey) -> PathBuf {
        let mut dir = self
            .root
            .join(format!("{}_{}_results", key.engine, key.benchmark));
        for segment in key.dataset.split('/').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        dir.join(&key.label).join(key.mode.dir_name())
    }

    pub fn run_file(&self, key: &ResultKey, run: u32) -> PathBuf {
        self.directory(key)
            .join(format!("{}{}{}.csv", key.engine, RUN_FILE_MARKER, run))
    }

    pub fn average_file(&self, key: &ResultKey) -> PathBuf {
        self.directory(key).join(AVERAGE_FILE_NAME)
    }
}

/// Run number from a file name like `snowflake_results_run_3.csv`
pub fn run_number(file_name: &str) -> Option<u32> {
    let stem = file_name.strip_suffix(".csv")?;
    let idx = stem.rfind(RUN_FILE_MARKER)?;
    stem[idx + RUN_FILE_MARKER.len()..].parse().ok()
}

/// Run files directly inside `dir`, ordered by run number.
///
/// A missing directory yields an empty list.
pub fn list_run_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if let Some(n) = name.to_str().and_then(run_number) {
            files.push((n, entry.path()));
        }
    }

    files.sort();
    Ok(files.into_iter().map(|(_, p)| p).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn key() -> ResultKey {
        ResultKey {
            engine: "embucket".to_string(),
            benchmark: Benchmark::Tpch,
            dataset: "tpch/10".to_string(),
            label: "i-0abc".to_string(),
            mode: CacheMode::new(Warmth::Cold, false),
        }
    }

    #[test]
    fn test_run_file_path() {
        let layout = ResultLayout::new("result");
        let path = layout.run_file(&key(), 2);
        assert_eq!(
            path,
            PathBuf::from("result/embucket_tpch_results/tpch/10/i-0abc/cold_no_result_cache/embucket_results_run_2.csv")
        );
        assert_eq!(
            layout.average_file(&key()),
            PathBuf::from("result/embucket_tpch_results/tpch/10/i-0abc/cold_no_result_cache/avg_results.csv")
        );
    }

    #[test]
    fn test_mode_dir_names() {
        assert_eq!(CacheMode::new(Warmth::Warm, true).dir_name(), "warm");
        assert_eq!(CacheMode::new(Warmth::Cold, true).dir_name(), "cold");
        assert_eq!(
            CacheMode::new(Warmth::Warm, false).dir_name(),
            "warm_no_result_cache"
        );
    }

    #[test]
    fn test_run_number() {
        assert_eq!(run_number("snowflake_results_run_3.csv"), Some(3));
        assert_eq!(run_number("embucket_results_run_12.csv"), Some(12));
        assert_eq!(run_number("avg_results.csv"), None);
        assert_eq!(run_number("snowflake_results_run_x.csv"), None);
    }

    #[test]
    fn test_list_run_files_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in [
            "snowflake_results_run_10.csv",
            "snowflake_results_run_2.csv",
            "avg_results.csv",
            "notes.txt",
        ] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let files = list_run_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["snowflake_results_run_2.csv", "snowflake_results_run_10.csv"]
        );
    }

    #[test]
    fn test_list_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(list_run_files(&dir.path().join("nope")).unwrap().is_empty());
    }
}
