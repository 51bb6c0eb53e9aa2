//! Driver loop against in-memory adapters

use async_trait::async_trait;
use embench::driver::{AdapterFactory, BenchmarkDriver, RunOptions, DEFAULT_AGGREGATE_AFTER};
use embench::engine::{EngineAdapter, EngineKind, EngineSelection, ExecutedQuery};
use embench::isolation::CacheMode;
use embench_core::layout::list_run_files;
use embench_core::{load_run, AveragingPolicy, Benchmark, QueryExecutionRecord, ResultKey, Statement, TableAddressing};
use std::fs;
use tempfile::TempDir;

struct FixedAdapter {
    kind: EngineKind,
    per_query_ms: f64,
}

#[async_trait]
impl EngineAdapter for FixedAdapter {
    fn kind(&self) -> EngineKind {
        self.kind
    }

    fn label(&self) -> &str {
        match self.kind {
            EngineKind::Warehouse => "BENCH_WH",
            EngineKind::Embedded => "c7i.4xlarge",
        }
    }

    async fn prepare(&mut self) -> embench::Result<()> {
        Ok(())
    }

    async fn before_query(&mut self) -> embench::Result<()> {
        Ok(())
    }

    async fn execute(&mut self, statement: &Statement) -> embench::Result<String> {
        Ok(format!("{}-{}", self.kind, statement.name))
    }

    async fn fetch_metrics(&mut self, executed: &[ExecutedQuery]) -> embench::Result<Vec<QueryExecutionRecord>> {
        Ok(executed
            .iter()
            .map(|q| QueryExecutionRecord::new(q.name.as_str(), q.query_id.as_str(), self.per_query_ms, 1))
            .collect())
    }

    async fn close(&mut self) -> embench::Result<()> {
        Ok(())
    }
}

struct FixedFactory;

impl AdapterFactory for FixedFactory {
    fn adapter(&self, kind: EngineKind) -> embench::Result<Box<dyn EngineAdapter>> {
        let per_query_ms = match kind {
            EngineKind::Warehouse => 20.0,
            EngineKind::Embedded => 10.0,
        };
        Ok(Box::new(FixedAdapter { kind, per_query_ms }))
    }

    fn addressing(&self, _kind: EngineKind) -> embench::Result<TableAddressing> {
        Ok(TableAddressing::Bare)
    }
}

fn options(root: &TempDir, runs: u32) -> RunOptions {
    RunOptions {
        selection: EngineSelection::Both,
        benchmark: Benchmark::Tpch,
        dataset: "tpch/01".to_string(),
        runs,
        first_run: 1,
        mode: CacheMode::default(),
        policy: AveragingPolicy::All,
        aggregate_after: DEFAULT_AGGREGATE_AFTER,
        result_root: root.path().to_path_buf(),
        warehouse_sample_data: false,
    }
}

fn key(engine: EngineKind, label: &str) -> ResultKey {
    ResultKey {
        engine: engine.name().to_string(),
        benchmark: Benchmark::Tpch,
        dataset: "tpch/01".to_string(),
        label: label.to_string(),
        mode: CacheMode::default(),
    }
}

#[tokio::test]
async fn test_three_runs_write_runs_and_averages() {
    let root = TempDir::new().unwrap();
    let driver = BenchmarkDriver::new(FixedFactory, options(&root, 3));
    driver.run().await.unwrap();

    let layout = driver.layout();
    let warehouse = key(EngineKind::Warehouse, "BENCH_WH");
    let embedded = key(EngineKind::Embedded, "c7i.4xlarge");

    assert!(layout
        .run_file(&warehouse, 1)
        .ends_with("snowflake_tpch_results/tpch/01/BENCH_WH/warm/snowflake_results_run_1.csv"));
    assert_eq!(list_run_files(&layout.directory(&warehouse)).unwrap().len(), 3);
    assert_eq!(list_run_files(&layout.directory(&embedded)).unwrap().len(), 3);

    let run = load_run(&layout.run_file(&embedded, 2)).unwrap();
    assert_eq!(run.records.len(), 22);
    assert_eq!(run.total_ms, 220.0);

    let averages = fs::read_to_string(layout.average_file(&warehouse)).unwrap();
    assert!(averages.lines().last().unwrap().starts_with("TOTAL,440"));
    assert!(layout.average_file(&embedded).exists());
}

#[tokio::test]
async fn test_fewer_runs_than_trigger_skip_averaging() {
    let root = TempDir::new().unwrap();
    let driver = BenchmarkDriver::new(FixedFactory, options(&root, 2));
    driver.run().await.unwrap();

    let warehouse = key(EngineKind::Warehouse, "BENCH_WH");
    assert_eq!(list_run_files(&driver.layout().directory(&warehouse)).unwrap().len(), 2);
    assert!(!driver.layout().average_file(&warehouse).exists());
}

#[tokio::test]
async fn test_zero_runs_write_nothing() {
    let root = TempDir::new().unwrap();
    let driver = BenchmarkDriver::new(FixedFactory, options(&root, 0));
    driver.run().await.unwrap();

    let warehouse = key(EngineKind::Warehouse, "BENCH_WH");
    assert!(!driver.layout().directory(&warehouse).exists());
    assert!(!root.path().join("snowflake_tpch_results").exists());
}

#[tokio::test]
async fn test_one_run_per_invocation_averages_after_third() {
    let root = TempDir::new().unwrap();
    let embedded = key(EngineKind::Embedded, "c7i.4xlarge");

    for first_run in 1..=3 {
        let driver = BenchmarkDriver::new(
            FixedFactory,
            RunOptions {
                first_run,
                ..options(&root, 1)
            },
        );
        driver.run().await.unwrap();

        let averaged = driver.layout().average_file(&embedded).exists();
        assert_eq!(averaged, first_run == 3, "after run {}", first_run);
    }
}
