//! Benchmark driver: runs × engines, persisting every run and averaging once
//! a configuration has collected its runs.

use crate::client::RestConnector;
use crate::config::Config;
use crate::engine::{EmbeddedAdapter, EngineAdapter, EngineKind, EngineSelection, WarehouseAdapter};
use crate::error::{Error, Result};
use crate::executor::{RunExecutor, RunReport};
use crate::isolation::{CacheMode, ContainerManager, EngineRestarter, HealthProbe, RestartPolicy, SshShell};
use embench_core::compare::format_table;
use embench_core::{
    compare_runs, maybe_aggregate, resolve, save_run, AveragingPolicy, Benchmark, ResultKey,
    ResultLayout, ScaleTier, TableAddressing,
};
use std::path::PathBuf;

/// Run file count that triggers averaging unless overridden
pub const DEFAULT_AGGREGATE_AFTER: usize = 3;

/// Everything a benchmark invocation is parameterised by
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub selection: EngineSelection,
    pub benchmark: Benchmark,
    /// Dataset path, e.g. `tpch/01`; also names the result directory
    pub dataset: String,
    pub runs: u32,
    /// Ordinal of the first run, for continuing an existing series
    pub first_run: u32,
    pub mode: CacheMode,
    pub policy: AveragingPolicy,
    /// Average a configuration once exactly this many run files exist
    pub aggregate_after: usize,
    pub result_root: PathBuf,
    /// Read TPC-H from the warehouse's built-in sample database
    pub warehouse_sample_data: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            selection: EngineSelection::Both,
            benchmark: Benchmark::Tpch,
            dataset: "tpch/01".to_string(),
            runs: 3,
            first_run: 1,
            mode: CacheMode::default(),
            policy: AveragingPolicy::All,
            aggregate_after: DEFAULT_AGGREGATE_AFTER,
            result_root: PathBuf::from("result"),
            warehouse_sample_data: false,
        }
    }
}

/// Creates a fresh adapter per engine and run
pub trait AdapterFactory: Send + Sync {
    fn adapter(&self, kind: EngineKind) -> Result<Box<dyn EngineAdapter>>;

    fn addressing(&self, kind: EngineKind) -> Result<TableAddressing>;
}

/// Builds adapters from the environment configuration
pub struct ConfiguredAdapters {
    config: Config,
    mode: CacheMode,
    dataset: String,
    warehouse_sample_data: bool,
    restart_policy: RestartPolicy,
}

impl ConfiguredAdapters {
    pub fn new(config: Config, options: &RunOptions) -> Self {
        Self {
            config,
            mode: options.mode,
            dataset: options.dataset.clone(),
            warehouse_sample_data: options.warehouse_sample_data,
            restart_policy: RestartPolicy::default(),
        }
    }

    pub fn with_restart_policy(mut self, policy: RestartPolicy) -> Self {
        self.restart_policy = policy;
        self
    }

    fn restarter(&self) -> Result<Box<dyn EngineRestarter>> {
        let embedded = self.config.embedded()?;
        let health = HealthProbe::new(&embedded.health_url, self.restart_policy.health_timeout)?;
        Ok(Box::new(ContainerManager::new(
            Box::new(SshShell::new(embedded.remote.clone())),
            &embedded.remote,
            health,
            self.restart_policy,
        )))
    }
}

impl AdapterFactory for ConfiguredAdapters {
    fn adapter(&self, kind: EngineKind) -> Result<Box<dyn EngineAdapter>> {
        match kind {
            EngineKind::Warehouse => {
                let warehouse = self.config.warehouse()?;
                let connector = RestConnector::new(warehouse.connection.clone())?;
                Ok(Box::new(WarehouseAdapter::new(
                    Box::new(connector),
                    warehouse.warehouse_name(),
                    self.mode,
                )))
            }
            EngineKind::Embedded => {
                let embedded = self.config.embedded()?;
                let connector = RestConnector::new(embedded.connection.clone())?;
                let restarter = if self.mode.is_cold() {
                    Some(self.restarter()?)
                } else {
                    None
                };
                Ok(Box::new(EmbeddedAdapter::new(
                    Box::new(connector),
                    restarter,
                    embedded.instance.clone(),
                    self.mode,
                )?))
            }
        }
    }

    fn addressing(&self, kind: EngineKind) -> Result<TableAddressing> {
        match kind {
            EngineKind::Warehouse if self.warehouse_sample_data => {
                Ok(TableAddressing::SampleData(ScaleTier::from_dataset_path(&self.dataset)?))
            }
            // The warehouse session already points at its database and schema
            EngineKind::Warehouse => Ok(TableAddressing::Bare),
            EngineKind::Embedded => {
                let embedded = self.config.embedded()?;
                Ok(TableAddressing::Qualified {
                    database: embedded.connection.database.clone(),
                    schema: embedded.connection.schema.clone(),
                })
            }
        }
    }
}

pub struct BenchmarkDriver<F> {
    factory: F,
    options: RunOptions,
    layout: ResultLayout,
}

impl<F: AdapterFactory> BenchmarkDriver<F> {
    pub fn new(factory: F, options: RunOptions) -> Self {
        let layout = ResultLayout::new(options.result_root.clone());
        Self {
            factory,
            options,
            layout,
        }
    }

    pub fn layout(&self) -> &ResultLayout {
        &self.layout
    }

    /// Execute every requested run on every selected engine.
    ///
    /// # Errors
    /// Stops at the first engine run that fails as a whole, such as a
    /// history mismatch or an unwritable result file.
    pub async fn run(&self) -> Result<()> {
        let opts = &self.options;
        let engines = opts.selection.engines();
        if opts.runs == 0 {
            tracing::warn!("No runs requested");
            return Ok(());
        }
        let last_run = opts.first_run.checked_add(opts.runs - 1).ok_or_else(|| {
            Error::Config(format!(
                "run range starting at {} with {} runs overflows",
                opts.first_run, opts.runs
            ))
        })?;

        for run in opts.first_run..=last_run {
            tracing::info!(run, of = last_run, benchmark = %opts.benchmark, "Starting run");

            let mut warehouse_report = None;
            let mut embedded_report = None;
            for &kind in &engines {
                let report = self.run_engine(kind, run).await?;
                match kind {
                    EngineKind::Warehouse => warehouse_report = Some(report),
                    EngineKind::Embedded => embedded_report = Some(report),
                }
            }

            if let (Some(w), Some(e)) = (&warehouse_report, &embedded_report) {
                let rows = compare_runs(&w.records, &e.records);
                tracing::info!("Run {} comparison (warehouse / embedded):\n{}", run, format_table(&rows));
            }
        }
        Ok(())
    }

    async fn run_engine(&self, kind: EngineKind, run: u32) -> Result<RunReport> {
        let opts = &self.options;
        let statements = resolve(opts.benchmark, &self.factory.addressing(kind)?)?;
        let mut adapter = self.factory.adapter(kind)?;

        let report = RunExecutor::run(adapter.as_mut(), &statements).await?;
        if !report.is_complete() {
            tracing::warn!(
                engine = %kind,
                executed = report.executed(),
                requested = statements.len(),
                "Run is incomplete"
            );
        }

        let key = ResultKey {
            engine: kind.name().to_string(),
            benchmark: opts.benchmark,
            dataset: opts.dataset.clone(),
            label: adapter.label().to_string(),
            mode: opts.mode,
        };
        let path = self.layout.run_file(&key, run);
        let total = save_run(&path, &report.records)?;
        tracing::info!(path = %path.display(), total_ms = total, "Saved run results");

        if let Some(aggregate) = maybe_aggregate(&self.layout.directory(&key), opts.aggregate_after, opts.policy)? {
            tracing::info!(
                path = %aggregate.output.display(),
                files = aggregate.used_files.len(),
                policy = %opts.policy,
                "Wrote averages"
            );
        }
        Ok(report)
    }
}
