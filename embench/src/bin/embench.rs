use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use embench::client::{Connector, RestConnector};
use embench::config::Config;
use embench::dbt::{load_dbt_results, DbtRunContext};
use embench::driver::{BenchmarkDriver, ConfiguredAdapters, RunOptions, DEFAULT_AGGREGATE_AFTER};
use embench::engine::{EngineKind, EngineSelection};
use embench::isolation::{
    CacheMode, ContainerManager, EngineRestarter, HealthProbe, RestartPolicy, SshShell, Warmth,
};
use embench::prepare::{prepare_tables, DEFAULT_DATA_BUCKET};
use embench_core::compare::format_table;
use embench_core::{aggregate_directory, compare_runs, load_run, AveragingPolicy, Benchmark, TableAddressing};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "embench", version, about = "Warehouse vs embedded engine benchmark harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the benchmark and store per-run results
    Run {
        /// `snowflake`, `embucket` or `both`
        #[arg(long, env = "EMBENCH_ENGINE", default_value = "both")]
        engine: EngineSelection,

        #[arg(long, env = "BENCHMARK_TYPE", default_value = "tpch")]
        benchmark: Benchmark,

        /// Dataset path, e.g. `tpch/01`
        #[arg(long, env = "DATASET_PATH")]
        dataset_path: String,

        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
        runs: u32,

        /// Ordinal of the first run, to extend an existing series
        #[arg(long, default_value_t = 1)]
        first_run: u32,

        /// Suspend or restart the engine before every query
        #[arg(long)]
        cold: bool,

        /// Disable the warehouse result cache
        #[arg(long)]
        no_result_cache: bool,

        /// `all` or `trim-extremes`
        #[arg(long, default_value = "all")]
        policy: AveragingPolicy,

        /// Run file count that triggers averaging, counted across invocations
        #[arg(long, default_value_t = DEFAULT_AGGREGATE_AFTER)]
        aggregate_after: usize,

        #[arg(long, default_value = "result")]
        result_dir: PathBuf,

        /// Query TPC-H from the warehouse's built-in sample database
        #[arg(long)]
        warehouse_sample_data: bool,
    },

    /// Average the run files of one result directory
    Aggregate {
        #[arg(long)]
        dir: PathBuf,

        #[arg(long, default_value = "all")]
        policy: AveragingPolicy,
    },

    /// Compare a warehouse run file with an embedded run file
    Compare {
        #[arg(long)]
        warehouse: PathBuf,

        #[arg(long)]
        embedded: PathBuf,
    },

    /// Create tables on the embedded engine and load them from parquet
    Prepare {
        #[arg(long, env = "BENCHMARK_TYPE", default_value = "tpch")]
        benchmark: Benchmark,

        #[arg(long, env = "DATASET_PATH")]
        dataset_path: String,

        #[arg(long, env = "DATA_BUCKET", default_value = DEFAULT_DATA_BUCKET)]
        bucket: String,
    },

    /// Control the embedded engine's container
    Container {
        #[command(subcommand)]
        action: ContainerAction,
    },

    /// Load a dbt run log into the results table
    DbtResults {
        /// dbt console output
        log_file: PathBuf,

        rows_generated: u64,

        /// `true` for an incremental dbt run
        is_incremental: String,

        #[arg(default_value = "snowflake")]
        target: EngineKind,

        #[arg(default_value = "manual")]
        run_type: String,

        /// SQL file with `COUNT(*)` queries replacing the built-in list
        #[arg(long)]
        count_sql: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ContainerAction {
    Status,
    Restart,
    Logs {
        #[arg(long, default_value_t = 100)]
        lines: u32,
    },
    Cleanup,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            engine,
            benchmark,
            dataset_path,
            runs,
            first_run,
            cold,
            no_result_cache,
            policy,
            aggregate_after,
            result_dir,
            warehouse_sample_data,
        } => {
            let config = Config::from_env(&engine.engines())?;
            let warmth = if cold { Warmth::Cold } else { Warmth::Warm };
            let options = RunOptions {
                selection: engine,
                benchmark,
                dataset: dataset_path,
                runs,
                first_run,
                mode: CacheMode::new(warmth, !no_result_cache),
                policy,
                aggregate_after,
                result_root: result_dir,
                warehouse_sample_data,
            };
            tracing::info!(
                benchmark = %options.benchmark,
                dataset = %options.dataset,
                mode = %options.mode,
                runs = options.runs,
                "Starting benchmark"
            );
            let factory = ConfiguredAdapters::new(config, &options);
            BenchmarkDriver::new(factory, options).run().await?;
        }

        Command::Aggregate { dir, policy } => {
            let aggregate = aggregate_directory(&dir, policy)
                .with_context(|| format!("aggregating {}", dir.display()))?;
            tracing::info!(
                path = %aggregate.output.display(),
                files = aggregate.used_files.len(),
                total_ms = aggregate.total_ms().unwrap_or_default(),
                "Wrote averages"
            );
        }

        Command::Compare { warehouse, embedded } => {
            let warehouse = load_run(&warehouse)?;
            let embedded = load_run(&embedded)?;
            let rows = compare_runs(&warehouse.records, &embedded.records);
            tracing::info!("Comparison (warehouse / embedded):\n{}", format_table(&rows));
        }

        Command::Prepare {
            benchmark,
            dataset_path,
            bucket,
        } => {
            let config = Config::from_env(&[EngineKind::Embedded])?;
            let embedded = config.embedded()?;
            let addressing = TableAddressing::Qualified {
                database: embedded.connection.database.clone(),
                schema: embedded.connection.schema.clone(),
            };
            let connector = RestConnector::new(embedded.connection.clone())?;
            let mut session = connector.connect().await?;
            let prepared =
                prepare_tables(session.as_mut(), benchmark, &addressing, &bucket, &dataset_path).await;
            session.close().await?;
            prepared?;
        }

        Command::Container { action } => {
            let config = Config::from_env(&[EngineKind::Embedded])?;
            let embedded = config.embedded()?;
            let policy = RestartPolicy::default();
            let manager = ContainerManager::new(
                Box::new(SshShell::new(embedded.remote.clone())),
                &embedded.remote,
                HealthProbe::new(&embedded.health_url, policy.health_timeout)?,
                policy,
            );
            match action {
                ContainerAction::Status => tracing::info!("\n{}", manager.status().await?),
                ContainerAction::Restart => {
                    manager.restart().await?;
                    tracing::info!("Embedded engine restarted and healthy");
                }
                ContainerAction::Logs { lines } => tracing::info!("\n{}", manager.logs(lines).await?),
                ContainerAction::Cleanup => manager.cleanup().await?,
            }
        }

        Command::DbtResults {
            log_file,
            rows_generated,
            is_incremental,
            target,
            run_type,
            count_sql,
        } => {
            let mut engines = vec![EngineKind::Warehouse];
            if target == EngineKind::Embedded {
                engines.push(EngineKind::Embedded);
            }
            let config = Config::from_env(&engines)?;
            let ctx = DbtRunContext {
                rows_generated,
                is_incremental: is_incremental.eq_ignore_ascii_case("true"),
                target,
                run_type,
            };
            let run_id = load_dbt_results(&config, &log_file, &ctx, count_sql.as_deref())
                .await
                .with_context(|| format!("loading {}", log_file.display()))?;
            tracing::info!(run_id = %run_id, "dbt results loaded");
        }
    }

    Ok(())
}
