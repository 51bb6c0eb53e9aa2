// Query catalog, result store and output parsing for the embench harness

pub mod aggregate;
pub mod catalog;
pub mod compare;
pub mod dbt_output;
pub mod error;
pub mod layout;
pub mod record;
pub mod result_file;

pub use aggregate::{aggregate_directory, maybe_aggregate, Aggregate, AverageRow, AveragingPolicy};
pub use catalog::{query_ordinal, resolve, resolve_ddl, Benchmark, ScaleTier, Statement, TableAddressing};
pub use compare::{compare_runs, Comparison};
pub use error::{Error, Result};
pub use layout::{list_run_files, CacheMode, ResultKey, ResultLayout, Warmth};
pub use record::QueryExecutionRecord;
pub use result_file::{load_run, save_run, RunResult, TOTAL_LABEL};
