// Engine sessions, isolation and run orchestration for the embench harness

pub mod client;
pub mod config;
pub mod dbt;
pub mod driver;
pub mod engine;
pub mod error;
pub mod executor;
pub mod isolation;
pub mod prepare;

pub use client::{Connector, RestConnector, SqlSession};
pub use config::Config;
pub use driver::{BenchmarkDriver, RunOptions};
pub use engine::{EngineAdapter, EngineKind, EngineSelection};
pub use error::{Error, Result};
pub use executor::{QueryOutcome, RunExecutor, RunReport};
