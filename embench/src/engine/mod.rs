//! Engine adapters: one per engine, selected by [`EngineKind`].
//!
//! An adapter owns its session(s) and its isolation controller. The run
//! executor only sees the [`EngineAdapter`] capability set.

pub mod embedded;
pub mod warehouse;

use crate::error::{Error, Result};
use async_trait::async_trait;
use embench_core::{QueryExecutionRecord, Statement};
use std::fmt;
use std::str::FromStr;

pub use embedded::EmbeddedAdapter;
pub use warehouse::WarehouseAdapter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// Cloud warehouse, isolated by suspend/resume
    Warehouse,
    /// Engine under test, isolated by container restart
    Embedded,
}

impl EngineKind {
    /// Name used on the command line and in result paths
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Warehouse => "snowflake",
            EngineKind::Embedded => "embucket",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snowflake" | "warehouse" => Ok(EngineKind::Warehouse),
            "embucket" | "embedded" => Ok(EngineKind::Embedded),
            other => Err(Error::Config(format!("unknown engine '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSelection {
    Single(EngineKind),
    Both,
}

impl EngineSelection {
    /// Engines in execution order; the embedded engine runs first.
    pub fn engines(&self) -> Vec<EngineKind> {
        match self {
            EngineSelection::Single(kind) => vec![*kind],
            EngineSelection::Both => vec![EngineKind::Embedded, EngineKind::Warehouse],
        }
    }
}

impl FromStr for EngineSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("both") {
            Ok(EngineSelection::Both)
        } else {
            Ok(EngineSelection::Single(s.parse()?))
        }
    }
}

/// A statement the engine accepted, with the id it assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedQuery {
    pub name: String,
    pub sql: String,
    pub query_id: String,
}

#[async_trait]
pub trait EngineAdapter: Send {
    fn kind(&self) -> EngineKind;

    /// Warehouse name or instance name; part of the result path
    fn label(&self) -> &str;

    /// Open sessions and apply session settings before the first query
    async fn prepare(&mut self) -> Result<()>;

    /// Bring the engine into the requested cache state for the next query
    async fn before_query(&mut self) -> Result<()>;

    /// Run one statement to completion and return the engine's query id
    async fn execute(&mut self, statement: &Statement) -> Result<String>;

    /// Retrieve engine-reported metrics for the executed statements in one
    /// batched history lookup
    async fn fetch_metrics(&mut self, executed: &[ExecutedQuery]) -> Result<Vec<QueryExecutionRecord>>;

    async fn close(&mut self) -> Result<()>;
}

/// Parse a numeric history cell; engines report integers or decimals as text
pub(crate) fn parse_number(cell: Option<&str>, column: &str) -> Result<f64> {
    let raw = cell.ok_or_else(|| Error::Protocol(format!("history column {} is null", column)))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|e| Error::Protocol(format!("history column {} = '{}': {}", column, raw, e)))
}
