//! Warehouse engine adapter
//!
//! Cold runs suspend and resume the warehouse before each query. The result
//! cache is a separate session flag, so both axes combine freely.

use super::{parse_number, EngineAdapter, EngineKind, ExecutedQuery};
use crate::client::{Connector, SqlSession};
use crate::error::{Error, Result};
use crate::isolation::CacheMode;
use async_trait::async_trait;
use embench_core::{QueryExecutionRecord, Statement};
use std::collections::HashMap;

/// Upper bound on rows scanned from the history table function
const HISTORY_RESULT_LIMIT: u32 = 1000;

/// Seconds the warehouse stays suspended before it is resumed
const SUSPEND_SETTLE_SECS: u32 = 2;

pub struct WarehouseAdapter {
    connector: Box<dyn Connector>,
    warehouse: String,
    mode: CacheMode,
    session: Option<Box<dyn SqlSession>>,
}

impl WarehouseAdapter {
    pub fn new(connector: Box<dyn Connector>, warehouse: impl Into<String>, mode: CacheMode) -> Self {
        Self {
            connector,
            warehouse: warehouse.into(),
            mode,
            session: None,
        }
    }

    fn session(&mut self) -> Result<&mut Box<dyn SqlSession>> {
        self.session
            .as_mut()
            .ok_or_else(|| Error::Protocol("warehouse session is not open".to_string()))
    }

    async fn suspend_and_resume(&mut self) -> Result<()> {
        let suspend = format!("ALTER WAREHOUSE {} SUSPEND", self.warehouse);
        let wait = format!("SELECT SYSTEM$WAIT({})", SUSPEND_SETTLE_SECS);
        let resume = format!("ALTER WAREHOUSE {} RESUME", self.warehouse);

        let session = self.session()?;
        for sql in [&suspend, &wait, &resume] {
            session.execute(sql).await?;
        }
        Ok(())
    }
}

/// Build the batched history lookup for a set of query ids
pub fn history_query(query_ids: &[&str]) -> String {
    let ids = query_ids
        .iter()
        .map(|id| format!("'{}'", id.replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "SELECT QUERY_ID, TOTAL_ELAPSED_TIME, ROWS_PRODUCED \
         FROM TABLE(SNOWFLAKE.INFORMATION_SCHEMA.QUERY_HISTORY(RESULT_LIMIT => {})) \
         WHERE QUERY_ID IN ({}) \
         ORDER BY START_TIME",
        HISTORY_RESULT_LIMIT, ids
    )
}

#[async_trait]
impl EngineAdapter for WarehouseAdapter {
    fn kind(&self) -> EngineKind {
        EngineKind::Warehouse
    }

    fn label(&self) -> &str {
        &self.warehouse
    }

    async fn prepare(&mut self) -> Result<()> {
        let session = self.connector.connect().await?;
        self.session = Some(session);

        let cache_flag = if self.mode.result_cache { "TRUE" } else { "FALSE" };
        let use_cache = format!("ALTER SESSION SET USE_CACHED_RESULT = {}", cache_flag);
        self.session()?.execute(&use_cache).await?;

        if self.mode.is_cold() {
            // A suspend against an already suspended warehouse fails
            let resume = format!("ALTER WAREHOUSE {} RESUME IF SUSPENDED", self.warehouse);
            self.session()?.execute(&resume).await?;
        }

        tracing::info!(
            warehouse = %self.warehouse,
            mode = %self.mode,
            "Warehouse session ready"
        );
        Ok(())
    }

    async fn before_query(&mut self) -> Result<()> {
        if !self.mode.is_cold() {
            return Ok(());
        }
        self.suspend_and_resume().await.map_err(|e| {
            Error::Isolation(format!(
                "suspend/resume of warehouse {} failed: {}",
                self.warehouse, e
            ))
        })
    }

    async fn execute(&mut self, statement: &Statement) -> Result<String> {
        let response = self.session()?.execute(&statement.sql).await?;
        if response.query_id.is_empty() {
            return Err(Error::Protocol(format!(
                "no query id returned for {}",
                statement.name
            )));
        }
        Ok(response.query_id)
    }

    async fn fetch_metrics(&mut self, executed: &[ExecutedQuery]) -> Result<Vec<QueryExecutionRecord>> {
        if executed.is_empty() {
            return Ok(Vec::new());
        }

        let names: HashMap<&str, &str> = executed
            .iter()
            .map(|q| (q.query_id.as_str(), q.name.as_str()))
            .collect();
        let ids: Vec<&str> = executed.iter().map(|q| q.query_id.as_str()).collect();

        let response = self.session()?.execute(&history_query(&ids)).await?;

        let id_col = column(&response, "QUERY_ID")?;
        let elapsed_col = column(&response, "TOTAL_ELAPSED_TIME")?;
        let rows_col = column(&response, "ROWS_PRODUCED")?;

        let mut records = Vec::with_capacity(executed.len());
        for row in &response.rows {
            let Some(query_id) = row.get(id_col).and_then(|c| c.as_deref()) else {
                continue;
            };
            let Some(name) = names.get(query_id) else {
                tracing::warn!(query_id, "History returned an unknown query id");
                continue;
            };
            let duration_ms = parse_number(row.get(elapsed_col).and_then(|c| c.as_deref()), "TOTAL_ELAPSED_TIME")?;
            // ROWS_PRODUCED is null for statements without a result set
            let rows = match row.get(rows_col).and_then(|c| c.as_deref()) {
                Some(raw) => parse_number(Some(raw), "ROWS_PRODUCED")? as u64,
                None => 0,
            };
            records.push(QueryExecutionRecord::new(*name, query_id, duration_ms, rows));
        }

        if records.len() < executed.len() {
            tracing::warn!(
                expected = executed.len(),
                found = records.len(),
                "Query history is missing some executed queries"
            );
        }

        Ok(records)
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(mut session) = self.session.take() {
            session.close().await?;
        }
        Ok(())
    }
}

fn column(response: &crate::client::QueryResponse, name: &str) -> Result<usize> {
    response
        .column_index(name)
        .ok_or_else(|| Error::Protocol(format!("history result has no {} column", name)))
}
