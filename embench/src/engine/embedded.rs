//! Embedded engine adapter
//!
//! Warm runs share one session. Cold runs restart the container before each
//! query and open a fresh session for it.
//!
//! The engine's history table does not keep the ids handed out before a
//! restart, so metrics are matched by position instead: the most recent
//! successful history rows are read back and every row's statement text
//! must equal the statement executed at that position.

use super::{parse_number, EngineAdapter, EngineKind, ExecutedQuery};
use crate::client::{Connector, QueryResponse, SqlSession};
use crate::error::{Error, Result};
use crate::isolation::{CacheMode, EngineRestarter};
use async_trait::async_trait;
use embench_core::{QueryExecutionRecord, Statement};

/// Most recent `limit` successful statements, newest first
pub fn history_query(limit: usize) -> String {
    format!(
        "SELECT id, query, duration_ms, result_count \
         FROM slatedb.history.queries \
         WHERE status = 'Successful' \
         ORDER BY start_time DESC \
         LIMIT {}",
        limit
    )
}

pub struct EmbeddedAdapter {
    connector: Box<dyn Connector>,
    restarter: Option<Box<dyn EngineRestarter>>,
    instance: String,
    mode: CacheMode,
    session: Option<Box<dyn SqlSession>>,
}

impl EmbeddedAdapter {
    /// `restarter` is required for cold runs.
    pub fn new(
        connector: Box<dyn Connector>,
        restarter: Option<Box<dyn EngineRestarter>>,
        instance: impl Into<String>,
        mode: CacheMode,
    ) -> Result<Self> {
        if mode.is_cold() && restarter.is_none() {
            return Err(Error::Config(
                "cold runs on the embedded engine need container control".to_string(),
            ));
        }
        Ok(Self {
            connector,
            restarter,
            instance: instance.into(),
            mode,
            session: None,
        })
    }

    async fn close_session(&mut self) {
        if let Some(mut session) = self.session.take() {
            if let Err(e) = session.close().await {
                tracing::warn!(error = %e, "Failed to close embedded session");
            }
        }
    }
}

/// Pair history rows (newest first) with the executed statements
pub fn match_history(
    response: &QueryResponse,
    executed: &[ExecutedQuery],
) -> Result<Vec<QueryExecutionRecord>> {
    if response.rows.len() != executed.len() {
        return Err(Error::MetricsMismatch(format!(
            "expected {} successful history rows, found {}",
            executed.len(),
            response.rows.len()
        )));
    }

    let col = |name: &str| {
        response
            .column_index(name)
            .ok_or_else(|| Error::Protocol(format!("history result has no {} column", name)))
    };
    let id_col = col("id")?;
    let query_col = col("query")?;
    let duration_col = col("duration_ms")?;
    let count_col = col("result_count")?;

    response
        .rows
        .iter()
        .rev()
        .zip(executed)
        .map(|(row, expected)| {
            let cell = move |i: usize| row.get(i).and_then(|c| c.as_deref());
            let text = cell(query_col).unwrap_or_default();
            if text.trim() != expected.sql.trim() {
                return Err(Error::MetricsMismatch(format!(
                    "history row for {} holds a different statement",
                    expected.name
                )));
            }
            let duration_ms = parse_number(cell(duration_col), "duration_ms")?;
            let rows = match cell(count_col) {
                Some(raw) => parse_number(Some(raw), "result_count")? as u64,
                None => 0,
            };
            Ok(QueryExecutionRecord::new(
                expected.name.as_str(),
                cell(id_col).unwrap_or_default(),
                duration_ms,
                rows,
            ))
        })
        .collect()
}

#[async_trait]
impl EngineAdapter for EmbeddedAdapter {
    fn kind(&self) -> EngineKind {
        EngineKind::Embedded
    }

    fn label(&self) -> &str {
        &self.instance
    }

    async fn prepare(&mut self) -> Result<()> {
        if !self.mode.result_cache {
            tracing::debug!("Embedded engine has no result cache toggle; flag ignored");
        }
        if !self.mode.is_cold() {
            self.session = Some(self.connector.connect().await?);
        }
        tracing::info!(instance = %self.instance, mode = %self.mode, "Embedded engine ready");
        Ok(())
    }

    async fn before_query(&mut self) -> Result<()> {
        let Some(restarter) = self.restarter.as_ref().filter(|_| self.mode.is_cold()) else {
            return Ok(());
        };
        restarter.restart().await?;
        self.session = Some(self.connector.connect().await.map_err(|e| {
            Error::Isolation(format!("no session after restart: {}", e))
        })?);
        Ok(())
    }

    async fn execute(&mut self, statement: &Statement) -> Result<String> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| Error::Protocol("embedded session is not open".to_string()))?;
        let result = session.execute(&statement.sql).await;

        if self.mode.is_cold() {
            self.close_session().await;
        }
        Ok(result?.query_id)
    }

    async fn fetch_metrics(&mut self, executed: &[ExecutedQuery]) -> Result<Vec<QueryExecutionRecord>> {
        if executed.is_empty() {
            return Ok(Vec::new());
        }

        let fresh = self.session.is_none();
        if fresh {
            self.session = Some(self.connector.connect().await?);
        }
        let response = match self.session.as_mut() {
            Some(session) => session.execute(&history_query(executed.len())).await,
            None => Err(Error::Protocol("embedded session is not open".to_string())),
        };
        if fresh {
            self.close_session().await;
        }

        match_history(&response?, executed)
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(mut session) = self.session.take() {
            session.close().await?;
        }
        Ok(())
    }
}
