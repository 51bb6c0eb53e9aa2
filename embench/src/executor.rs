//! Sequential execution of one catalog against one engine.

use crate::engine::{EngineAdapter, ExecutedQuery};
use crate::error::Result;
use embench_core::record::total_duration_ms;
use embench_core::{QueryExecutionRecord, Statement};

/// What happened to one catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Executed { query_id: String },
    /// Isolation before the query failed; the query was not sent
    Skipped { reason: String },
    /// The engine rejected the statement or the connection dropped
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAttempt {
    pub name: String,
    pub outcome: QueryOutcome,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// One entry per catalog statement, in catalog order
    pub attempts: Vec<QueryAttempt>,
    pub records: Vec<QueryExecutionRecord>,
    pub total_ms: f64,
}

impl RunReport {
    pub fn executed(&self) -> usize {
        self.count(|o| matches!(o, QueryOutcome::Executed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, QueryOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, QueryOutcome::Failed { .. }))
    }

    pub fn is_complete(&self) -> bool {
        self.executed() == self.attempts.len()
    }

    fn count(&self, pred: impl Fn(&QueryOutcome) -> bool) -> usize {
        self.attempts.iter().filter(|a| pred(&a.outcome)).count()
    }
}

pub struct RunExecutor;

impl RunExecutor {
    /// Run every statement in order, then fetch metrics in one batch.
    ///
    /// Isolation failures skip the query and statement errors are recorded;
    /// neither stops the run. A failing metrics lookup fails the run, which
    /// is how a history mismatch on the embedded engine surfaces.
    ///
    /// # Errors
    /// Returns error if the adapter cannot prepare its session or if
    /// metrics cannot be retrieved and attributed.
    pub async fn run(adapter: &mut dyn EngineAdapter, queries: &[Statement]) -> Result<RunReport> {
        let engine = adapter.kind();
        if let Err(e) = adapter.prepare().await {
            if let Err(close_err) = adapter.close().await {
                tracing::warn!(engine = %engine, error = %close_err, "Failed to close session");
            }
            return Err(e);
        }

        let mut attempts = Vec::with_capacity(queries.len());
        let mut executed = Vec::with_capacity(queries.len());

        for (i, statement) in queries.iter().enumerate() {
            tracing::info!(
                engine = %engine,
                query = %statement.name,
                "Executing query {}/{}",
                i + 1,
                queries.len()
            );

            if let Err(e) = adapter.before_query().await {
                tracing::warn!(query = %statement.name, error = %e, "Isolation failed; skipping query");
                attempts.push(QueryAttempt {
                    name: statement.name.clone(),
                    outcome: QueryOutcome::Skipped {
                        reason: e.to_string(),
                    },
                });
                continue;
            }

            let outcome = match adapter.execute(statement).await {
                Ok(query_id) => {
                    executed.push(ExecutedQuery {
                        name: statement.name.clone(),
                        sql: statement.sql.clone(),
                        query_id: query_id.clone(),
                    });
                    QueryOutcome::Executed { query_id }
                }
                Err(e) => {
                    tracing::error!(query = %statement.name, error = %e, "Query failed");
                    QueryOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            attempts.push(QueryAttempt {
                name: statement.name.clone(),
                outcome,
            });
        }

        let metrics = adapter.fetch_metrics(&executed).await;
        if let Err(e) = adapter.close().await {
            tracing::warn!(engine = %engine, error = %e, "Failed to close session");
        }
        let records = metrics?;

        let report = RunReport {
            total_ms: total_duration_ms(&records),
            attempts,
            records,
        };
        tracing::info!(
            engine = %engine,
            executed = report.executed(),
            skipped = report.skipped(),
            failed = report.failed(),
            total_ms = report.total_ms,
            "Run finished"
        );
        Ok(report)
    }
}
