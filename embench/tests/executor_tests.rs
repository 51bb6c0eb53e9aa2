//! Run executor over both adapters, backed by scripted sessions

use async_trait::async_trait;
use embench::client::{Connector, QueryResponse, SqlSession};
use embench::engine::{EmbeddedAdapter, WarehouseAdapter};
use embench::error::{Error, RestartStage};
use embench::executor::{QueryOutcome, RunExecutor};
use embench::isolation::{CacheMode, EngineRestarter, Warmth};
use embench_core::Statement;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Handler = Arc<dyn Fn(&str) -> embench::Result<QueryResponse> + Send + Sync>;

#[derive(Clone)]
struct ScriptedEngine {
    handler: Handler,
    log: Arc<Mutex<Vec<String>>>,
    connects: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
}

impl ScriptedEngine {
    fn new(handler: impl Fn(&str) -> embench::Result<QueryResponse> + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
            log: Arc::new(Mutex::new(Vec::new())),
            connects: Arc::new(AtomicUsize::new(0)),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

struct ScriptedSession {
    engine: ScriptedEngine,
}

#[async_trait]
impl SqlSession for ScriptedSession {
    async fn execute(&mut self, sql: &str) -> embench::Result<QueryResponse> {
        self.engine.log.lock().unwrap().push(sql.to_string());
        (self.engine.handler)(sql)
    }

    async fn close(&mut self) -> embench::Result<()> {
        self.engine.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl Connector for ScriptedEngine {
    async fn connect(&self) -> embench::Result<Box<dyn SqlSession>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedSession {
            engine: self.clone(),
        }))
    }
}

fn ok(sql: &str) -> embench::Result<QueryResponse> {
    Ok(QueryResponse {
        query_id: format!("id:{}", sql),
        ..QueryResponse::default()
    })
}

fn statements(n: usize) -> Vec<Statement> {
    (1..=n)
        .map(|i| Statement {
            name: format!("tpch-q{}", i),
            sql: format!("SELECT {} FROM lineitem", i),
        })
        .collect()
}

/// Embedded history rows, newest first, for the given statements
fn embedded_history(sqls: &[String]) -> QueryResponse {
    QueryResponse {
        query_id: "history".to_string(),
        columns: ["id", "query", "duration_ms", "result_count"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        rows: sqls
            .iter()
            .enumerate()
            .rev()
            .map(|(i, sql)| {
                vec![
                    Some(format!("h{}", i)),
                    Some(sql.clone()),
                    Some(format!("{}", 10 * (i + 1))),
                    Some("4".to_string()),
                ]
            })
            .collect(),
    }
}

fn warm() -> CacheMode {
    CacheMode::new(Warmth::Warm, true)
}

#[tokio::test]
async fn test_embedded_history_matches_statements() {
    let queries = statements(3);
    let sqls: Vec<String> = queries.iter().map(|q| q.sql.clone()).collect();
    let engine = ScriptedEngine::new(move |sql| {
        if sql.contains("slatedb.history.queries") {
            assert!(sql.ends_with("LIMIT 3"));
            Ok(embedded_history(&sqls))
        } else {
            ok(sql)
        }
    });

    let mut adapter = EmbeddedAdapter::new(Box::new(engine.clone()), None, "c7i.4xlarge", warm()).unwrap();
    let report = RunExecutor::run(&mut adapter, &queries).await.unwrap();

    assert!(report.is_complete());
    let names: Vec<&str> = report.records.iter().map(|r| r.query_name.as_str()).collect();
    assert_eq!(names, vec!["tpch-q1", "tpch-q2", "tpch-q3"]);
    assert_eq!(report.total_ms, 60.0);
    assert_eq!(engine.connects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_short_embedded_history_fails_run() {
    let queries = statements(3);
    let sqls: Vec<String> = queries.iter().take(2).map(|q| q.sql.clone()).collect();
    let engine = ScriptedEngine::new(move |sql| {
        if sql.contains("slatedb.history.queries") {
            Ok(embedded_history(&sqls))
        } else {
            ok(sql)
        }
    });

    let mut adapter = EmbeddedAdapter::new(Box::new(engine), None, "c7i.4xlarge", warm()).unwrap();
    let err = RunExecutor::run(&mut adapter, &queries).await.unwrap_err();
    assert!(matches!(err, Error::MetricsMismatch(_)));
}

struct FlakyRestarter {
    calls: AtomicUsize,
    fail_on: usize,
}

#[async_trait]
impl EngineRestarter for FlakyRestarter {
    async fn restart(&self) -> embench::Result<()> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.fail_on {
            return Err(Error::Restart {
                stage: RestartStage::Health,
                message: "not ready".to_string(),
            });
        }
        Ok(())
    }
}

#[tokio::test]
async fn test_cold_embedded_skips_query_when_restart_fails() {
    let queries = statements(3);
    let executed = vec![queries[0].sql.clone(), queries[2].sql.clone()];
    let engine = ScriptedEngine::new(move |sql| {
        if sql.contains("slatedb.history.queries") {
            assert!(sql.ends_with("LIMIT 2"));
            Ok(embedded_history(&executed))
        } else {
            ok(sql)
        }
    });
    let restarter = FlakyRestarter {
        calls: AtomicUsize::new(0),
        fail_on: 2,
    };

    let mut adapter = EmbeddedAdapter::new(
        Box::new(engine.clone()),
        Some(Box::new(restarter)),
        "c7i.4xlarge",
        CacheMode::new(Warmth::Cold, true),
    )
    .unwrap();
    let report = RunExecutor::run(&mut adapter, &queries).await.unwrap();

    assert_eq!(report.executed(), 2);
    assert_eq!(report.skipped(), 1);
    assert!(matches!(report.attempts[1].outcome, QueryOutcome::Skipped { .. }));
    let names: Vec<&str> = report.records.iter().map(|r| r.query_name.as_str()).collect();
    assert_eq!(names, vec!["tpch-q1", "tpch-q3"]);
    // One session per executed query plus one for the history lookup
    assert_eq!(engine.connects.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_cold_embedded_requires_restarter() {
    let engine = ScriptedEngine::new(ok);
    let result = EmbeddedAdapter::new(
        Box::new(engine),
        None,
        "c7i.4xlarge",
        CacheMode::new(Warmth::Cold, true),
    );
    assert!(matches!(result, Err(Error::Config(_))));
}

#[tokio::test]
async fn test_warehouse_partial_run() {
    let queries = statements(3);
    let suspends = Arc::new(AtomicUsize::new(0));
    let counter = suspends.clone();

    let engine = ScriptedEngine::new(move |sql| {
        if sql.ends_with("SUSPEND") && counter.fetch_add(1, Ordering::SeqCst) == 1 {
            return Err(Error::query("warehouse cannot be suspended"));
        }
        if sql == "SELECT 3 FROM lineitem" {
            return Err(Error::query("division by zero"));
        }
        if sql.contains("QUERY_HISTORY") {
            assert!(sql.contains("('id:SELECT 1 FROM lineitem')"));
            return Ok(QueryResponse {
                query_id: "history".to_string(),
                columns: vec![
                    "QUERY_ID".to_string(),
                    "TOTAL_ELAPSED_TIME".to_string(),
                    "ROWS_PRODUCED".to_string(),
                ],
                rows: vec![vec![
                    Some("id:SELECT 1 FROM lineitem".to_string()),
                    Some("812".to_string()),
                    None,
                ]],
            });
        }
        ok(sql)
    });

    let mut adapter = WarehouseAdapter::new(
        Box::new(engine.clone()),
        "BENCH_WH",
        CacheMode::new(Warmth::Cold, false),
    );
    let report = RunExecutor::run(&mut adapter, &queries).await.unwrap();

    assert!(matches!(report.attempts[0].outcome, QueryOutcome::Executed { .. }));
    assert!(matches!(report.attempts[1].outcome, QueryOutcome::Skipped { .. }));
    assert!(matches!(report.attempts[2].outcome, QueryOutcome::Failed { .. }));
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].query_name, "tpch-q1");
    assert_eq!(report.records[0].duration_ms, 812.0);
    assert_eq!(report.records[0].rows_produced, 0);
    assert_eq!(report.total_ms, 812.0);

    let log = engine.log();
    assert_eq!(log[0], "ALTER SESSION SET USE_CACHED_RESULT = FALSE");
    assert_eq!(log[1], "ALTER WAREHOUSE BENCH_WH RESUME IF SUSPENDED");
    assert_eq!(
        &log[2..6],
        &[
            "ALTER WAREHOUSE BENCH_WH SUSPEND".to_string(),
            "SELECT SYSTEM$WAIT(2)".to_string(),
            "ALTER WAREHOUSE BENCH_WH RESUME".to_string(),
            "SELECT 1 FROM lineitem".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_warm_warehouse_issues_no_isolation() {
    let queries = statements(2);
    let engine = ScriptedEngine::new(|sql| {
        if sql.contains("QUERY_HISTORY") {
            Ok(QueryResponse {
                query_id: "history".to_string(),
                columns: vec![
                    "QUERY_ID".to_string(),
                    "TOTAL_ELAPSED_TIME".to_string(),
                    "ROWS_PRODUCED".to_string(),
                ],
                rows: Vec::new(),
            })
        } else {
            ok(sql)
        }
    });

    let mut adapter = WarehouseAdapter::new(Box::new(engine.clone()), "BENCH_WH", warm());
    RunExecutor::run(&mut adapter, &queries).await.unwrap();

    let log = engine.log();
    assert_eq!(log[0], "ALTER SESSION SET USE_CACHED_RESULT = TRUE");
    assert!(!log.iter().any(|sql| sql.contains("ALTER WAREHOUSE")));
}

#[tokio::test]
async fn test_rejected_session_setup_closes_session() {
    let engine = ScriptedEngine::new(|sql| {
        if sql.starts_with("ALTER SESSION") {
            Err(Error::query("insufficient privileges"))
        } else {
            ok(sql)
        }
    });

    let mut adapter = WarehouseAdapter::new(Box::new(engine.clone()), "BENCH_WH", warm());
    let err = RunExecutor::run(&mut adapter, &statements(2)).await.unwrap_err();

    assert!(matches!(err, Error::Query { .. }));
    assert_eq!(engine.connects.load(Ordering::SeqCst), 1);
    assert_eq!(engine.closes.load(Ordering::SeqCst), 1);
    assert_eq!(engine.log().len(), 1);
}
