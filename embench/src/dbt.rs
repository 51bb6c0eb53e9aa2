//! Loads parsed dbt run results into the warehouse and attaches per-model
//! row counts taken from the engine the dbt project ran against.
//!
//! Results are always stored on the warehouse engine, whichever engine was
//! the dbt target.

use crate::client::{Connector, RestConnector, SqlSession};
use crate::config::Config;
use crate::engine::EngineKind;
use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use embench_core::dbt_output::{parse_count_queries, parse_dbt_output, DbtOutput, ModelRun};
use std::path::Path;

pub const RESULTS_TABLE: &str = "dbt_snowplow_results_models";

const MANIFEST_SCHEMA: &str = "PUBLIC_SNOWPLOW_MANIFEST_SNOWPLOW_MANIFEST";
const SCRATCH_SCHEMA: &str = "PUBLIC_SNOWPLOW_MANIFEST_SCRATCH";
const DERIVED_SCHEMA: &str = "PUBLIC_SNOWPLOW_MANIFEST_DERIVED";

/// Seeds and incremental manifests
const MANIFEST_TABLES: &[&str] = &[
    "snowplow_web_dim_ga4_source_categories",
    "snowplow_web_dim_geo_country_mapping",
    "snowplow_web_dim_rfc_5646_language_mapping",
    "snowplow_web_base_quarantined_sessions",
    "snowplow_web_incremental_manifest",
    "snowplow_web_base_sessions_lifecycle_manifest",
];

const SCRATCH_TABLES: &[&str] = &[
    "snowplow_web_base_new_event_limits",
    "snowplow_web_base_sessions_this_run",
    "snowplow_web_base_events_this_run",
    "snowplow_web_consent_events_this_run",
    "snowplow_web_pv_engaged_time",
    "snowplow_web_pv_scroll_depth",
    "snowplow_web_sessions_this_run",
    "snowplow_web_vital_events_this_run",
    "snowplow_web_page_views_this_run",
    "snowplow_web_vitals_this_run",
    "snowplow_web_users_sessions_this_run",
    "snowplow_web_users_aggs",
    "snowplow_web_users_lasts",
    "snowplow_web_users_this_run",
];

const DERIVED_TABLES: &[&str] = &[
    "snowplow_web_user_mapping",
    "snowplow_web_consent_log",
    "snowplow_web_sessions",
    "snowplow_web_page_views",
    "snowplow_web_consent_cmp_stats",
    "snowplow_web_consent_versions",
    "snowplow_web_vitals",
    "snowplow_web_consent_users",
    "snowplow_web_vital_measurements",
    "snowplow_web_consent_scope_status",
    "snowplow_web_consent_totals",
    "snowplow_web_users",
];

const CREATE_RESULTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS dbt_snowplow_results_models (
    id INTEGER AUTOINCREMENT PRIMARY KEY,
    timestamp TIMESTAMP_NTZ,
    model_name STRING,
    model_type STRING,
    result STRING,
    duration_seconds FLOAT,
    rows_affected INTEGER,
    order_sequence STRING,
    target STRING,
    run_id STRING,
    dbt_version STRING,
    adapter_type STRING,
    total_models INTEGER,
    pass_count INTEGER,
    warn_count INTEGER,
    error_count INTEGER,
    skip_count INTEGER,
    number_of_rows_generated INTEGER,
    is_incremental_run BOOLEAN,
    row_count INTEGER,
    run_type STRING DEFAULT 'manual',
    downloaded_at TIMESTAMP_NTZ DEFAULT CURRENT_TIMESTAMP()
)";

/// Invocation details that are not part of the dbt console output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbtRunContext {
    pub rows_generated: u64,
    pub is_incremental: bool,
    /// Engine the dbt project ran against
    pub target: EngineKind,
    pub run_type: String,
}

/// Row count of one dbt-built table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowCount {
    pub table_name: String,
    pub row_count: u64,
}

pub fn run_id(at: NaiveDateTime) -> String {
    at.format("run_%Y%m%d_%H%M%S").to_string()
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn timestamp(at: NaiveDateTime) -> String {
    format!("TO_TIMESTAMP_NTZ({})", quote(&at.format("%Y-%m-%d %H:%M:%S%.6f").to_string()))
}

/// `COUNT(*)` statements for every table of the Snowplow web package
pub fn default_count_queries() -> Vec<String> {
    [
        (MANIFEST_SCHEMA, MANIFEST_TABLES),
        (SCRATCH_SCHEMA, SCRATCH_TABLES),
        (DERIVED_SCHEMA, DERIVED_TABLES),
    ]
    .iter()
    .flat_map(|(schema, tables)| {
        tables.iter().map(move |table| {
            let qualified = format!("{}.{}", schema, table);
            format!(
                "SELECT '{}' AS table_name, COUNT(*) AS row_count FROM {}",
                qualified, qualified
            )
        })
    })
    .collect()
}

pub fn insert_statement(
    output: &DbtOutput,
    model: &ModelRun,
    ctx: &DbtRunContext,
    run_id: &str,
    at: NaiveDateTime,
) -> String {
    let s = &output.summary;
    let ts = timestamp(at);
    format!(
        "INSERT INTO {} (timestamp, model_name, model_type, result, duration_seconds, \
         rows_affected, order_sequence, target, run_id, dbt_version, adapter_type, total_models, \
         pass_count, warn_count, error_count, skip_count, number_of_rows_generated, \
         is_incremental_run, row_count, run_type, downloaded_at) \
         VALUES ({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, NULL, {}, {})",
        RESULTS_TABLE,
        ts,
        quote(&model.model_name),
        quote(model.model_type.as_str()),
        quote(model.result.as_str()),
        model.duration_seconds,
        model.rows_affected,
        quote(&model.order),
        quote(ctx.target.name()),
        quote(run_id),
        quote(&s.dbt_version),
        quote(&s.adapter_type),
        s.total_models,
        s.pass_count,
        s.warn_count,
        s.error_count,
        s.skip_count,
        ctx.rows_generated,
        if ctx.is_incremental { "TRUE" } else { "FALSE" },
        quote(&ctx.run_type),
        ts,
    )
}

pub fn update_statement(count: &TableRowCount, target: EngineKind, run_id: &str) -> String {
    format!(
        "UPDATE {} SET row_count = {} WHERE model_name = {} AND target = {} AND run_id = {}",
        RESULTS_TABLE,
        count.row_count,
        quote(&count.table_name.to_lowercase()),
        quote(target.name()),
        quote(run_id)
    )
}

/// Create the results table if needed and insert one row per model.
///
/// Returns the run id shared by every inserted row.
///
/// # Errors
/// Returns error if any insert fails or if the number of stored rows for
/// the run does not match the number of parsed models.
pub async fn store_results(
    store: &mut dyn SqlSession,
    output: &DbtOutput,
    ctx: &DbtRunContext,
    at: NaiveDateTime,
) -> Result<String> {
    store.execute(CREATE_RESULTS_TABLE).await?;

    let run_id = run_id(at);
    for model in &output.models {
        store
            .execute(&insert_statement(output, model, ctx, &run_id, at))
            .await
            .map_err(|e| Error::query(format!("insert for {} failed: {}", model.model_name, e)))?;
    }

    let verify = format!("SELECT COUNT(*) FROM {} WHERE run_id = {}", RESULTS_TABLE, quote(&run_id));
    let stored: usize = store
        .execute(&verify)
        .await?
        .scalar()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0);
    if stored != output.models.len() {
        return Err(Error::Protocol(format!(
            "stored {} rows for {}, expected {}",
            stored,
            run_id,
            output.models.len()
        )));
    }

    tracing::info!(run_id = %run_id, models = stored, target = %ctx.target, "Stored dbt results");
    Ok(run_id)
}

/// Run each count query; tables that do not exist are logged and skipped.
pub async fn count_rows(session: &mut dyn SqlSession, queries: &[String]) -> Vec<TableRowCount> {
    let mut counts = Vec::with_capacity(queries.len());
    for query in queries {
        let response = match session.execute(query).await {
            Ok(response) => response,
            Err(e) => {
                let table = query
                    .split("FROM")
                    .nth(1)
                    .and_then(|rest| rest.split_whitespace().next())
                    .unwrap_or("unknown");
                tracing::warn!(table, error = %e, "Skipping table");
                continue;
            }
        };

        let row = response.rows.first();
        let table_name = row.and_then(|r| r.first()).and_then(|c| c.clone());
        let row_count = row
            .and_then(|r| r.get(1))
            .and_then(|c| c.as_deref())
            .and_then(|v| v.trim().parse::<u64>().ok());

        match (table_name, row_count) {
            (Some(table_name), Some(row_count)) => {
                tracing::debug!(table = %table_name, row_count, "Counted rows");
                counts.push(TableRowCount { table_name, row_count });
            }
            _ => tracing::warn!(query = %query, "Count query returned no result"),
        }
    }

    tracing::info!(counted = counts.len(), skipped = queries.len() - counts.len(), "Counted table rows");
    counts
}

pub async fn update_row_counts(
    store: &mut dyn SqlSession,
    counts: &[TableRowCount],
    target: EngineKind,
    run_id: &str,
) -> Result<()> {
    for count in counts {
        store.execute(&update_statement(count, target, run_id)).await?;
    }
    tracing::info!(models = counts.len(), "Updated row counts");
    Ok(())
}

/// Parse a dbt log file and load it, with row counts, into the warehouse.
///
/// `count_sql` replaces the built-in list of count queries.
pub async fn load_dbt_results(
    config: &Config,
    log_file: &Path,
    ctx: &DbtRunContext,
    count_sql: Option<&Path>,
) -> Result<String> {
    let text = std::fs::read_to_string(log_file)?;
    let output = parse_dbt_output(&text);
    tracing::info!(
        models = output.models.len(),
        dbt_version = %output.summary.dbt_version,
        "Parsed dbt output"
    );

    let queries = match count_sql {
        Some(path) => parse_count_queries(&std::fs::read_to_string(path)?),
        None => default_count_queries(),
    };

    let warehouse = RestConnector::new(config.warehouse()?.connection.clone())?;
    let mut store = warehouse.login().await?;

    let at = chrono::Local::now().naive_local();
    let run_id = store_results(&mut store, &output, ctx, at).await?;

    let counts = match ctx.target {
        EngineKind::Warehouse => count_rows(&mut store, &queries).await,
        EngineKind::Embedded => {
            let embedded = RestConnector::new(config.embedded()?.connection.clone())?;
            let mut session = embedded.connect().await?;
            let counts = count_rows(session.as_mut(), &queries).await;
            session.close().await?;
            counts
        }
    };

    update_row_counts(&mut store, &counts, ctx.target, &run_id).await?;
    store.close().await?;
    Ok(run_id)
}
