//! Table creation and parquet loading on the embedded engine.

use crate::client::SqlSession;
use crate::error::Result;
use embench_core::{resolve_ddl, Benchmark, TableAddressing};

pub const DEFAULT_DATA_BUCKET: &str = "s3://embucket-testdata";

/// `COPY INTO` for one table; parquet files are named after bare tables
pub fn copy_statement(qualified: &str, bucket: &str, dataset: &str, table: &str) -> String {
    format!(
        "COPY INTO {} FROM '{}/{}/{}.parquet' FILE_FORMAT = (TYPE = PARQUET)",
        qualified,
        bucket.trim_end_matches('/'),
        dataset.trim_matches('/'),
        table
    )
}

/// Create every table of the family, then load each one from the bucket.
///
/// Stops at the first failing statement.
pub async fn prepare_tables(
    session: &mut dyn SqlSession,
    benchmark: Benchmark,
    addressing: &TableAddressing,
    bucket: &str,
    dataset: &str,
) -> Result<()> {
    for ddl in resolve_ddl(benchmark, addressing)? {
        tracing::info!(table = %ddl.name, "Creating table");
        session.execute(&ddl.sql).await?;
    }

    for table in benchmark.tables() {
        let qualified = addressing.qualify(table.table);
        tracing::info!(table = %qualified, "Loading data");
        session
            .execute(&copy_statement(&qualified, bucket, dataset, table.table))
            .await?;
    }

    tracing::info!(benchmark = %benchmark, dataset, "Data preparation completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_statement() {
        assert_eq!(
            copy_statement("db.public.lineitem", "s3://embucket-testdata/", "/tpch/01/", "lineitem"),
            "COPY INTO db.public.lineitem FROM 's3://embucket-testdata/tpch/01/lineitem.parquet' \
             FILE_FORMAT = (TYPE = PARQUET)"
        );
    }
}
