//! Query catalog: static statement sets per benchmark family, plus the
//! table-name binding that turns `{PLACEHOLDER}` templates into runnable SQL.

pub mod clickbench;
pub mod template;
pub mod tpcds;
pub mod tpch;

use crate::error::{Error, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub use template::{fill, placeholders, TableBindings};

/// A named query template
#[derive(Debug, Clone, Copy)]
pub struct QueryDefinition {
    pub name: &'static str,
    pub sql: &'static str,
}

/// Maps a placeholder token to the bare table name it stands for
#[derive(Debug, Clone, Copy)]
pub struct TableDefinition {
    pub placeholder: &'static str,
    pub table: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DdlDefinition {
    pub table: &'static str,
    pub sql: &'static str,
}

/// A resolved, runnable statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub name: String,
    pub sql: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Benchmark {
    Tpch,
    Tpcds,
    Clickbench,
}

impl Benchmark {
    pub const ALL: [Benchmark; 3] = [Benchmark::Tpch, Benchmark::Tpcds, Benchmark::Clickbench];

    pub fn as_str(&self) -> &'static str {
        match self {
            Benchmark::Tpch => "tpch",
            Benchmark::Tpcds => "tpcds",
            Benchmark::Clickbench => "clickbench",
        }
    }

    pub fn tables(&self) -> &'static [TableDefinition] {
        match self {
            Benchmark::Tpch => tpch::TABLES,
            Benchmark::Tpcds => tpcds::TABLES,
            Benchmark::Clickbench => clickbench::TABLES,
        }
    }

    pub fn queries(&self) -> &'static [QueryDefinition] {
        match self {
            Benchmark::Tpch => tpch::QUERIES,
            Benchmark::Tpcds => tpcds::QUERIES,
            Benchmark::Clickbench => clickbench::QUERIES,
        }
    }

    pub fn ddl(&self) -> &'static [DdlDefinition] {
        match self {
            Benchmark::Tpch => tpch::DDL,
            Benchmark::Tpcds => tpcds::DDL,
            Benchmark::Clickbench => clickbench::DDL,
        }
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Benchmark {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tpch" => Ok(Benchmark::Tpch),
            "tpcds" => Ok(Benchmark::Tpcds),
            "clickbench" => Ok(Benchmark::Clickbench),
            other => Err(Error::Unsupported(format!("benchmark type '{}'", other))),
        }
    }
}

/// Built-in sample-data scale tiers available on the warehouse engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleTier {
    Sf1,
    Sf10,
    Sf100,
    Sf1000,
}

impl ScaleTier {
    /// Snap a requested scale factor down to the nearest available tier.
    ///
    /// This is an approximation: 50 maps to SF10, never to SF100.
    pub fn snap(scale_factor: u64) -> Self {
        match scale_factor {
            n if n >= 1000 => ScaleTier::Sf1000,
            n if n >= 100 => ScaleTier::Sf100,
            n if n >= 10 => ScaleTier::Sf10,
            _ => ScaleTier::Sf1,
        }
    }

    /// Derive the tier from a dataset path like `tpch/010`.
    ///
    /// The second path segment holds the scale factor; leading zeros are
    /// stripped (an all-zero segment means 1). A path without a second
    /// segment falls back to SF1.
    pub fn from_dataset_path(path: &str) -> Result<Self> {
        let segment = match path.split('/').nth(1) {
            Some(s) => s.trim(),
            None => return Ok(ScaleTier::Sf1),
        };

        let digits = segment.trim_start_matches('0');
        let digits = if digits.is_empty() { "1" } else { digits };

        let scale_factor = digits.parse::<u64>().map_err(|e| Error::InvalidDatasetPath {
            path: path.to_string(),
            reason: format!("scale segment '{}' is not a number: {}", segment, e),
        })?;

        Ok(Self::snap(scale_factor))
    }

    pub fn factor(&self) -> u32 {
        match self {
            ScaleTier::Sf1 => 1,
            ScaleTier::Sf10 => 10,
            ScaleTier::Sf100 => 100,
            ScaleTier::Sf1000 => 1000,
        }
    }

    /// Schema holding this tier inside the sample database, e.g. `TPCH_SF10`
    pub fn schema_name(&self) -> String {
        format!("TPCH_SF{}", self.factor())
    }
}

pub const SAMPLE_DATABASE: &str = "SNOWFLAKE_SAMPLE_DATA";

/// How table placeholders are bound to concrete references
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAddressing {
    /// `lineitem`
    Bare,
    /// `database.schema.lineitem`
    Qualified { database: String, schema: String },
    /// `SNOWFLAKE_SAMPLE_DATA.TPCH_SF10.lineitem`
    SampleData(ScaleTier),
}

impl TableAddressing {
    pub fn qualify(&self, table: &str) -> String {
        match self {
            TableAddressing::Bare => table.to_string(),
            TableAddressing::Qualified { database, schema } => {
                format!("{}.{}.{}", database, schema, table)
            }
            TableAddressing::SampleData(tier) => {
                format!("{}.{}.{}", SAMPLE_DATABASE, tier.schema_name(), table)
            }
        }
    }
}

/// Build the placeholder bindings for one family under one addressing mode.
pub fn bindings(benchmark: Benchmark, addressing: &TableAddressing) -> Result<TableBindings> {
    if matches!(addressing, TableAddressing::SampleData(_)) && benchmark != Benchmark::Tpch {
        return Err(Error::Unsupported(format!(
            "built-in sample data addressing for {}",
            benchmark
        )));
    }

    Ok(benchmark
        .tables()
        .iter()
        .map(|t| (t.placeholder.to_string(), addressing.qualify(t.table)))
        .collect())
}

/// Materialize the family's queries, in catalog order.
pub fn resolve(benchmark: Benchmark, addressing: &TableAddressing) -> Result<Vec<Statement>> {
    let bindings = bindings(benchmark, addressing)?;
    benchmark
        .queries()
        .iter()
        .map(|q| {
            Ok(Statement {
                name: q.name.to_string(),
                sql: fill(q.sql, &bindings)?.trim().to_string(),
            })
        })
        .collect()
}

/// Materialize the family's DDL; each statement is named after its table.
pub fn resolve_ddl(benchmark: Benchmark, addressing: &TableAddressing) -> Result<Vec<Statement>> {
    if matches!(addressing, TableAddressing::SampleData(_)) {
        return Err(Error::Unsupported(
            "DDL against read-only sample data".to_string(),
        ));
    }

    let bindings = bindings(benchmark, addressing)?;
    benchmark
        .ddl()
        .iter()
        .map(|d| {
            Ok(Statement {
                name: d.table.to_string(),
                sql: fill(d.sql, &bindings)?.trim().to_string(),
            })
        })
        .collect()
}

fn ordinal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"q(\d+)").expect("static regex"))
}

/// Query number encoded in a name (`tpch-q7` -> 7)
pub fn query_ordinal(name: &str) -> Option<u32> {
    ordinal_regex()
        .captures(name)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Order by query number; names without one sort after all numbered names.
pub fn compare_by_ordinal(a: &str, b: &str) -> Ordering {
    match (query_ordinal(a), query_ordinal(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_addressing() -> Vec<TableAddressing> {
        vec![
            TableAddressing::Bare,
            TableAddressing::Qualified {
                database: "bench".to_string(),
                schema: "public".to_string(),
            },
        ]
    }

    #[test]
    fn test_resolved_queries_have_no_placeholders() {
        for benchmark in Benchmark::ALL {
            for addressing in all_addressing() {
                let statements = resolve(benchmark, &addressing).unwrap();
                assert_eq!(statements.len(), benchmark.queries().len());
                for s in &statements {
                    assert!(
                        placeholders(&s.sql).is_empty(),
                        "{} still has placeholders",
                        s.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_resolved_ddl_has_no_placeholders() {
        for benchmark in Benchmark::ALL {
            let ddl = resolve_ddl(benchmark, &TableAddressing::Bare).unwrap();
            assert_eq!(ddl.len(), benchmark.tables().len());
            for s in &ddl {
                assert!(placeholders(&s.sql).is_empty(), "{}", s.name);
                assert!(s.sql.starts_with("CREATE OR REPLACE TABLE"));
            }
        }
    }

    #[test]
    fn test_every_placeholder_has_a_table() {
        for benchmark in Benchmark::ALL {
            let known: HashSet<&str> = benchmark.tables().iter().map(|t| t.placeholder).collect();
            for q in benchmark.queries() {
                for p in placeholders(q.sql) {
                    assert!(known.contains(p), "{} uses unbound {}", q.name, p);
                }
            }
        }
    }

    #[test]
    fn test_query_names_unique_and_numbered() {
        for benchmark in Benchmark::ALL {
            let mut seen = HashSet::new();
            for q in benchmark.queries() {
                assert!(seen.insert(q.name), "duplicate {}", q.name);
                assert!(q.name.starts_with(benchmark.as_str()));
                assert!(query_ordinal(q.name).is_some(), "{} has no ordinal", q.name);
            }
        }
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(tpch::QUERIES.len(), 22);
        assert_eq!(tpch::TABLES.len(), 8);
        assert_eq!(clickbench::QUERIES.len(), 43);
        assert_eq!(tpcds::TABLES.len(), 24);
    }

    #[test]
    fn test_qualified_addressing() {
        let addressing = TableAddressing::Qualified {
            database: "embucket".to_string(),
            schema: "public".to_string(),
        };
        let statements = resolve(Benchmark::Tpch, &addressing).unwrap();
        assert!(statements[0].sql.contains("embucket.public.lineitem"));
    }

    #[test]
    fn test_sample_data_addressing() {
        let tier = ScaleTier::from_dataset_path("tpch/100").unwrap();
        let statements = resolve(Benchmark::Tpch, &TableAddressing::SampleData(tier)).unwrap();
        assert!(statements[0]
            .sql
            .contains("SNOWFLAKE_SAMPLE_DATA.TPCH_SF100.lineitem"));

        assert!(matches!(
            resolve(Benchmark::Clickbench, &TableAddressing::SampleData(tier)),
            Err(Error::Unsupported(_))
        ));
        assert!(resolve_ddl(Benchmark::Tpch, &TableAddressing::SampleData(tier)).is_err());
    }

    #[test]
    fn test_statements_are_trimmed() {
        let statements = resolve(Benchmark::Tpch, &TableAddressing::Bare).unwrap();
        for s in statements {
            assert_eq!(s.sql, s.sql.trim());
        }
    }

    #[test]
    fn test_scale_tier_from_dataset_path() {
        assert_eq!(ScaleTier::from_dataset_path("tpch/010").unwrap(), ScaleTier::Sf10);
        assert_eq!(ScaleTier::from_dataset_path("tpch/01").unwrap(), ScaleTier::Sf1);
        assert_eq!(ScaleTier::from_dataset_path("tpch/000").unwrap(), ScaleTier::Sf1);
        assert_eq!(ScaleTier::from_dataset_path("tpch/50").unwrap(), ScaleTier::Sf10);
        assert_eq!(ScaleTier::from_dataset_path("tpch/100").unwrap(), ScaleTier::Sf100);
        assert_eq!(ScaleTier::from_dataset_path("tpch/3000").unwrap(), ScaleTier::Sf1000);
        assert_eq!(ScaleTier::from_dataset_path("tpch").unwrap(), ScaleTier::Sf1);
        assert_eq!(ScaleTier::Sf10.schema_name(), "TPCH_SF10");
    }

    #[test]
    fn test_scale_tier_rejects_non_numeric() {
        let err = ScaleTier::from_dataset_path("tpch/sf10").unwrap_err();
        assert!(matches!(err, Error::InvalidDatasetPath { .. }));
    }

    #[test]
    fn test_query_ordinal() {
        assert_eq!(query_ordinal("tpch-q1"), Some(1));
        assert_eq!(query_ordinal("tpcds-q96"), Some(96));
        assert_eq!(query_ordinal("clickbench-q43"), Some(43));
        assert_eq!(query_ordinal("warmup"), None);
    }

    #[test]
    fn test_compare_by_ordinal() {
        let mut names = vec!["tpch-q10", "misc", "tpch-q2", "tpch-q1"];
        names.sort_by(|a, b| compare_by_ordinal(a, b));
        assert_eq!(names, vec!["tpch-q1", "tpch-q2", "tpch-q10", "misc"]);
    }

    #[test]
    fn test_benchmark_parse() {
        assert_eq!("TPCH".parse::<Benchmark>().unwrap(), Benchmark::Tpch);
        assert_eq!("clickbench".parse::<Benchmark>().unwrap(), Benchmark::Clickbench);
        assert!("tpcx".parse::<Benchmark>().is_err());
    }
}
