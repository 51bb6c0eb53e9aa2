use crate::catalog::compare_by_ordinal;
use crate::record::QueryExecutionRecord;
use std::collections::HashMap;
use std::fmt::Write;

/// Per-query timing of the warehouse engine against the embedded engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub query: String,
    pub warehouse_ms: f64,
    pub embedded_ms: f64,
    /// `warehouse_ms / embedded_ms`; `None` when the embedded time is zero
    pub ratio: Option<f64>,
}

/// Match both result sets by query name. Only queries present on both sides
/// are reported, ordered by query number.
pub fn compare_runs(
    warehouse: &[QueryExecutionRecord],
    embedded: &[QueryExecutionRecord],
) -> Vec<Comparison> {
    let embedded_by_name: HashMap<&str, f64> = embedded
        .iter()
        .map(|r| (r.query_name.as_str(), r.duration_ms))
        .collect();

    let mut rows: Vec<Comparison> = warehouse
        .iter()
        .filter_map(|w| {
            let embedded_ms = *embedded_by_name.get(w.query_name.as_str())?;
            Some(Comparison {
                query: w.query_name.clone(),
                warehouse_ms: w.duration_ms,
                embedded_ms,
                ratio: ratio(w.duration_ms, embedded_ms),
            })
        })
        .collect();

    rows.sort_by(|a, b| compare_by_ordinal(&a.query, &b.query));
    rows
}

fn ratio(warehouse_ms: f64, embedded_ms: f64) -> Option<f64> {
    if embedded_ms > 0.0 {
        Some(warehouse_ms / embedded_ms)
    } else {
        None
    }
}

/// Plain-text table for log output, with a matched-total row.
pub fn format_table(rows: &[Comparison]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<18} {:>14} {:>14} {:>8}",
        "Query", "Warehouse ms", "Embedded ms", "Ratio"
    );

    let (mut w_total, mut e_total) = (0.0, 0.0);
    for row in rows {
        w_total += row.warehouse_ms;
        e_total += row.embedded_ms;
        let _ = writeln!(
            out,
            "{:<18} {:>14.1} {:>14.1} {:>8}",
            row.query,
            row.warehouse_ms,
            row.embedded_ms,
            format_ratio(row.ratio)
        );
    }

    let _ = writeln!(
        out,
        "{:<18} {:>14.1} {:>14.1} {:>8}",
        "TOTAL (matched)",
        w_total,
        e_total,
        format_ratio(ratio(w_total, e_total))
    );
    out
}

fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2}x", r),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_embedded_time_has_no_ratio() {
        let w = vec![QueryExecutionRecord::new("tpch-q1", "a", 10.0, 1)];
        let e = vec![QueryExecutionRecord::new("tpch-q1", "b", 0.0, 1)];
        let rows = compare_runs(&w, &e);
        assert_eq!(rows[0].ratio, None);
        assert!(format_table(&rows).contains("n/a"));
    }

    #[test]
    fn test_table_has_header_and_total() {
        let w = vec![QueryExecutionRecord::new("tpch-q1", "a", 10.0, 1)];
        let e = vec![QueryExecutionRecord::new("tpch-q1", "b", 5.0, 1)];
        let table = format_table(&compare_runs(&w, &e));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Query"));
        assert!(lines[1].ends_with("2.00x"));
        assert!(lines[2].starts_with("TOTAL (matched)"));
    }
}
