use embench_core::aggregate::{aggregate_directory, maybe_aggregate, AveragingPolicy};
use embench_core::layout::{CacheMode, ResultKey, ResultLayout, Warmth};
use embench_core::{compare_runs, load_run, save_run, Benchmark, QueryExecutionRecord, TOTAL_LABEL};
use std::fs;
use tempfile::TempDir;

fn key() -> ResultKey {
    ResultKey {
        engine: "snowflake".to_string(),
        benchmark: Benchmark::Tpch,
        dataset: "tpch/01".to_string(),
        label: "BENCH_WH".to_string(),
        mode: CacheMode::new(Warmth::Warm, true),
    }
}

fn records(durations: &[f64]) -> Vec<QueryExecutionRecord> {
    durations
        .iter()
        .enumerate()
        .map(|(i, d)| {
            QueryExecutionRecord::new(
                format!("tpch-q{}", i + 1),
                format!("01b2c3-{}", i),
                *d,
                (i as u64 + 1) * 10,
            )
        })
        .collect()
}

#[test]
fn test_save_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let layout = ResultLayout::new(dir.path());
    let path = layout.run_file(&key(), 1);

    let original = records(&[1234.5, 0.1, 0.2, 987654.321]);
    let total = save_run(&path, &original).expect("save");

    let loaded = load_run(&path).expect("load");
    assert_eq!(loaded.records, original);
    assert_eq!(loaded.total_ms, total);

    let sum = loaded
        .records
        .iter()
        .fold(0.0, |acc, r| acc + r.duration_ms);
    assert_eq!(loaded.total_ms, sum);
}

#[test]
fn test_aggregate_all_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let layout = ResultLayout::new(dir.path());
    let k = key();

    save_run(&layout.run_file(&k, 1), &records(&[10.0, 20.0, 30.0])).unwrap();
    save_run(&layout.run_file(&k, 2), &records(&[11.0, 19.5, 33.3])).unwrap();
    save_run(&layout.run_file(&k, 3), &records(&[9.0, 21.0, 27.1])).unwrap();

    let run_dir = layout.directory(&k);
    let first = aggregate_directory(&run_dir, AveragingPolicy::All).unwrap();
    let first_bytes = fs::read(&first.output).unwrap();

    let second = aggregate_directory(&run_dir, AveragingPolicy::All).unwrap();
    let second_bytes = fs::read(&second.output).unwrap();

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first.used_files.len(), 3);

    let text = String::from_utf8(first_bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Query,Total (ms)");
    assert!(lines[1].starts_with("tpch-q1,"));
    assert!(lines.last().unwrap().starts_with("TOTAL,"));
}

#[test]
fn test_trimmed_mean_uses_total_row() {
    let dir = TempDir::new().unwrap();
    let layout = ResultLayout::new(dir.path());
    let k = key();

    // Run 1 has the fastest q1 but the slowest TOTAL; trimming must key on TOTAL.
    save_run(&layout.run_file(&k, 1), &records(&[1.0, 299.0])).unwrap();
    save_run(&layout.run_file(&k, 2), &records(&[50.0, 50.0])).unwrap();
    save_run(&layout.run_file(&k, 3), &records(&[120.0, 80.0])).unwrap();

    let aggregate = aggregate_directory(&layout.directory(&k), AveragingPolicy::TrimExtremes).unwrap();

    assert_eq!(aggregate.total_ms(), Some(200.0));
    assert_eq!(aggregate.used_files, vec![layout.run_file(&k, 3)]);
    assert_eq!(aggregate.rows[0].query, "tpch-q1");
    assert_eq!(aggregate.rows[0].total_ms, 120.0);
}

#[test]
fn test_trimmed_mean_of_three() {
    let dir = TempDir::new().unwrap();
    let layout = ResultLayout::new(dir.path());
    let k = key();

    save_run(&layout.run_file(&k, 1), &records(&[100.0])).unwrap();
    save_run(&layout.run_file(&k, 2), &records(&[300.0])).unwrap();
    save_run(&layout.run_file(&k, 3), &records(&[200.0])).unwrap();

    let aggregate = aggregate_directory(&layout.directory(&k), AveragingPolicy::TrimExtremes).unwrap();
    let total = aggregate
        .rows
        .iter()
        .find(|r| r.query == TOTAL_LABEL)
        .map(|r| r.total_ms);
    assert_eq!(total, Some(200.0));
}

#[test]
fn test_trigger_requires_exact_count() {
    let dir = TempDir::new().unwrap();
    let layout = ResultLayout::new(dir.path());
    let k = key();
    let run_dir = layout.directory(&k);

    save_run(&layout.run_file(&k, 1), &records(&[1.0])).unwrap();
    save_run(&layout.run_file(&k, 2), &records(&[2.0])).unwrap();
    assert!(maybe_aggregate(&run_dir, 3, AveragingPolicy::All).unwrap().is_none());
    assert!(!layout.average_file(&k).exists());

    save_run(&layout.run_file(&k, 3), &records(&[3.0])).unwrap();
    let aggregate = maybe_aggregate(&run_dir, 3, AveragingPolicy::All).unwrap();
    assert_eq!(aggregate.and_then(|a| a.total_ms()), Some(2.0));

    fs::remove_file(layout.average_file(&k)).unwrap();
    save_run(&layout.run_file(&k, 4), &records(&[4.0])).unwrap();
    assert!(maybe_aggregate(&run_dir, 3, AveragingPolicy::All).unwrap().is_none());
    assert!(!layout.average_file(&k).exists());
}

#[test]
fn test_mismatched_files_write_nothing() {
    let dir = TempDir::new().unwrap();
    let layout = ResultLayout::new(dir.path());
    let k = key();

    save_run(&layout.run_file(&k, 1), &records(&[1.0, 2.0])).unwrap();
    save_run(&layout.run_file(&k, 2), &records(&[1.0])).unwrap();

    let result = maybe_aggregate(&layout.directory(&k), 2, AveragingPolicy::All).unwrap();
    assert!(result.is_none());
    assert!(!layout.average_file(&k).exists());
}

#[test]
fn test_comparison_ratios_over_intersection() {
    let warehouse = vec![
        QueryExecutionRecord::new("tpch-q1", "a1", 10.0, 1),
        QueryExecutionRecord::new("tpch-q2", "a2", 20.0, 1),
        QueryExecutionRecord::new("tpch-q3", "a3", 30.0, 1),
        QueryExecutionRecord::new("tpch-q4", "a4", 99.0, 1),
    ];
    let embedded = vec![
        QueryExecutionRecord::new("tpch-q3", "b3", 15.0, 1),
        QueryExecutionRecord::new("tpch-q1", "b1", 5.0, 1),
        QueryExecutionRecord::new("tpch-q2", "b2", 40.0, 1),
    ];

    let rows = compare_runs(&warehouse, &embedded);
    let names: Vec<&str> = rows.iter().map(|r| r.query.as_str()).collect();
    let ratios: Vec<Option<f64>> = rows.iter().map(|r| r.ratio).collect();

    assert_eq!(names, vec!["tpch-q1", "tpch-q2", "tpch-q3"]);
    assert_eq!(ratios, vec![Some(2.0), Some(0.5), Some(2.0)]);
}
