//! Parser for dbt console output (`dbt run` / `dbt seed` logs).
//!
//! Extracts the run header (dbt version, adapter), the `Done.` summary
//! counts and one entry per model line. Lines that do not look like model
//! results are ignored.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelType {
    Seed,
    Incremental,
    Table,
    Model,
    Skipped,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Seed => "seed",
            ModelType::Incremental => "incremental",
            ModelType::Table => "table",
            ModelType::Model => "model",
            ModelType::Skipped => "skipped",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelResult {
    Success,
    Create,
    Ok,
    Error,
    Skip,
}

impl ModelResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelResult::Success => "SUCCESS",
            ModelResult::Create => "CREATE",
            ModelResult::Ok => "OK",
            ModelResult::Error => "ERROR",
            ModelResult::Skip => "SKIP",
        }
    }
}

impl fmt::Display for ModelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header and `Done.` line of one dbt invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub dbt_version: String,
    pub adapter_type: String,
    pub total_models: u32,
    pub pass_count: u32,
    pub warn_count: u32,
    pub error_count: u32,
    pub skip_count: u32,
}

impl Default for RunSummary {
    fn default() -> Self {
        Self {
            dbt_version: "unknown".to_string(),
            adapter_type: "unknown".to_string(),
            total_models: 0,
            pass_count: 0,
            warn_count: 0,
            error_count: 0,
            skip_count: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelRun {
    pub model_name: String,
    pub model_type: ModelType,
    pub result: ModelResult,
    pub duration_seconds: f64,
    pub rows_affected: u64,
    /// `"3 of 12"`, or `"unknown"`
    pub order: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DbtOutput {
    pub summary: RunSummary,
    pub models: Vec<ModelRun>,
}

struct Patterns {
    ansi: Regex,
    version: Regex,
    adapter: Regex,
    counts: Regex,
    order: Regex,
    model_name: Regex,
    duration: Regex,
    rows: Regex,
    relation: Regex,
    duration_split: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let re = |p: &str| Regex::new(p).expect("static regex");
        Patterns {
            ansi: re(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])"),
            version: re(r"dbt=([\d.]+)"),
            adapter: re(r"adapter type: (\w+)"),
            counts: re(r"PASS=(\d+) WARN=(\d+) ERROR=(\d+) SKIP=(\d+) TOTAL=(\d+)"),
            order: re(r"(\d+ of \d+)"),
            model_name: re(r"(sql \w+ model|seed file) ([^\s]+)"),
            duration: re(r"(\d+\.?\d*[ms]?)\s*\]"),
            rows: re(r"\[(SUCCESS|CREATE) (\d+)"),
            relation: re(r"relation ([^\s]+)"),
            duration_split: re(r"[ms]"),
        }
    })
}

/// Convert a dbt duration (`1m 30s`, `2m`, `2.5s`, `12.3`) to seconds.
///
/// Unparseable input counts as zero.
pub fn parse_duration(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    let number = |part: &str| part.trim().parse::<f64>().unwrap_or(0.0);

    if s.contains('m') {
        let parts: Vec<&str> = patterns().duration_split.split(s).collect();
        let minutes = parts.first().map(|p| number(p)).unwrap_or(0.0);
        let seconds = if parts.len() >= 3 { number(parts[1]) } else { 0.0 };
        minutes * 60.0 + seconds
    } else if s.contains('s') {
        number(&s.replace('s', ""))
    } else {
        number(s)
    }
}

// A trailing-space line followed by a `[...]` continuation is one logical line.
fn join_wrapped_lines(text: &str) -> Vec<String> {
    let raw: Vec<&str> = text.split('\n').collect();
    let mut joined = Vec::with_capacity(raw.len());

    let mut i = 0;
    while i < raw.len() {
        let line = raw[i].trim_start().trim_end_matches('\r');
        if line.ends_with(' ') && i + 1 < raw.len() && raw[i + 1].trim().starts_with('[') {
            joined.push(format!("{}{}", line, raw[i + 1].trim()).trim().to_string());
            i += 2;
        } else {
            joined.push(line.trim().to_string());
            i += 1;
        }
    }

    joined
}

fn capture<'a>(re: &Regex, line: &'a str, group: usize) -> Option<&'a str> {
    re.captures(line)
        .and_then(|c| c.get(group))
        .map(|m| m.as_str())
}

fn parse_summary(lines: &[String]) -> RunSummary {
    let p = patterns();
    let mut summary = RunSummary::default();

    for line in lines {
        if line.contains("Running with dbt=") {
            if let Some(v) = capture(&p.version, line, 1) {
                summary.dbt_version = v.to_string();
            }
        }
        if line.contains("adapter type:") {
            if let Some(a) = capture(&p.adapter, line, 1) {
                summary.adapter_type = a.to_string();
            }
        }
        if line.contains("Done. PASS=") {
            if let Some(c) = p.counts.captures(line) {
                let n = |i: usize| c.get(i).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
                summary.pass_count = n(1);
                summary.warn_count = n(2);
                summary.error_count = n(3);
                summary.skip_count = n(4);
                summary.total_models = n(5);
            }
        }
    }

    summary
}

fn parse_model_line(line: &str) -> Option<ModelRun> {
    let p = patterns();
    let bracketed = line.contains('[') && line.contains(']');

    let order = capture(&p.order, line, 1).unwrap_or("unknown").to_string();
    let model_name = || {
        capture(&p.model_name, line, 2)
            .unwrap_or("unknown")
            .to_string()
    };
    let duration = || parse_duration(capture(&p.duration, line, 1).unwrap_or("0s"));

    if line.contains("OK") && (line.contains("model") || line.contains("seed")) && bracketed {
        let rows_affected = capture(&p.rows, line, 2)
            .and_then(|r| r.parse().ok())
            .unwrap_or(0);

        let result = if line.contains("SUCCESS") {
            ModelResult::Success
        } else if line.contains("CREATE") {
            ModelResult::Create
        } else {
            ModelResult::Ok
        };

        let model_type = if line.contains("seed file") {
            ModelType::Seed
        } else if line.contains("incremental model") {
            ModelType::Incremental
        } else if line.contains("table model") {
            ModelType::Table
        } else {
            ModelType::Model
        };

        return Some(ModelRun {
            model_name: model_name(),
            model_type,
            result,
            duration_seconds: duration(),
            rows_affected,
            order,
        });
    }

    if line.contains("ERROR") && line.contains("model") && bracketed {
        return Some(ModelRun {
            model_name: model_name(),
            model_type: ModelType::Table,
            result: ModelResult::Error,
            duration_seconds: duration(),
            rows_affected: 0,
            order,
        });
    }

    if line.contains("SKIP") && line.contains("relation") {
        return Some(ModelRun {
            model_name: capture(&p.relation, line, 1)
                .unwrap_or("unknown")
                .to_string(),
            model_type: ModelType::Skipped,
            result: ModelResult::Skip,
            duration_seconds: 0.0,
            rows_affected: 0,
            order,
        });
    }

    None
}

pub fn parse_dbt_output(text: &str) -> DbtOutput {
    let clean = patterns().ansi.replace_all(text, "");
    let lines = join_wrapped_lines(&clean);

    let summary = parse_summary(&lines);
    let models = lines.iter().filter_map(|l| parse_model_line(l)).collect();

    DbtOutput { summary, models }
}

/// Split a `count_table_rows.sql`-style file into single-line `COUNT(*)`
/// statements. Each statement starts at a `SELECT ... COUNT(*)` line and
/// ends at its `FROM` line; `UNION ALL` separators and comments are dropped.
pub fn parse_count_queries(sql: &str) -> Vec<String> {
    let mut queries = Vec::new();
    let mut current: Option<String> = None;

    for line in sql.lines().map(str::trim) {
        if line.starts_with("SELECT") && line.contains("COUNT(*)") {
            current = Some(line.to_string());
        } else if line.starts_with("FROM") {
            if let Some(mut q) = current.take() {
                q.push(' ');
                q.push_str(line);
                queries.push(q);
            }
        } else if let Some(q) = current.as_mut() {
            if !line.is_empty() && !line.starts_with("UNION ALL") && !line.starts_with("--") {
                q.push(' ');
                q.push_str(line);
            }
        }
    }

    queries
}
