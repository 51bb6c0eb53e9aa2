/// Metrics for one completed query, as reported by the engine's own history.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryExecutionRecord {
    pub query_name: String,
    /// Opaque id assigned by the engine
    pub engine_query_id: String,
    pub duration_ms: f64,
    pub rows_produced: u64,
}

impl QueryExecutionRecord {
    pub fn new(
        query_name: impl Into<String>,
        engine_query_id: impl Into<String>,
        duration_ms: f64,
        rows_produced: u64,
    ) -> Self {
        Self {
            query_name: query_name.into(),
            engine_query_id: engine_query_id.into(),
            duration_ms,
            rows_produced,
        }
    }
}

/// Sum of durations, accumulated in record order.
pub fn total_duration_ms(records: &[QueryExecutionRecord]) -> f64 {
    records.iter().fold(0.0, |acc, r| acc + r.duration_ms)
}
