use serde::{Deserialize, Serialize};

/// One row of the `health_metrics` relation. Extra columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSampleDto {
    pub created_at: String, // ISO-8601 as returned by the store
    pub score: f64,         // fraction in [0, 1]
    pub status: String,
    pub api_key: String,
}

/// One chart point, already rescaled for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub display_time: String, // local HH:MM:SS
    pub score_percent: f64,   // score * 100, unrounded
}
