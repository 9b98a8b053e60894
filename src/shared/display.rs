use std::fmt;

use crate::shared::types::{HistoryPoint, MetricSampleDto};
use crate::utils::format::{format_score_percent, format_time_of_day};

/// Samples plotted, and rows requested per fetch.
pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    /// Nothing fetched yet.
    #[default]
    Waiting,
    /// The store answered with zero rows for the key.
    NoData,
    /// The last fetch failed; history is the last known good one for the key.
    Error,
    /// Status column of the newest sample.
    Reported(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Waiting => "waiting",
            Status::NoData => "nodata",
            Status::Error => "error",
            Status::Reported(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the health card renders. Replaced as one value per fetch so
/// score, status and history never disagree with each other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayState {
    api_key: String, // key the score and history were fetched for
    latest_score: Option<f64>,
    status: Status,
    history: Vec<HistoryPoint>,
    last_error: Option<String>,
}

impl DisplayState {
    /// Builds the state from rows ordered newest first. Rows past
    /// [`HISTORY_LIMIT`] are ignored; an empty slice yields the `nodata` state.
    pub fn from_samples(rows: &[MetricSampleDto]) -> Self {
        let rows = &rows[..rows.len().min(HISTORY_LIMIT)];
        let Some(newest) = rows.first() else {
            return Self {
                status: Status::NoData,
                ..Self::default()
            };
        };
        let history = rows
            .iter()
            .rev()
            .map(|row| HistoryPoint {
                display_time: format_time_of_day(&row.created_at),
                score_percent: row.score * 100.0,
            })
            .collect();
        Self {
            api_key: String::new(),
            latest_score: Some(newest.score),
            status: Status::Reported(newest.status.clone()),
            history,
            last_error: None,
        }
    }

    /// Folds the result of a fetch for `api_key` into the state.
    ///
    /// Success replaces everything. Failure flips the status to `error`; the
    /// last known good score and history stay on screen only if they belong
    /// to the same key.
    pub fn apply(&mut self, api_key: &str, result: Result<Vec<MetricSampleDto>, String>) {
        match result {
            Ok(rows) => {
                *self = Self::from_samples(&rows);
                self.api_key = api_key.to_string();
            }
            Err(e) => {
                if self.api_key != api_key {
                    *self = Self::default();
                    self.api_key = api_key.to_string();
                }
                self.status = Status::Error;
                self.last_error = Some(e);
            }
        }
    }

    /// Key the shown data was fetched for; empty before the first response.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn latest_score(&self) -> Option<f64> {
        self.latest_score
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn history(&self) -> &[HistoryPoint] {
        &self.history
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Big number text, e.g. `92%` or `--`.
    pub fn readout(&self) -> String {
        format_score_percent(self.latest_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(created_at: &str, score: f64, status: &str) -> MetricSampleDto {
        MetricSampleDto {
            created_at: created_at.to_string(),
            score,
            status: status.to_string(),
            api_key: "sk_test_123".to_string(),
        }
    }

    fn scenario() -> Vec<MetricSampleDto> {
        vec![
            sample("2024-05-01T10:00:04Z", 0.92, "healthy"),
            sample("2024-05-01T10:00:02Z", 0.81, "healthy"),
            sample("2024-05-01T10:00:00Z", 0.40, "critical"),
        ]
    }

    #[test]
    fn starts_waiting_with_placeholder() {
        let state = DisplayState::default();
        assert_eq!(state.status(), &Status::Waiting);
        assert_eq!(state.status().as_str(), "waiting");
        assert_eq!(state.readout(), "--");
        assert!(state.history().is_empty());
    }

    #[test]
    fn three_row_scenario() {
        let rows = scenario();
        let state = DisplayState::from_samples(&rows);

        assert_eq!(state.latest_score(), Some(0.92));
        assert_eq!(state.status().as_str(), "healthy");
        assert_eq!(state.readout(), "92%");

        let times: Vec<_> = state.history().iter().map(|p| p.display_time.clone()).collect();
        assert_eq!(
            times,
            vec![
                format_time_of_day("2024-05-01T10:00:00Z"),
                format_time_of_day("2024-05-01T10:00:02Z"),
                format_time_of_day("2024-05-01T10:00:04Z"),
            ]
        );
        let percents: Vec<_> = state
            .history()
            .iter()
            .map(|p| p.score_percent.round() as i64)
            .collect();
        assert_eq!(percents, vec![40, 81, 92]);
    }

    #[test]
    fn history_is_reverse_of_rows_and_input_untouched() {
        let rows = scenario();
        let before = rows.clone();
        let state = DisplayState::from_samples(&rows);

        assert_eq!(rows, before);
        for (point, row) in state.history().iter().zip(rows.iter().rev()) {
            assert_eq!(point.score_percent, row.score * 100.0);
        }
        let last = state.history().last().unwrap();
        assert_eq!(last.score_percent, rows[0].score * 100.0);
    }

    #[test]
    fn chart_series_is_not_rounded() {
        let rows = vec![sample("2024-05-01T10:00:00Z", 0.123, "healthy")];
        let state = DisplayState::from_samples(&rows);
        assert_eq!(state.history()[0].score_percent, 0.123 * 100.0);
        assert_eq!(state.readout(), "12%");
    }

    #[test]
    fn caps_history_at_limit() {
        let rows: Vec<_> = (0..25)
            .map(|i| sample(&format!("2024-05-01T10:00:{:02}Z", 59 - i), i as f64 / 100.0, "healthy"))
            .collect();
        let state = DisplayState::from_samples(&rows);
        assert_eq!(state.history().len(), HISTORY_LIMIT);
        assert_eq!(state.latest_score(), Some(0.0));
        assert_eq!(state.history().last().unwrap().score_percent, 0.0);
        assert_eq!(
            state.history()[0].score_percent,
            rows[HISTORY_LIMIT - 1].score * 100.0
        );
    }

    #[test]
    fn empty_result_means_nodata_regardless_of_prior_state() {
        let mut state = DisplayState::from_samples(&scenario());
        state.apply("sk_test_123", Ok(vec![]));
        assert_eq!(state.status(), &Status::NoData);
        assert_eq!(state.status().as_str(), "nodata");
        assert!(state.history().is_empty());
        assert_eq!(state.readout(), "--");

        let mut fresh = DisplayState::default();
        fresh.apply("sk_test_123", Ok(vec![]));
        assert_eq!(fresh, state);
    }

    #[test]
    fn failure_keeps_last_known_good_history() {
        let mut state = DisplayState::default();
        state.apply("sk_test_123", Ok(scenario()));
        let history_before = state.history().to_vec();

        state.apply("sk_test_123", Err("connection refused".to_string()));
        assert_eq!(state.status(), &Status::Error);
        assert_eq!(state.history(), history_before.as_slice());
        assert_eq!(state.latest_score(), Some(0.92));
        assert_eq!(state.last_error(), Some("connection refused"));

        state.apply("sk_test_123", Ok(scenario()));
        assert_eq!(state.status().as_str(), "healthy");
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn success_replaces_history_instead_of_appending() {
        let mut state = DisplayState::from_samples(&scenario());
        state.apply("sk_test_123", Ok(vec![sample("2024-05-01T10:00:06Z", 0.10, "critical")]));
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.status().as_str(), "critical");
        assert_eq!(state.readout(), "10%");
    }

    #[test]
    fn failure_for_another_key_drops_previous_data() {
        let mut state = DisplayState::default();
        state.apply("sk_a", Ok(vec![sample("2024-05-01T10:00:00Z", 0.92, "healthy")]));
        assert_eq!(state.api_key(), "sk_a");

        state.apply("sk_b", Err("timeout".to_string()));
        assert_eq!(state.api_key(), "sk_b");
        assert_eq!(state.status(), &Status::Error);
        assert_eq!(state.readout(), "--");
        assert!(state.history().is_empty());
        assert_eq!(state.last_error(), Some("timeout"));
    }

    #[test]
    fn unknown_remote_status_is_passed_through() {
        let state = DisplayState::from_samples(&[sample("2024-05-01T10:00:00Z", 0.5, "degraded")]);
        assert_eq!(state.status(), &Status::Reported("degraded".to_string()));
        assert_eq!(state.status().to_string(), "degraded");
    }
}
