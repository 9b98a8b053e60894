#![cfg(feature = "server")]
use anyhow::{bail, Result};
use std::fmt::Write as _;

use crate::backend::store::MetricsStore;
use crate::shared::display::{DisplayState, HISTORY_LIMIT};

/// One fetch + transform cycle, as the dashboard would run it.
pub async fn run_check(store: &MetricsStore, api_key: &str) -> Result<DisplayState> {
    if api_key.trim().is_empty() {
        bail!("an API key is required: check <API_KEY>");
    }
    let rows = store.recent_samples(api_key, HISTORY_LIMIT).await?;
    Ok(DisplayState::from_samples(&rows))
}

pub fn render_report(state: &DisplayState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Refusal score: {}", state.readout());
    let _ = writeln!(out, "Status:        {}", state.status());
    if state.history().is_empty() {
        let _ = writeln!(out, "History:       (empty)");
    } else {
        let _ = writeln!(out, "History ({} samples, oldest first):", state.history().len());
        for p in state.history() {
            let _ = writeln!(out, "  {}  {:>6.1}%", p.display_time, p.score_percent);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::StoreConfig;
    use std::time::Duration;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn check_builds_display_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("api_key", "eq. sk_test_123 "))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"created_at": "2024-05-01T10:00:04Z", "score": 0.92, "status": "healthy", "api_key": "sk_test_123"},
                {"created_at": "2024-05-01T10:00:02Z", "score": 0.81, "status": "healthy", "api_key": "sk_test_123"},
                {"created_at": "2024-05-01T10:00:00Z", "score": 0.40, "status": "critical", "api_key": "sk_test_123"}
            ])))
            .mount(&server)
            .await;
        let store = MetricsStore::new(&StoreConfig {
            url: server.uri(),
            anon_key: "anon".into(),
            table: "health_metrics".into(),
            request_timeout: Duration::from_secs(5),
        })
        .unwrap();

        let state = run_check(&store, " sk_test_123 ").await.unwrap();
        assert_eq!(state.readout(), "92%");
        let report = render_report(&state);
        assert!(report.contains("Refusal score: 92%"));
        assert!(report.contains("Status:        healthy"));
        assert!(report.contains("3 samples"));
        assert!(report.contains("  40.0%"));
    }

    #[tokio::test]
    async fn check_requires_key() {
        let store = MetricsStore::new(&StoreConfig {
            url: "http://127.0.0.1:9".into(),
            anon_key: "anon".into(),
            table: "health_metrics".into(),
            request_timeout: Duration::from_secs(1),
        })
        .unwrap();
        let err = run_check(&store, "  ").await.unwrap_err();
        assert!(err.to_string().contains("API key is required"));
    }

    #[test]
    fn report_for_empty_state() {
        let mut state = DisplayState::default();
        state.apply(Ok(vec![]));
        let report = render_report(&state);
        assert!(report.contains("Refusal score: --"));
        assert!(report.contains("Status:        nodata"));
        assert!(report.contains("(empty)"));
    }
}
