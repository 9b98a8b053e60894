use dioxus::prelude::*;

use crate::shared::types::MetricSampleDto;

/// Newest-first rows (at most 20) for `api_key`.
#[server(RecentHealthMetrics)]
pub async fn recent_health_metrics(
    api_key: String,
) -> Result<Vec<MetricSampleDto>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::GLOBAL_STORE;
        use crate::shared::display::HISTORY_LIMIT;
        use dioxus::logger::tracing::warn;

        if api_key.trim().is_empty() {
            return Err(ServerFnError::new("api key is required"));
        }
        let Some(store) = GLOBAL_STORE.get() else {
            warn!("recent_health_metrics: store not initialized");
            return Err(ServerFnError::new("metrics store not configured"));
        };
        match store.recent_samples(&api_key, HISTORY_LIMIT).await {
            Ok(rows) => Ok(rows),
            Err(e) => {
                warn!("recent_health_metrics query error: {e}");
                Err(ServerFnError::new(format!("metrics query failed: {e}")))
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = api_key;
        Ok(vec![])
    }
}
