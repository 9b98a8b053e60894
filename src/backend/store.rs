#![cfg(feature = "server")]
use anyhow::Result;
use dioxus::logger::tracing::{debug, warn};
use once_cell::sync::OnceCell;
use reqwest::{Client, StatusCode};
use std::error::Error as _;
use std::sync::Arc;

use crate::backend::config::StoreConfig;
use crate::shared::types::MetricSampleDto;

pub static GLOBAL_STORE: OnceCell<Arc<MetricsStore>> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sending GET {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("decoding rows from {url}: {source}\nBody snippet: {snippet}")]
    Decode {
        url: String,
        snippet: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only client for the PostgREST interface in front of `health_metrics`.
#[derive(Debug, Clone)]
pub struct MetricsStore {
    client: Client,
    base_url: String,
    anon_key: String,
    table: String,
}

impl MetricsStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(2))
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.url.clone(),
            anon_key: config.anon_key.clone(),
            table: config.table.clone(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// Most recent `limit` rows for `api_key`, newest first.
    pub async fn recent_samples(
        &self,
        api_key: &str,
        limit: usize,
    ) -> Result<Vec<MetricSampleDto>, StoreError> {
        let url = self.endpoint();
        let key_filter = format!("eq.{api_key}");
        let limit = limit.to_string();
        debug!("[store] GET {} api_key={} limit={}", url, api_key, limit);

        let res = self
            .client
            .get(&url)
            .query(&[
                ("select", "*"),
                ("api_key", key_filter.as_str()),
                ("order", "created_at.desc"),
                ("limit", limit.as_str()),
            ])
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Accept", "application/json")
            .header("Cache-Control", "no-store")
            .send()
            .await
            .map_err(|e| {
                log_transport_error(&url, &e);
                StoreError::Transport {
                    url: url.clone(),
                    source: e,
                }
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!("[store] request failed: status={} body={}", status, body);
            return Err(StoreError::Status { url, status, body });
        }

        let bytes = res.bytes().await.map_err(|e| StoreError::Transport {
            url: url.clone(),
            source: e,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode {
            snippet: String::from_utf8_lossy(&bytes).chars().take(300).collect(),
            url,
            source: e,
        })
    }
}

fn log_transport_error(url: &str, e: &reqwest::Error) {
    warn!("[store] request error on GET {}: {}", url, e);
    if e.is_timeout() {
        warn!("[store] hint: request timed out");
    }
    if e.is_connect() {
        warn!("[store] hint: connection failed (DNS/route/refused/TLS). Check SUPABASE_URL");
    }
    let mut chain = Vec::new();
    let mut src: Option<&dyn std::error::Error> = e.source();
    while let Some(s) = src {
        chain.push(s.to_string());
        src = s.source();
    }
    if !chain.is_empty() {
        warn!("[store] error chain: {}", chain.join(" -> "));
    }
}
