#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use std::time::Duration;

pub const DEFAULT_TABLE: &str = "health_metrics";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection parameters for the metrics store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
    pub request_timeout: Duration,
}

impl StoreConfig {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let first_set = |names: &[&str]| {
            names
                .iter()
                .filter_map(|n| lookup(*n))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
        };

        let url = first_set(&["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"])
            .ok_or_else(|| anyhow!("SUPABASE_URL not set"))?;
        let anon_key = first_set(&[
            "SUPABASE_ANON_KEY",
            "NEXT_PUBLIC_SUPABASE_ANON_KEY",
            "SUPABASE_KEY",
        ])
        .ok_or_else(|| anyhow!("SUPABASE_ANON_KEY (or SUPABASE_KEY) not set"))?;
        let table = first_set(&["HEALTH_METRICS_TABLE"]).unwrap_or_else(|| DEFAULT_TABLE.into());
        let timeout_secs = match first_set(&["STORE_TIMEOUT_SECS"]) {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("STORE_TIMEOUT_SECS is not a number: {raw}"))?;
                if secs == 0 {
                    return Err(anyhow!("STORE_TIMEOUT_SECS must be positive"));
                }
                secs
            }
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            table,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
