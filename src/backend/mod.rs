#![cfg(feature = "server")]

pub mod check;
pub mod config;
pub mod store;

pub use crate::backend::store::GLOBAL_STORE;
pub use config::StoreConfig;
pub use store::{MetricsStore, StoreError};

pub use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Builds the store from the environment and publishes it in [`GLOBAL_STORE`].
pub fn init_store() -> anyhow::Result<()> {
    let config = StoreConfig::from_env()?;
    let store = MetricsStore::new(&config)?;
    let _ = GLOBAL_STORE.set(std::sync::Arc::new(store));
    Ok(())
}
