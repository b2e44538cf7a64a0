#![cfg(feature = "server")]

pub mod config;
pub mod weather;

pub use config::{Settings, SETTINGS};

pub use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, util::TryInitError, EnvFilter};

/// Installs the global subscriber. Fails if one is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
}
