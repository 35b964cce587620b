//! Log subscriber setup.
//!
//! The library itself only emits `tracing` events. Hosts call [`init`] once at
//! startup to route them to stderr with the configured verbosity.

use crate::config::LogConfig;
use crate::error::{EditorError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter for `config`. `RUST_LOG` takes precedence when set.
pub fn env_filter(config: &LogConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| EditorError::Logging(format!("invalid level '{}': {}", config.level, e))),
    }
}

/// Install a global fmt subscriber.
///
/// Fails instead of panicking if a subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = env_filter(config)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(config.ansi).with_target(true))
        .try_init()
        .map_err(|e| EditorError::Logging(e.to_string()))
}
