//! Structured logging with tracing
//!
//! Centralized logging initialization using the tracing ecosystem. The
//! `METAHUB_LOG` environment variable overrides the configured level.

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;
use metahub_domain::error::{Error, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging with the provided configuration
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stdout = fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout)
        .try_init()
        .map_err(|e| Error::configuration(format!("failed to initialize logging: {e}")))
}
