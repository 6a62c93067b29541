//! Logging: fmt subscriber with an env filter. `RUST_LOG` wins over the given directive.

use tracing_subscriber::EnvFilter;

use crate::config::LocatorConfig;
use crate::LocatorError;

/// Install the global subscriber. Fails if one is already installed.
pub fn init(filter: &str) -> Result<(), LocatorError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .map_err(|e| LocatorError::Logging(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| LocatorError::Logging(e.to_string()))
}

pub fn init_from(config: &LocatorConfig) -> Result<(), LocatorError> {
    init(&config.log_filter)
}
