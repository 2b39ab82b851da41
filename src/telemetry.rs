//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured fallback filter could not be parsed.
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        /// Filter directive as configured.
        filter: String,
        /// Parser failure.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the level filter, preferring `RUST_LOG` over `default_filter`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `RUST_LOG` is unset or
/// unusable and `default_filter` does not parse.
pub fn env_filter(default_filter: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(default_filter).map_err(|source| TelemetryError::InvalidFilter {
            filter: default_filter.to_owned(),
            source,
        })
    })
}

/// Installs the global console subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), TelemetryError> {
    tracing_subscriber::registry()
        .with(env_filter(default_filter)?)
        .with(fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}
