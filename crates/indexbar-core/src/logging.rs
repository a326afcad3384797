#![forbid(unsafe_code)]

//! Logging glue.
//!
//! With the `tracing` feature the standard `tracing` macros are re-exported
//! here (and at the crate root), so downstream crates can log through
//! `indexbar_core` without naming `tracing` themselves. Without the feature
//! this module only carries the environment variable name.
//!
//! The `tracing-json` feature adds [`init_json`], which installs a global
//! JSON subscriber filtered by [`LOG_ENV_VAR`].

use std::fmt;

/// Environment variable holding the `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "INDEXBAR_LOG";

/// Filter applied when [`LOG_ENV_VAR`] is unset.
pub const DEFAULT_FILTER: &str = "warn";

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Errors from subscriber installation.
#[derive(Debug)]
pub enum LoggingError {
    /// The filter directive in the environment could not be parsed.
    InvalidFilter(String),
    /// A global subscriber was already installed.
    AlreadyInitialized,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilter(msg) => write!(f, "invalid {LOG_ENV_VAR} filter: {msg}"),
            Self::AlreadyInitialized => write!(f, "global tracing subscriber already set"),
        }
    }
}

impl std::error::Error for LoggingError {}

/// Install a JSON-formatting global subscriber.
///
/// The filter comes from [`LOG_ENV_VAR`]; when unset, [`DEFAULT_FILTER`]
/// applies. A malformed directive is an error rather than a silent default.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let filter = match std::env::var(LOG_ENV_VAR) {
        Ok(directives) => EnvFilter::try_new(directives)
            .map_err(|err| LoggingError::InvalidFilter(err.to_string()))?,
        Err(_) => EnvFilter::new(DEFAULT_FILTER),
    };

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}
