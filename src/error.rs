use thiserror::Error;

/// Errors raised by the front-end and its logging once the dashboard runs.
///
/// Configuration and transport construction errors keep their own types
/// ([`crate::config::ConfigError`], [`crate::transport::TransportError`]).
/// Per-request failures never surface here; they are logged by the
/// transport worker and leave the state untouched.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}
