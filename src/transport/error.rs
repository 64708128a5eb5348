use thiserror::Error;

use crate::dashboard::Category;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("'{category}' request failed: {source}")]
    Connection {
        category: Category,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{category}' request returned {status}: {message}")]
    Status {
        category: Category,
        status: u16,
        message: String,
    },

    #[error("Failed to read '{category}' response body: {source}")]
    Decode {
        category: Category,
        #[source]
        source: reqwest::Error,
    },
}
