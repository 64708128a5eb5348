//! Splits the transport's single response stream into one stream per
//! category.
//!
//! Routing is by exact category name only; the router cannot tell which of
//! two in-flight requests of the same category a response answers, so the
//! last response to arrive wins downstream.

use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::dashboard::request::Category;
use crate::dashboard::state::SiteStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Opaque text form. JSON strings are unwrapped, other JSON is
    /// re-serialized.
    pub fn into_text(self) -> String {
        match self {
            ResponseBody::Text(text) => text,
            ResponseBody::Json(Value::String(text)) => text,
            ResponseBody::Json(other) => other.to_string(),
        }
    }
}

/// Inbound response tagged with the wire name of its request's category.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub category: String,
    pub body: ResponseBody,
}

impl Response {
    pub fn new(category: impl Into<String>, body: ResponseBody) -> Self {
        Self {
            category: category.into(),
            body,
        }
    }

    pub fn json(category: impl Into<String>, body: Value) -> Self {
        Self::new(category, ResponseBody::Json(body))
    }

    pub fn text(category: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(category, ResponseBody::Text(body.into()))
    }
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Unrecognized response category '{0}'")]
    UnknownCategory(String),

    #[error("Malformed '{category}' response body: {source}")]
    Malformed {
        category: Category,
        #[source]
        source: serde_json::Error,
    },

    #[error("No consumer for '{category}' responses")]
    Closed { category: Category },
}

/// Per-category response streams handed to the reducer bus.
pub struct RoutedStreams {
    pub sites: mpsc::UnboundedReceiver<Vec<SiteStatus>>,
    pub add_site: mpsc::UnboundedReceiver<String>,
    pub remove_site: mpsc::UnboundedReceiver<String>,
}

pub struct ResponseRouter {
    sites: mpsc::UnboundedSender<Vec<SiteStatus>>,
    add_site: mpsc::UnboundedSender<String>,
    remove_site: mpsc::UnboundedSender<String>,
}

impl ResponseRouter {
    pub fn new() -> (Self, RoutedStreams) {
        let (sites_tx, sites_rx) = mpsc::unbounded_channel();
        let (add_tx, add_rx) = mpsc::unbounded_channel();
        let (remove_tx, remove_rx) = mpsc::unbounded_channel();
        (
            Self {
                sites: sites_tx,
                add_site: add_tx,
                remove_site: remove_tx,
            },
            RoutedStreams {
                sites: sites_rx,
                add_site: add_rx,
                remove_site: remove_rx,
            },
        )
    }

    /// Deliver one response to its category stream.
    pub fn route(&self, response: Response) -> Result<Category, RouteError> {
        let category = Category::from_wire(&response.category)
            .ok_or(RouteError::UnknownCategory(response.category))?;

        let delivered = match category {
            Category::Sites => {
                let sites = decode_sites(response.body)?;
                self.sites.send(sites).is_ok()
            }
            Category::AddSite => self.add_site.send(response.body.into_text()).is_ok(),
            Category::RemoveSite => self.remove_site.send(response.body.into_text()).is_ok(),
        };

        if delivered {
            Ok(category)
        } else {
            Err(RouteError::Closed { category })
        }
    }

    /// Route every inbound response until the transport side closes.
    ///
    /// Unrecognized categories and malformed bodies are logged and dropped.
    pub async fn run(self, mut inbound: mpsc::UnboundedReceiver<Response>) {
        while let Some(response) = inbound.recv().await {
            match self.route(response) {
                Ok(category) => tracing::trace!(category = %category, "response routed"),
                Err(RouteError::UnknownCategory(name)) => {
                    tracing::debug!(category = %name, "dropping response with unrecognized category");
                }
                Err(err) => tracing::warn!(error = %err, "dropping response"),
            }
        }
        tracing::debug!("response stream closed");
    }
}

fn decode_sites(body: ResponseBody) -> Result<Vec<SiteStatus>, RouteError> {
    let decoded = match body {
        ResponseBody::Json(value) => serde_json::from_value(value),
        ResponseBody::Text(text) => serde_json::from_str(&text),
    };
    decoded.map_err(|source| RouteError::Malformed {
        category: Category::Sites,
        source,
    })
}
