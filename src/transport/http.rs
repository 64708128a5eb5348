use reqwest::{Client, Url};
use std::time::Duration;

use crate::config::ApiConfig;
use crate::dashboard::{Method, Request, Response, ResponseBody};
use crate::transport::error::TransportError;
use crate::transport::Transport;

/// [`Transport`] over `reqwest`.
///
/// Only the connect phase is bounded; a request that never answers simply
/// never produces a response.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| TransportError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with the request's segments appended, each percent-encoded.
    pub fn url_for(&self, request: &Request) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`, cannot-be-a-base URLs never get here.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(&request.segments);
        }
        url
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        let category = request.category;
        let url = self.url_for(&request);

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        };
        if let Some(form) = &request.form {
            builder = builder.form(form);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| TransportError::Connection { category, source })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                category,
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        let body = match request.method {
            Method::Get => ResponseBody::Json(
                response
                    .json()
                    .await
                    .map_err(|source| TransportError::Decode { category, source })?,
            ),
            Method::Post | Method::Delete => ResponseBody::Text(
                response
                    .text()
                    .await
                    .map_err(|source| TransportError::Decode { category, source })?,
            ),
        };

        Ok(Response::new(category.as_str(), body))
    }
}
