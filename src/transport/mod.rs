//! HTTP side of the dashboard: executes request descriptions and hands
//! category-tagged responses back to the router.

mod error;
mod http;
mod worker;

use std::future::Future;

use crate::dashboard::{Request, Response};

pub use error::TransportError;
pub use http::HttpTransport;
pub use worker::TransportWorker;

/// Executes one request against the remote inventory.
///
/// Implementations tag the response with the request's category wire name.
pub trait Transport: Clone + Send + Sync + 'static {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send;
}
