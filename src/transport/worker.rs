use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::dashboard::{RequestStream, Response};
use crate::transport::Transport;

/// Drains the scheduler's request stream into a [`Transport`].
///
/// Each request runs on its own task so a slow poll never holds up a
/// mutation. Failed requests are logged and produce no response.
pub struct TransportWorker<T> {
    transport: T,
    responses: mpsc::UnboundedSender<Response>,
}

impl<T: Transport> TransportWorker<T> {
    pub fn new(transport: T, responses: mpsc::UnboundedSender<Response>) -> Self {
        Self {
            transport,
            responses,
        }
    }

    pub fn spawn(self, requests: RequestStream) -> JoinHandle<()> {
        tokio::spawn(self.run(requests))
    }

    pub async fn run(self, mut requests: RequestStream) {
        while let Some(request) = requests.recv().await {
            let transport = self.transport.clone();
            let responses = self.responses.clone();
            tokio::spawn(async move {
                let category = request.category;
                tracing::debug!(
                    category = %category,
                    method = %request.method,
                    path = %request.path(),
                    "sending request"
                );
                match transport.execute(request).await {
                    Ok(response) => {
                        if responses.send(response).is_err() {
                            tracing::trace!(category = %category, "response stream closed");
                        }
                    }
                    Err(err) => {
                        tracing::warn!(category = %category, error = %err, "request failed, state unchanged");
                    }
                }
            });
        }
        tracing::debug!("request stream closed");
    }
}
