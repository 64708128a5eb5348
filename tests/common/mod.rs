//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use uptime_board::dashboard::{
    AppState, Category, Request, Response, ResponseBody, SiteStatus, StateObserver, Uptime,
};
use uptime_board::transport::{Transport, TransportError};

/// Upper bound for any single wait in async tests.
pub const WAIT_LIMIT: Duration = Duration::from_secs(5);

pub fn site(key: &str, status: u16) -> SiteStatus {
    SiteStatus {
        key: key.to_string(),
        uptime: Uptime::Text("0s".to_string()),
        status,
        status_text: if status == 200 { "OK" } else { "" }.to_string(),
        first_check: None,
        last_check: None,
    }
}

pub fn sites_json(keys: &[&str]) -> serde_json::Value {
    serde_json::Value::Array(
        keys.iter()
            .map(|key| {
                serde_json::json!({
                    "key": key,
                    "uptime": "1m0s",
                    "status": 200,
                    "statusText": "OK",
                })
            })
            .collect(),
    )
}

/// Pull states from `observer` until one satisfies `pred`.
pub async fn wait_for_state<F>(observer: &mut StateObserver, mut pred: F) -> AppState
where
    F: FnMut(&AppState) -> bool,
{
    tokio::time::timeout(WAIT_LIMIT, async {
        loop {
            let state = observer.next().await.expect("store closed");
            if pred(&state) {
                return state;
            }
        }
    })
    .await
    .expect("timed out waiting for state")
}

/// Poll `check` until it returns true.
pub async fn wait_until<F>(mut check: F)
where
    F: FnMut() -> bool,
{
    tokio::time::timeout(WAIT_LIMIT, async {
        while !check() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    })
    .await
    .expect("timed out waiting for condition")
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Fake transport -----------------------------------------------------------

/// Scripted reply for one request of a category.
#[derive(Debug, Clone)]
pub enum Reply {
    Respond(ResponseBody),
    RespondAfter(Duration, ResponseBody),
    Fail(u16),
    /// Never answers.
    Hang,
}

#[derive(Default)]
struct FakeInner {
    sent: Vec<Request>,
    replies: HashMap<Category, VecDeque<Reply>>,
}

/// In-memory transport answering from per-category reply queues.
///
/// A request whose queue is empty hangs forever, like an unresponsive API.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Arc<Mutex<FakeInner>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, category: Category, reply: Reply) {
        self.inner
            .lock()
            .replies
            .entry(category)
            .or_default()
            .push_back(reply);
    }

    pub fn sent(&self) -> Vec<Request> {
        self.inner.lock().sent.clone()
    }

    pub fn sent_of(&self, category: Category) -> Vec<Request> {
        self.sent()
            .into_iter()
            .filter(|request| request.category == category)
            .collect()
    }
}

impl Transport for FakeTransport {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send {
        let category = request.category;
        let reply = {
            let mut inner = self.inner.lock();
            inner.sent.push(request);
            inner
                .replies
                .get_mut(&category)
                .and_then(|queue| queue.pop_front())
        };

        async move {
            match reply {
                Some(Reply::Respond(body)) => Ok(Response::new(category.as_str(), body)),
                Some(Reply::RespondAfter(delay, body)) => {
                    tokio::time::sleep(delay).await;
                    Ok(Response::new(category.as_str(), body))
                }
                Some(Reply::Fail(status)) => Err(TransportError::Status {
                    category,
                    status,
                    message: "scripted failure".to_string(),
                }),
                Some(Reply::Hang) | None => std::future::pending().await,
            }
        }
    }
}
