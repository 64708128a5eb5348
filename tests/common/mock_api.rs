//! Mock inventory API for transport and end-to-end tests.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Form, Json, Router};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub form_key: Option<String>,
}

#[derive(Default)]
struct ApiState {
    sites: Vec<String>,
    requests: Vec<CapturedRequest>,
    /// When set, every endpoint answers with this status.
    failure: Option<StatusCode>,
}

type Shared = Arc<Mutex<ApiState>>;

/// Behaves like the inventory server: `GET` lists sites, `POST` adds one,
/// `DELETE /api/sites/{key}` removes one.
pub struct MockApi {
    pub addr: SocketAddr,
    state: Shared,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(ApiState::default()));
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/api/sites", get(list_sites).post(add_site))
            .route("/api/sites/{key}", delete(remove_site))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock API");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn seed_sites(&self, keys: &[&str]) {
        self.state.lock().await.sites = keys.iter().map(|k| k.to_string()).collect();
    }

    pub async fn fail_with(&self, status: u16) {
        self.state.lock().await.failure = StatusCode::from_u16(status).ok();
    }

    pub async fn sites(&self) -> Vec<String> {
        self.state.lock().await.sites.clone()
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.lock().await.requests.clone()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn list_sites(State(state): State<Shared>) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut state = state.lock().await;
    state.requests.push(CapturedRequest {
        method: "GET".to_string(),
        path: "/api/sites".to_string(),
        form_key: None,
    });
    if let Some(status) = state.failure {
        return Err(status);
    }
    let sites: Vec<serde_json::Value> = state
        .sites
        .iter()
        .map(|key| {
            serde_json::json!({
                "firstCheck": "2024-03-01T10:00:00Z",
                "lastCheck": "2024-03-01T10:05:00Z",
                "key": key,
                "status": 200,
                "statusText": "OK",
                "uptime": "5m0s",
            })
        })
        .collect();
    Ok(Json(serde_json::Value::Array(sites)))
}

async fn add_site(
    State(state): State<Shared>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, String) {
    let mut state = state.lock().await;
    let key = form.get("key").cloned();
    state.requests.push(CapturedRequest {
        method: "POST".to_string(),
        path: "/api/sites".to_string(),
        form_key: key.clone(),
    });
    if let Some(status) = state.failure {
        return (status, "failure".to_string());
    }
    match key {
        Some(key) => {
            state.sites.push(key.clone());
            (StatusCode::OK, format!("Added {}", key))
        }
        None => (StatusCode::BAD_REQUEST, "Bad Request".to_string()),
    }
}

async fn remove_site(State(state): State<Shared>, Path(key): Path<String>) -> (StatusCode, String) {
    let mut state = state.lock().await;
    state.requests.push(CapturedRequest {
        method: "DELETE".to_string(),
        path: format!("/api/sites/{}", key),
        form_key: None,
    });
    if let Some(status) = state.failure {
        return (status, "failure".to_string());
    }
    let before = state.sites.len();
    state.sites.retain(|site| site != &key);
    if state.sites.len() < before {
        (StatusCode::OK, format!("Removed {}", key))
    } else {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    }
}
