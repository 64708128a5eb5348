mod common;

use common::mock_api::{CapturedRequest, MockApi};
use common::{wait_for_state, FakeTransport};
use uptime_board::config::ApiConfig;
use uptime_board::dashboard::{Category, Dashboard, PipelineOptions, Request, ResponseBody, ResponseRouter};
use uptime_board::shutdown::ShutdownHandle;
use uptime_board::transport::{HttpTransport, Transport, TransportError};

fn transport_for(api: &MockApi) -> HttpTransport {
    HttpTransport::new(&ApiConfig {
        base_url: api.base_url(),
        connect_timeout_seconds: 2,
    })
    .expect("valid base url")
}

#[tokio::test]
async fn test_fetch_sites_returns_json_list() {
    let api = MockApi::start().await;
    api.seed_sites(&["a", "b"]).await;
    let transport = transport_for(&api);

    let response = transport.execute(Request::fetch_sites()).await.unwrap();
    assert_eq!(response.category, "sites");
    assert!(matches!(response.body, ResponseBody::Json(serde_json::Value::Array(ref items)) if items.len() == 2));

    let (router, mut streams) = ResponseRouter::new();
    router.route(response).unwrap();
    let sites = streams.sites.try_recv().unwrap();
    assert_eq!(sites[0].key, "a");
    assert_eq!(sites[0].status_text, "OK");
    assert!(sites[0].last_check.is_some());
}

#[tokio::test]
async fn test_add_site_posts_form_key() {
    let api = MockApi::start().await;
    let transport = transport_for(&api);

    let response = transport
        .execute(Request::add_site("example.com"))
        .await
        .unwrap();
    assert_eq!(response.category, "addSite");
    assert_eq!(response.body, ResponseBody::Text("Added example.com".to_string()));

    assert_eq!(
        api.captured_requests().await,
        vec![CapturedRequest {
            method: "POST".to_string(),
            path: "/api/sites".to_string(),
            form_key: Some("example.com".to_string()),
        }]
    );
    assert_eq!(api.sites().await, vec!["example.com".to_string()]);
}

#[tokio::test]
async fn test_remove_site_sends_delete() {
    let api = MockApi::start().await;
    api.seed_sites(&["a b", "c"]).await;
    let transport = transport_for(&api);

    let response = transport.execute(Request::remove_site("a b")).await.unwrap();
    assert_eq!(response.category, "removeSite");
    assert_eq!(response.body, ResponseBody::Text("Removed a b".to_string()));
    assert_eq!(api.sites().await, vec!["c".to_string()]);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let api = MockApi::start().await;
    api.fail_with(503).await;
    let transport = transport_for(&api);

    let err = transport.execute(Request::fetch_sites()).await.unwrap_err();
    match err {
        TransportError::Status {
            category, status, ..
        } => {
            assert_eq!(category, Category::Sites);
            assert_eq!(status, 503);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    let api = MockApi::start().await;
    let transport = transport_for(&api);
    drop(api);
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let err = transport.execute(Request::fetch_sites()).await.unwrap_err();
    assert!(matches!(
        err,
        TransportError::Connection {
            category: Category::Sites,
            ..
        }
    ));
}

/// Full pipeline against a real HTTP server.
#[tokio::test]
async fn test_dashboard_against_mock_api() {
    let api = MockApi::start().await;
    api.seed_sites(&["a"]).await;
    let dashboard = Dashboard::start(
        transport_for(&api),
        PipelineOptions {
            refresh_after_mutation: true,
        },
        ShutdownHandle::new(),
    );
    let mut observer = dashboard.subscribe();
    wait_for_state(&mut observer, |s| s.sites.len() == 1).await;

    dashboard.input_changed("b");
    dashboard.submit_add();
    let state = wait_for_state(&mut observer, |s| s.sites.len() == 2).await;
    assert_eq!(state.add_site_status, "Added b");
    dashboard.stop();
}

#[test]
fn test_fake_transport_is_a_transport() {
    fn assert_transport<T: Transport>() {}
    assert_transport::<FakeTransport>();
    assert_transport::<HttpTransport>();
}
