//! Relay fallback behavior against local mock relays.

use std::time::Duration;

use pipedport::error::ConvertError;
use pipedport::relay::{RelayClient, build_http_client};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TARGET: &str = "https://www.youtube.com/playlist?list=PL1";

// Nothing listens here, so connecting fails without a status
const DEAD_RELAY: &str = "http://127.0.0.1:1/{url}";

fn relay_client(relays: Vec<String>) -> RelayClient {
    let client = build_http_client(Duration::from_secs(5)).unwrap();
    RelayClient::new(client, relays)
}

async fn mount_relay(server: &MockServer, relay_path: &str, status: u16, body: &str, calls: u64) {
    Mock::given(method("GET"))
        .and(path(relay_path))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_first_success_wins_and_stops() {
    let server = MockServer::start().await;
    mount_relay(&server, "/one", 500, "boom", 1).await;
    mount_relay(&server, "/three", 200, "third body", 1).await;
    mount_relay(&server, "/four", 200, "never", 0).await;

    let client = relay_client(vec![
        format!("{}/one?quest={{encoded_url}}", server.uri()),
        DEAD_RELAY.to_string(),
        format!("{}/three?quest={{encoded_url}}", server.uri()),
        format!("{}/four?quest={{encoded_url}}", server.uri()),
    ]);

    let body = client.fetch(TARGET).await.unwrap();
    assert_eq!(body, "third body");
}

#[tokio::test]
async fn test_target_is_passed_to_relay() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/proxy"))
        .and(query_param("quest", TARGET))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let client = relay_client(vec![format!(
        "{}/proxy?quest={{encoded_url}}",
        server.uri()
    )]);

    assert_eq!(client.fetch(TARGET).await.unwrap(), "ok");
}

#[tokio::test]
async fn test_all_relays_fail_with_last_status() {
    let server = MockServer::start().await;
    mount_relay(&server, "/one", 503, "", 1).await;
    mount_relay(&server, "/two", 404, "", 1).await;

    let client = relay_client(vec![
        format!("{}/one?u={{encoded_url}}", server.uri()),
        format!("{}/two?u={{encoded_url}}", server.uri()),
    ]);

    match client.fetch(TARGET).await {
        Err(ConvertError::Network { target, status }) => {
            assert_eq!(target, TARGET);
            assert_eq!(status, Some(404));
        }
        other => panic!("Expected Network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_status_survives_later_transport_failure() {
    let server = MockServer::start().await;
    mount_relay(&server, "/one", 429, "", 1).await;

    let client = relay_client(vec![
        format!("{}/one?u={{encoded_url}}", server.uri()),
        DEAD_RELAY.to_string(),
    ]);

    match client.fetch(TARGET).await {
        Err(ConvertError::Network { status, .. }) => assert_eq!(status, Some(429)),
        other => panic!("Expected Network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_no_response_at_all() {
    let client = relay_client(vec![DEAD_RELAY.to_string(), DEAD_RELAY.to_string()]);

    let err = client.fetch(TARGET).await.unwrap_err();
    match &err {
        ConvertError::Network { status, .. } => assert_eq!(*status, None),
        other => panic!("Expected Network error, got {:?}", other),
    }
    assert!(err.to_string().contains("no response"));
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn test_empty_relay_list() {
    let client = relay_client(Vec::new());

    match client.fetch(TARGET).await {
        Err(ConvertError::Network { status: None, .. }) => {}
        other => panic!("Expected Network error, got {:?}", other),
    }
}
