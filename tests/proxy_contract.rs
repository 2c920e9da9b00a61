//! End-to-end tests for the gateway forwarding contract: a real gateway on
//! an ephemeral port relaying to a mock upstream service.

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use autocare_portal::api;
use autocare_portal::app_state::AppState;
use autocare_portal::proxy::UpstreamForwarder;

/// Starts the gateway against the given upstream and returns its base URL.
async fn spawn_gateway(upstream_url: &str) -> String {
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(5))
        .build()
        .ok()
        .unwrap_or_else(|| panic!("outbound client construction failed"));

    let forwarder = Arc::new(UpstreamForwarder::new(http, upstream_url, "/api", 1_048_576));
    let app = api::build_router("/api/customer").with_state(AppState { forwarder });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .ok()
        .unwrap_or_else(|| panic!("ephemeral bind failed"));
    let addr: SocketAddr = listener
        .local_addr()
        .ok()
        .unwrap_or_else(|| panic!("local addr unavailable"));

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn forwards_with_rewritten_path_and_identical_authorization() {
    let mut upstream = mockito::Server::new_async().await;
    let mock = upstream
        .mock("GET", "/api/vehicles")
        .match_header("authorization", "Bearer abc.def.ghi")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"v-1","plateNo":"CAB-1234"}]"#)
        .create_async()
        .await;

    let gateway = spawn_gateway(&upstream.url()).await;
    let response = reqwest::Client::new()
        .get(format!("{gateway}/api/customer/vehicles"))
        .header("authorization", "Bearer abc.def.ghi")
        .send()
        .await
        .ok()
        .unwrap_or_else(|| panic!("gateway request failed"));

    assert_eq!(response.status().as_u16(), 200);
    let body = response
        .text()
        .await
        .ok()
        .unwrap_or_else(|| panic!("body read failed"));
    assert_eq!(body, r#"[{"id":"v-1","plateNo":"CAB-1234"}]"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn absent_authorization_is_not_invented() {
    let mut upstream = mockito::Server::new_async().await;
    let mock = upstream
        .mock("GET", "/api/history")
        .match_header("authorization", mockito::Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let gateway = spawn_gateway(&upstream.url()).await;
    let response = reqwest::get(format!("{gateway}/api/customer/history"))
        .await
        .ok()
        .unwrap_or_else(|| panic!("gateway request failed"));

    assert_eq!(response.status().as_u16(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn content_type_defaults_to_json_on_the_upstream_leg() {
    let mut upstream = mockito::Server::new_async().await;
    let mock = upstream
        .mock("GET", "/api/customers/me")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let gateway = spawn_gateway(&upstream.url()).await;
    let response = reqwest::get(format!("{gateway}/api/customer/customers/me"))
        .await
        .ok()
        .unwrap_or_else(|| panic!("gateway request failed"));

    assert_eq!(response.status().as_u16(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_status_and_body_are_relayed_verbatim() {
    let mut upstream = mockito::Server::new_async().await;
    let _get = upstream
        .mock("GET", "/api/customers/me")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"no such customer"}"#)
        .create_async()
        .await;

    let gateway = spawn_gateway(&upstream.url()).await;
    let response = reqwest::get(format!("{gateway}/api/customer/customers/me"))
        .await
        .ok()
        .unwrap_or_else(|| panic!("gateway request failed"));

    assert_eq!(response.status().as_u16(), 404);
    let body = response
        .text()
        .await
        .ok()
        .unwrap_or_else(|| panic!("body read failed"));
    assert_eq!(body, r#"{"message":"no such customer"}"#);
}

#[tokio::test]
async fn request_body_and_query_string_pass_through_unchanged() {
    let mut upstream = mockito::Server::new_async().await;
    let mock = upstream
        .mock("PUT", "/api/customers/me?source=portal")
        .match_body(r#"{"name":"Amal","email":"a@x.com","phone":"071"}"#)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let gateway = spawn_gateway(&upstream.url()).await;
    let response = reqwest::Client::new()
        .put(format!("{gateway}/api/customer/customers/me?source=portal"))
        .header("content-type", "application/json")
        .body(r#"{"name":"Amal","email":"a@x.com","phone":"071"}"#)
        .send()
        .await
        .ok()
        .unwrap_or_else(|| panic!("gateway request failed"));

    assert_eq!(response.status().as_u16(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_upstream_maps_to_bad_gateway() {
    // Nothing listens on this port.
    let gateway = spawn_gateway("http://127.0.0.1:9").await;
    let response = reqwest::get(format!("{gateway}/api/customer/vehicles"))
        .await
        .ok()
        .unwrap_or_else(|| panic!("gateway request failed"));

    assert_eq!(response.status().as_u16(), 502);
    let body: serde_json::Value = response
        .json()
        .await
        .ok()
        .unwrap_or_else(|| panic!("error body should be json"));
    assert_eq!(body.pointer("/error/code").and_then(|c| c.as_u64()), Some(5001));
}

#[tokio::test]
async fn health_endpoint_answers_outside_the_proxy_prefix() {
    let gateway = spawn_gateway("http://127.0.0.1:9").await;
    let response = reqwest::get(format!("{gateway}/health"))
        .await
        .ok()
        .unwrap_or_else(|| panic!("health request failed"));

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response
        .json()
        .await
        .ok()
        .unwrap_or_else(|| panic!("health body should be json"));
    assert_eq!(
        body.get("status").and_then(|s| s.as_str()),
        Some("healthy")
    );
}
