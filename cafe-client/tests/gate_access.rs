// Access gate integration tests against a mocked address-lookup service

use cafe_client::{AccessDecision, AccessGate, ClientConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gate(lookup_url: String, prefixes: &[&str]) -> AccessGate {
    let config = ClientConfig::new("http://localhost")
        .with_lookup_url(lookup_url)
        .with_allowed_prefixes(prefixes.iter().copied());
    AccessGate::new(&config)
}

#[tokio::test]
async fn test_address_on_cafe_network_is_allowed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "58.84.10.2" })))
        .expect(1)
        .mount(&server)
        .await;

    let gate = gate(server.uri(), &["58.84"]);
    assert_eq!(gate.check().await, AccessDecision::Allowed);
}

#[tokio::test]
async fn test_foreign_address_is_denied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "1.2.3.4" })))
        .mount(&server)
        .await;

    let gate = gate(server.uri(), &["58.84", "2402:e280"]);
    assert_eq!(gate.check().await, AccessDecision::Denied);
}

#[tokio::test]
async fn test_lookup_http_error_fails_closed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let gate = gate(server.uri(), &["58.84"]);
    assert_eq!(gate.check().await, AccessDecision::Denied);
}

#[tokio::test]
async fn test_malformed_lookup_body_fails_closed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let gate = gate(server.uri(), &["58.84"]);
    assert_eq!(gate.check().await, AccessDecision::Denied);
}

#[tokio::test]
async fn test_unreachable_lookup_service_fails_closed() {
    // Nothing listening on this port
    let gate = gate("http://127.0.0.1:1".to_string(), &["58.84"]);
    assert_eq!(gate.check().await, AccessDecision::Denied);
}

#[tokio::test]
async fn test_retry_is_a_fresh_check() {
    let server = MockServer::start().await;
    // First load fails, the user's manual retry succeeds
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "58.84.0.9" })))
        .mount(&server)
        .await;

    let gate = gate(server.uri(), &["58.84"]);
    assert_eq!(gate.check().await, AccessDecision::Denied);
    assert_eq!(gate.check().await, AccessDecision::Allowed);
}
