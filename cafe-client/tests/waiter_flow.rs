// Waiter flow integration tests: bounded retry around order submission

use cafe_client::{Cart, ClientConfig, ClientError, MenuItem, RetryPolicy, WaiterClient};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tea() -> MenuItem {
    MenuItem {
        id: 1,
        name: "Tea".to_string(),
        price: 20.0,
        category: "Drinks".to_string(),
        image_url: None,
    }
}

fn waiter(server: &MockServer) -> WaiterClient {
    let config = ClientConfig::new(server.uri())
        .with_retry(RetryPolicy::new(3, Duration::from_millis(10)));
    WaiterClient::new(&config)
}

#[tokio::test]
async fn test_place_order_succeeds_on_third_attempt() {
    let server = MockServer::start().await;
    // Two transient failures, then success; exactly 3 calls total
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "ord_77" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cart = Cart::new();
    cart.add_item(&tea());

    let order = waiter(&server)
        .place_order(4, &cart, Some("extra hot".to_string()))
        .await
        .unwrap();
    assert_eq!(order.id, "ord_77");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_place_order_exhausts_retries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let mut cart = Cart::new();
    cart.add_item(&tea());

    let err = waiter(&server).place_order(4, &cart, None).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_each_attempt_gets_a_fresh_idempotency_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(header_exists("Idempotency-Key"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(header_exists("Idempotency-Key"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "ord_1" })))
        .mount(&server)
        .await;

    let mut cart = Cart::new();
    cart.add_item(&tea());
    waiter(&server).place_order(4, &cart, None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let keys: Vec<_> = requests
        .iter()
        .map(|r| r.headers.get("Idempotency-Key").unwrap().clone())
        .collect();
    assert_eq!(keys.len(), 2);
    assert_ne!(keys[0], keys[1]);
}

#[tokio::test]
async fn test_validation_fails_before_any_attempt() {
    let server = MockServer::start().await;

    let client = waiter(&server);
    let empty = Cart::new();
    let err = client.place_order(4, &empty, None).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    let mut cart = Cart::new();
    cart.add_item(&tea());
    let err = client.place_order(0, &cart, None).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    let err = client.place_order(31, &cart, None).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_order_patches_with_retry() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/orders/ord_12"))
        .and(body_partial_json(json!({ "notes": "table moved" })))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/orders/ord_12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "ord_12" })))
        .mount(&server)
        .await;

    let mut cart = Cart::new();
    cart.add_item(&tea());

    let order = waiter(&server)
        .save_order("ord_12", 4, &cart, Some("table moved".to_string()))
        .await
        .unwrap();
    assert_eq!(order.id, "ord_12");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_pending_orders_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "ord_1", "table_id": 2, "status": "pending",
                "items": [], "notes": null,
                "created_at": "2025-06-01T10:00:00Z", "order_number": 1
            }
        ])))
        .mount(&server)
        .await;

    let orders = waiter(&server).pending_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, "ord_1");
    assert_eq!(orders[0].table_id, 2);
}
