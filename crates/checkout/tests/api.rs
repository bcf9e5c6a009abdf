//! Router-level tests for the checkout API.
//!
//! These drive the real router through `tower::ServiceExt::oneshot` with
//! the simulated latency disabled, and assert the exact wire contract:
//! status codes, field names, and rejection messages.

#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use wavecart_checkout::config::CheckoutConfig;
use wavecart_checkout::routes;
use wavecart_checkout::state::AppState;

fn app() -> Router {
    routes::routes().with_state(AppState::without_latency(CheckoutConfig::default()))
}

async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn valid_account() -> Value {
    json!({"email": "user@test.com", "password": "password123"})
}

fn valid_shipping() -> Value {
    json!({
        "addressLine1": "1 Main St",
        "streetName": "Main St",
        "postcode": "12345",
        "shippingMethod": "standard"
    })
}

fn valid_payment() -> Value {
    json!({
        "nameOnCard": "Jane Doe",
        "cardNumber": "4242424242424242",
        "expirationMonth": "12",
        "expirationYear": "2030",
        "cvc": "123"
    })
}

// Account step

#[tokio::test]
async fn account_accepts_valid_submission() {
    let (status, body) = post_json(app(), "/api/checkout/account", valid_account()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Account verified successfully"));
    assert!(body["accountId"].as_str().unwrap().starts_with("acc_"));
}

#[tokio::test]
async fn account_rejects_missing_fields() {
    let (status, body) = post_json(app(), "/api/checkout/account", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Email and password are required"));
}

#[tokio::test]
async fn account_rejects_bad_email() {
    let (status, body) = post_json(
        app(),
        "/api/checkout/account",
        json!({"email": "not-an-email", "password": "password123"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid email format"));
}

#[tokio::test]
async fn account_rejects_short_password() {
    let (status, body) = post_json(
        app(),
        "/api/checkout/account",
        json!({"email": "user@test.com", "password": "short"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Password must be at least 8 characters")
    );
}

#[tokio::test]
async fn account_rejects_registered_email() {
    let (status, body) = post_json(
        app(),
        "/api/checkout/account",
        json!({"email": "error@test.com", "password": "password123"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("This email is already registered"));
}

// Shipping step

#[tokio::test]
async fn shipping_accepts_valid_submission() {
    let (status, body) = post_json(app(), "/api/checkout/shipping", valid_shipping()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Shipping address verified"));
    assert!(body["shippingId"].as_str().unwrap().starts_with("ship_"));
}

#[tokio::test]
async fn shipping_rejects_missing_fields() {
    let mut incomplete = valid_shipping();
    incomplete["postcode"] = json!("");
    let (status, body) = post_json(app(), "/api/checkout/shipping", incomplete).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("All shipping fields are required"));
}

#[tokio::test]
async fn shipping_rejects_unknown_method() {
    let mut fields = valid_shipping();
    fields["shippingMethod"] = json!("teleport");
    let (status, body) = post_json(app(), "/api/checkout/shipping", fields).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid shipping method"));
}

#[tokio::test]
async fn shipping_rejects_demo_postcode() {
    let mut fields = valid_shipping();
    fields["postcode"] = json!("00000");
    let (status, body) = post_json(app(), "/api/checkout/shipping", fields).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid postcode"));
}

#[tokio::test]
async fn shipping_accepts_express_method() {
    let mut fields = valid_shipping();
    fields["shippingMethod"] = json!("express");
    let (status, _) = post_json(app(), "/api/checkout/shipping", fields).await;

    assert_eq!(status, StatusCode::OK);
}

// Payment step

#[tokio::test]
async fn payment_accepts_valid_submission() {
    let (status, body) = post_json(app(), "/api/checkout/payment", valid_payment()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Payment processed successfully"));
    assert!(body["paymentId"].as_str().unwrap().starts_with("pay_"));
}

#[tokio::test]
async fn payment_rejects_missing_fields() {
    let mut incomplete = valid_payment();
    incomplete["cvc"] = json!("");
    let (status, body) = post_json(app(), "/api/checkout/payment", incomplete).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("All payment fields are required"));
}

#[tokio::test]
async fn payment_rejects_bad_card_number() {
    let mut fields = valid_payment();
    fields["cardNumber"] = json!("1234");
    let (status, body) = post_json(app(), "/api/checkout/payment", fields).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid card number"));
}

#[tokio::test]
async fn payment_rejects_bad_expiration() {
    let mut fields = valid_payment();
    fields["expirationMonth"] = json!("13");
    let (status, body) = post_json(app(), "/api/checkout/payment", fields).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid month"));

    let mut fields = valid_payment();
    fields["expirationYear"] = json!("30");
    let (status, body) = post_json(app(), "/api/checkout/payment", fields).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid year"));
}

#[tokio::test]
async fn payment_rejects_declined_card() {
    let mut fields = valid_payment();
    fields["cardNumber"] = json!("4000000000000002");
    let (status, body) = post_json(app(), "/api/checkout/payment", fields).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Card declined"));
}

// Completion

#[tokio::test]
async fn complete_returns_order_confirmation() {
    let (status, body) = post_json(
        app(),
        "/api/checkout/complete",
        json!({"accountId": "acc_1", "shippingId": "ship_1", "paymentId": "pay_1"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Order completed successfully"));
    assert!(body["orderId"].as_str().unwrap().starts_with("ORD-"));
    assert_eq!(body["total"], json!("124.99"));
    assert_eq!(body["currency"], json!("USD"));
    assert!(body["estimatedDelivery"].is_string());
}

#[tokio::test]
async fn complete_rejects_missing_tokens() {
    let (status, body) = post_json(
        app(),
        "/api/checkout/complete",
        json!({"accountId": "acc_1", "shippingId": "", "paymentId": "pay_1"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Missing required order information"));
}

#[tokio::test]
async fn complete_treats_absent_tokens_as_empty() {
    let (status, body) = post_json(app(), "/api/checkout/complete", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Missing required order information"));
}

// Summary

#[tokio::test]
async fn summary_returns_static_order() {
    let (status, body) = get_json(app(), "/api/checkout/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subtotal"], json!("99.99"));
    assert_eq!(body["tax"], json!("15.00"));
    assert_eq!(body["shipping"], json!("10.00"));
    assert_eq!(body["total"], json!("124.99"));
    assert_eq!(body["currency"], json!("USD"));

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], json!("Headsets"));
}

#[tokio::test]
async fn summary_is_idempotent() {
    let (_, first) = get_json(app(), "/api/checkout/summary").await;
    let (_, second) = get_json(app(), "/api/checkout/summary").await;
    assert_eq!(first, second);
}

// Malformed input

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/checkout/account")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/checkout/account")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
