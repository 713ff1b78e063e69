// ABOUTME: Integration tests for the foods, tips, and health endpoints
// ABOUTME: Verifies catalog listing, tip sampling semantics, and liveness
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP tests for `GET /api/foods`, `GET /api/tips`, and `GET /health`

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::test_app;
use serde_json::Value;

#[tokio::test]
async fn foods_returns_the_full_fixed_catalog() {
    let response = AxumTestRequest::get("/api/foods").send(test_app()).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    assert_eq!(body["proteins"].as_array().unwrap().len(), 10);
    assert_eq!(body["veggies"].as_array().unwrap().len(), 10);
    assert_eq!(body["carbs"].as_array().unwrap().len(), 10);

    // spot-check verbatim catalog entries and wire spellings
    let first = &body["proteins"][0];
    assert_eq!(first["name"], "Eggs (2 large)");
    assert_eq!(first["protein"], 12);
    assert_eq!(first["cost"], "Low");
    assert_eq!(first["type"], "Animal");

    let dhal = &body["proteins"][4];
    assert_eq!(dhal["cost"], "Very Low");
    assert_eq!(dhal["type"], "Plant");

    assert_eq!(body["veggies"][0], "Kankun (Water Spinach) Mallung");
    assert_eq!(body["carbs"][9], "Kurakkan Roti (1 piece)");
}

#[tokio::test]
async fn foods_listing_is_stable_across_requests() {
    let first: Value = AxumTestRequest::get("/api/foods").send(test_app()).await.json();
    let second: Value = AxumTestRequest::get("/api/foods").send(test_app()).await.json();
    assert_eq!(first, second);
}

#[tokio::test]
async fn tips_defaults_to_three_distinct_entries() {
    let body: Value = AxumTestRequest::get("/api/tips").send(test_app()).await.json();

    let tips = body["tips"].as_array().unwrap();
    assert_eq!(tips.len(), 3);

    let mut deduped: Vec<&str> = tips.iter().map(|t| t.as_str().unwrap()).collect();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), 3);
}

#[tokio::test]
async fn oversized_tip_count_caps_at_catalog_size() {
    let response = AxumTestRequest::get("/api/tips?count=20").send(test_app()).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    let tips = body["tips"].as_array().unwrap();
    assert_eq!(tips.len(), 10);

    let mut deduped: Vec<&str> = tips.iter().map(|t| t.as_str().unwrap()).collect();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), 10);
}

#[tokio::test]
async fn explicit_tip_count_is_honored() {
    let body: Value = AxumTestRequest::get("/api/tips?count=5").send(test_app()).await.json();
    assert_eq!(body["tips"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn malformed_tip_count_is_rejected_with_bad_request() {
    let response = AxumTestRequest::get("/api/tips?count=abc").send(test_app()).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert!(!body["error"]["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn health_reports_healthy() {
    let response = AxumTestRequest::get("/health").send(test_app()).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].as_str().is_some());
}
