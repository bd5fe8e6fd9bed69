use std::collections::HashSet;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use wayfinder_api::{
    api::{create_router, AppState},
    services::{
        catalog::Catalog, providers::CatalogProvider, selector::BackfillPolicy, Recommender,
    },
};

fn create_test_server(policy: BackfillPolicy, seed: Option<u64>) -> TestServer {
    let provider = CatalogProvider::new(Catalog::builtin(), policy, seed);
    let state = AppState::new(Recommender::fallback_only(Arc::new(provider)));
    TestServer::new(create_router(state)).unwrap()
}

fn default_server() -> TestServer {
    create_test_server(BackfillPolicy::Strict, Some(1234))
}

fn destination_names(body: &Value) -> Vec<String> {
    body["destinations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = default_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_recommendations_return_three_destinations() {
    let server = default_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "budget": 2000,
            "duration": 7,
            "month": "June",
            "mood": "Relaxing",
            "currency": "USD"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let destinations = body["destinations"].as_array().unwrap();
    assert_eq!(destinations.len(), 3);

    for destination in destinations {
        assert!(destination["estimatedCost"].as_f64().unwrap() <= 2000.0);
        assert_eq!(destination["activities"].as_array().unwrap().len(), 4);
        assert!(destination["bestTime"].is_string());
        assert!(destination["imageUrl"].is_string());
        assert!(destination["subtitle"].is_string());
        assert!(destination["summary"].is_string());
    }

    let unique: HashSet<_> = destination_names(&body).into_iter().collect();
    assert_eq!(unique.len(), 3);
}

#[tokio::test]
async fn test_currency_defaults_to_usd() {
    let server = default_server();
    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "budget": 1000,
            "duration": 3,
            "month": "March",
            "mood": "Cultural"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["destinations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_strict_country_filter_returns_single_match() {
    let server = default_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "budget": 100000,
            "duration": 10,
            "month": "December",
            "mood": "Adventurous",
            "currency": "INR",
            "country": "Japan"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(destination_names(&body), vec!["Kyoto"]);
    // 0.9 * 100000 = 90000 is below the 2400 USD ceiling in INR (199200)
    assert_eq!(body["destinations"][0]["estimatedCost"], 90000.0);
}

#[tokio::test]
async fn test_unknown_country_returns_empty_list() {
    let server = default_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "budget": 1500,
            "duration": 5,
            "month": "May",
            "mood": "Romantic",
            "country": "Atlantis"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["destinations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_top_up_policy_fills_past_country_filter() {
    let server = create_test_server(BackfillPolicy::TopUp, Some(1234));

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "budget": 1500,
            "duration": 5,
            "month": "May",
            "mood": "Romantic",
            "country": "Atlantis"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["destinations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_seeded_responses_are_identical() {
    let server = default_server();
    let request = json!({
        "budget": 2500,
        "duration": 8,
        "month": "October",
        "mood": "Adventurous"
    });

    let first: Value = server.post("/api/recommendations").json(&request).await.json();
    let second: Value = server.post("/api/recommendations").json(&request).await.json();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_invalid_duration_is_rejected() {
    let server = default_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "budget": 2000,
            "duration": 400,
            "month": "June",
            "mood": "Relaxing"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Duration"));
}

#[tokio::test]
async fn test_negative_budget_is_rejected() {
    let server = default_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "budget": -5,
            "duration": 3,
            "month": "June",
            "mood": "Relaxing"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_mood_is_rejected() {
    let server = default_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "budget": 2000,
            "duration": 7,
            "month": "June",
            "mood": "Sleepy"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = default_server();
    let request_id = "5f0c6c3e-1f3a-4b8e-9a57-2f9f0d1c8e11";

    let response = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static(request_id),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), request_id);
}
