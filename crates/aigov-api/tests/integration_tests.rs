//! Integration tests for aigov-api.
//!
//! Exercises record CRUD, stored-record readiness evaluation, stateless
//! evaluation, tier filtering, and the health probes through the
//! assembled router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use aigov_api::AppState;

/// Build the test app with the built-in export tier table.
fn test_app() -> axum::Router {
    aigov_api::app(AppState::new())
}

/// Read a response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as a string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Create a record and return its ID.
async fn create_record(app: &axum::Router, fields: serde_json::Value) -> String {
    let response = app
        .clone()
        .oneshot(post_json("/v1/records", serde_json::json!({ "fields": fields })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    body["id"].as_str().unwrap().to_string()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app().oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

// -- Record CRUD --------------------------------------------------------------

#[tokio::test]
async fn test_create_and_get_record() {
    let app = test_app();
    let id = create_record(&app, serde_json::json!({"system_name": "Triage Assistant"})).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/v1/records/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["fields"]["system_name"], "Triage Assistant");
}

#[tokio::test]
async fn test_list_records() {
    let app = test_app();
    create_record(&app, serde_json::json!({})).await;
    create_record(&app, serde_json::json!({})).await;

    let response = app.clone().oneshot(get("/v1/records")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_missing_record_is_404() {
    let response = test_app()
        .oneshot(get("/v1/records/00000000-0000-0000-0000-000000000000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_fields_merges() {
    let app = test_app();
    let id = create_record(&app, serde_json::json!({"system_name": "Foo"})).await;

    let response = app
        .clone()
        .oneshot(put_json(
            &format!("/v1/records/{id}/fields"),
            serde_json::json!({"fields": {"provider_name": "Acme", "system_name": "Bar"}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["fields"]["system_name"], "Bar");
    assert_eq!(body["fields"]["provider_name"], "Acme");
}

#[tokio::test]
async fn test_blank_field_key_rejected() {
    let app = test_app();
    let response = app
        .oneshot(post_json(
            "/v1/records",
            serde_json::json!({"fields": {"  ": "value"}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/v1/records")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_record() {
    let app = test_app();
    let id = create_record(&app, serde_json::json!({})).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/v1/records/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get(&format!("/v1/records/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- Readiness Evaluation -----------------------------------------------------

#[tokio::test]
async fn test_stored_record_readiness_report() {
    let app = test_app();
    let id = create_record(
        &app,
        serde_json::json!({
            "system_name": "Triage Assistant",
            "intended_purpose": "Clinical triage support",
            "provider_name": "Acme Health",
            "risk_tier": "high"
        }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(get(&format!("/v1/records/{id}/readiness")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let tiers = body["tiers"].as_array().unwrap();
    assert_eq!(tiers.len(), 3);

    // Memo tier is fully complete.
    assert_eq!(tiers[0]["tier"], "memo");
    assert_eq!(tiers[0]["is_ready"], true);
    assert_eq!(tiers[0]["percentage"], 100);

    // Evidence tier inherits the four memo fields: 4/8 complete.
    assert_eq!(tiers[1]["tier"], "evidence");
    assert_eq!(tiers[1]["completed"], 4);
    assert_eq!(tiers[1]["total"], 8);
    assert_eq!(tiers[1]["percentage"], 50);
    assert_eq!(tiers[1]["missing_fields"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_readiness_tier_filter() {
    let app = test_app();
    let id = create_record(&app, serde_json::json!({})).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/v1/records/{id}/readiness?tier=memo")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let tiers = body["tiers"].as_array().unwrap();
    assert_eq!(tiers.len(), 1);
    assert_eq!(tiers[0]["tier"], "memo");
}

#[tokio::test]
async fn test_readiness_unknown_tier_is_404() {
    let app = test_app();
    let id = create_record(&app, serde_json::json!({})).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/v1/records/{id}/readiness?tier=bogus")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stateless_evaluation() {
    let app = test_app();
    let response = app
        .oneshot(post_json(
            "/v1/readiness",
            serde_json::json!({"fields": {"system_name": "Foo", "risk_tier": false}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    // No record id on stateless evaluations.
    assert!(body.get("record_id").is_none());
    let tiers = body["tiers"].as_array().unwrap();
    // `false` counts as a filled-in answer.
    assert_eq!(tiers[0]["completed"], 2);
    assert_eq!(tiers[0]["total"], 4);
}

#[tokio::test]
async fn test_stateless_evaluation_defaults_to_empty_fields() {
    let app = test_app();
    let response = app
        .oneshot(post_json("/v1/readiness", serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let tiers = body["tiers"].as_array().unwrap();
    assert_eq!(tiers[0]["completed"], 0);
    assert_eq!(tiers[0]["percentage"], 0);
}

// -- Tier Table Description ---------------------------------------------------

#[tokio::test]
async fn test_describe_tiers() {
    let app = test_app();
    let response = app.oneshot(get("/v1/tiers")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let tiers = body.as_array().unwrap();
    assert_eq!(tiers.len(), 3);
    assert_eq!(tiers[0]["name"], "memo");
    assert_eq!(tiers[0]["effective_total"], 4);
    assert_eq!(tiers[2]["name"], "full");
    assert_eq!(tiers[2]["effective_total"], 12);
}
