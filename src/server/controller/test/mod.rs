use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router, state::AppState};


async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    (test, router::router(AppState::new(db)))
}

/// Sends one request through the router and returns the status with the parsed JSON
/// body (`Value::Null` when the body is empty).
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

fn site_body(name: &str, country: &str, installation_date: &str) -> Value {
    json!({
        "name": name,
        "country": country,
        "installation_date": installation_date,
        "max_power_megawatt": 10.5,
        "min_power_megawatt": 2.0,
        "useful_energy_at_1_megawatt": 0.85,
        "efficiency": 90.5
    })
}

/// Welcome message at the root.
///
/// Expected: 200 with a message
#[tokio::test]
async fn root_returns_welcome_message() {
    let (_test, app) = setup().await;

    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Site Registry"));
}

/// The generated OpenAPI document lists the site and group paths.
///
/// Expected: 200 with both collection paths present
#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = setup().await;

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/sites"].is_object());
    assert!(body["paths"]["/groups/{group_id}/child-groups"].is_object());
}
