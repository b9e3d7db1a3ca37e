use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


const HOST: &str = "localhost:8080";
const BASE: &str = "http://localhost:8080/api";

/// Builds the application router over a fresh in-memory database with every yard table.
async fn app() -> (DatabaseConnection, Router) {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();
    let app = router().with_state(AppState::new(db.clone(), None));

    (db, app)
}

/// Sends one request with a `Host` header and returns status, headers and JSON body.
///
/// An empty response body is returned as `Value::Null`.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, HOST);

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, headers, json)
}

fn rels(links: &Value) -> Vec<&str> {
    links
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["rel"].as_str().unwrap())
        .collect()
}

fn yard_body(owner_id: &str) -> Value {
    json!({
        "ownerId": owner_id,
        "address": {
            "country": "Brazil",
            "state": "SP",
            "city": "Sao Paulo",
            "zipCode": "01310-100",
            "neighborhood": "Bela Vista",
            "complement": "Block A"
        }
    })
}

/// Creates a yard through the API and returns its id.
async fn create_yard(app: &Router) -> String {
    let (status, _, body) = send(app, Method::POST, "/api/yards", Some(yard_body("owner-1"))).await;
    assert_eq!(status, StatusCode::CREATED);

    body["id"].as_str().unwrap().to_string()
}
