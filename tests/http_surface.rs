//! HTTP surface tests
//!
//! Exercises the built router request-for-request: status codes, response
//! shapes, and the query-driven dispatch, without binding a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use spacebook::http_server::HttpServer;

// =============================================================================
// Test Utilities
// =============================================================================

fn service() -> Router {
    HttpServer::new().router()
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create_space(router: &Router, body: Value) -> String {
    let (status, response) = send(router, Method::POST, "/spaces", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    response["id"].as_str().expect("create returns an id").to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_health() {
    let router = service();
    let (status, body) = send(&router, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_then_read_by_id() {
    let router = service();
    let id = create_space(&router, json!({"name": "Office A", "location": "London"})).await;

    let (status, body) = send(&router, Method::GET, &format!("/spaces?spaceId={id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Office A");
    assert_eq!(body["data"][0]["spaceId"], id.as_str());
}

#[tokio::test]
async fn test_create_missing_field_is_400() {
    let router = service();
    let (status, body) = send(
        &router,
        Method::POST,
        "/spaces",
        Some(json!({"name": "Office A"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("location"));
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_read_all_lists_every_record() {
    let router = service();
    create_space(&router, json!({"name": "A", "location": "London"})).await;
    create_space(&router, json!({"name": "B", "location": "Paris"})).await;

    let (status, body) = send(&router, Method::GET, "/spaces", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_read_by_secondary_index() {
    let router = service();
    create_space(&router, json!({"name": "A", "location": "London"})).await;
    create_space(&router, json!({"name": "B", "location": "Paris"})).await;

    let (status, body) = send(&router, Method::GET, "/spaces?location=London", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "A");
}

#[tokio::test]
async fn test_read_undeclared_index_is_400() {
    let router = service();
    create_space(&router, json!({"name": "A", "location": "London"})).await;

    let (status, body) = send(&router, Method::GET, "/spaces?name=A", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_update_flow() {
    let router = service();
    let id = create_space(&router, json!({"name": "Office A", "location": "London"})).await;

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("/spaces?spaceId={id}"),
        Some(json!({"location": "Paris"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"]["location"], "Paris");

    let (_, body) = send(&router, Method::GET, &format!("/spaces?spaceId={id}"), None).await;
    assert_eq!(body["data"][0]["location"], "Paris");
    assert_eq!(body["data"][0]["name"], "Office A");
}

#[tokio::test]
async fn test_update_without_id_is_400() {
    let router = service();

    let (status, _) = send(
        &router,
        Method::PUT,
        "/spaces",
        Some(json!({"location": "Paris"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let router = service();

    let (status, _) = send(
        &router,
        Method::PUT,
        "/spaces?spaceId=ghost",
        Some(json!({"location": "Paris"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_is_idempotent_over_http() {
    let router = service();
    let id = create_space(&router, json!({"name": "Office A", "location": "London"})).await;
    let uri = format!("/spaces?spaceId={id}");

    let (first, body) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(first, StatusCode::OK);
    assert_eq!(body["deleted"], true);

    let (second, body) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(second, StatusCode::OK);
    assert_eq!(body["deleted"], true);

    let (_, body) = send(&router, Method::GET, &uri, None).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_resources_are_isolated() {
    let router = service();
    create_space(&router, json!({"name": "Office A", "location": "London"})).await;

    let (status, body) = send(&router, Method::GET, "/reservations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);

    let (status, response) = send(
        &router,
        Method::POST,
        "/reservations",
        Some(json!({"spaceId": "s1", "user": "marcia"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(response["id"].as_str().is_some());

    let (status, body) = send(&router, Method::GET, "/reservations?user=marcia", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
}
