mod common;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use common::*;
use memberhub_api::app::build_router;
use memberhub_api::gql::build_schema;
use memberhub_api::Config;
use serde_json::{json, Value};
use tower_service::Service;

fn test_router() -> Router {
    let config = Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://unused".to_string()),
        _ => None,
    })
    .unwrap();
    build_router(offline_state(), build_schema(false), &config)
}

async fn post_graphql(body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(request).await
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    // Router is always ready, so `call` can be used without polling first.
    let mut router = test_router();
    let response = router.call(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_invalid_json_body_is_bad_request() {
    let (status, body) = post_graphql("{ not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("bad request: Invalid GraphQL request"));
}

#[tokio::test]
async fn test_deep_query_returns_null_data_with_errors() {
    let query = "{ users { posts { id } profile { memberType { profiles { user { posts { id } } } } } } }";
    let (status, body) = post_graphql(json!({ "query": query }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null(), "data should be null: {body}");
    let errors = body["errors"].as_array().unwrap();
    assert!(!errors.is_empty());
    assert_eq!(errors[0]["message"], "'' exceeds maximum operation depth of 5");
}

#[tokio::test]
async fn test_malformed_uuid_variable_is_reported_in_errors() {
    let body = json!({
        "query": "query Post($id: UUID!) { post(id: $id) { id } }",
        "variables": { "id": "definitely-not-a-uuid" }
    });
    let (status, body) = post_graphql(body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_reports_unreachable_database() {
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "database error");
}
