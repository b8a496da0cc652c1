//! Test helper functions for API integration tests

#![allow(dead_code)]

use axum::{body::Body, http::Request, response::Response, Router};
use serde_json::Value;
use tower::ServiceExt;

use edgecloud_api::{build_schema, DefaultResolverCreator, EdgeCloudSchema};

/// Schema wired to the production resolver creator
pub fn default_schema() -> EdgeCloudSchema {
    build_schema(DefaultResolverCreator::shared())
}

/// Execute a GraphQL document and return the serialized response
pub async fn execute(schema: &EdgeCloudSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    serde_json::to_value(&response).expect("GraphQL response serializes")
}

/// Error codes from the `extensions.code` of every error in a response
pub fn error_codes(response: &Value) -> Vec<String> {
    response["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["extensions"]["code"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Assert that a response carries no errors
pub fn assert_no_errors(response: &Value) {
    assert!(
        response.get("errors").map_or(true, |e| e.is_null()),
        "unexpected errors: {}",
        response["errors"]
    );
}

/// Send a request through the router and return the response
pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

/// POST a GraphQL query as JSON to `path`
pub fn graphql_request(path: &str, query: &str) -> Request<Body> {
    let body = serde_json::json!({ "query": query });
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    serde_json::from_slice(&body).expect("body is JSON")
}
