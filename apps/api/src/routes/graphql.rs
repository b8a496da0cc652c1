//! GraphQL HTTP handlers
//!
//! - `POST /graphql` and `POST /query` - execute a GraphQL request
//! - `GET /graphql/playground` - interactive playground, when enabled

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{rejection::GraphQLRejection, GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    response::{Html, IntoResponse},
};

use crate::error::{ApiError, ApiResult};
use crate::graphql::EdgeCloudSchema;

/// Path the playground sends its requests to
pub const GRAPHQL_ENDPOINT: &str = "/graphql";

/// GraphQL handler that executes queries against the schema
///
/// Bodies that are not a GraphQL request are answered with a JSON
/// `INVALID_BODY` error instead of a GraphQL response.
pub async fn graphql_handler(
    Extension(schema): Extension<EdgeCloudSchema>,
    req: Result<GraphQLRequest, GraphQLRejection>,
) -> ApiResult<GraphQLResponse> {
    let request = req
        .map_err(|rejection| ApiError::InvalidBody(rejection.0.to_string()))?
        .into_inner();
    tracing::debug!(
        operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
        "Executing GraphQL request"
    );

    let response = schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request returned errors");
    }
    Ok(response.into())
}

/// GraphQL Playground handler
pub async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new(
        GRAPHQL_ENDPOINT,
    )))
}
