//! Error handling for the EdgeCloud API HTTP surface
//!
//! GraphQL resolvers report errors through [`crate::graphql::error`]; this
//! type covers everything answered outside a GraphQL response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// HTTP-level API errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// No route matches the request path
    #[error("no route for {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// Request body could not be parsed as a GraphQL request
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Create a not found error for a request that matched no route
    pub fn route_not_found(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::RouteNotFound {
            method: method.into(),
            path: path.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::RouteNotFound { .. } => "NOT_FOUND",
            Self::InvalidBody(_) => "INVALID_BODY",
        }
    }

    /// Log the error at debug level; every variant is a client error
    pub fn log(&self) {
        tracing::debug!(
            error = %self,
            code = self.error_code(),
            status = self.status_code().as_u16(),
            "Client error"
        );
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let error_response = ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
