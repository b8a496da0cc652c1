//! HTTP routes for the EdgeCloud API
//!
//! Assembles the GraphQL endpoints, health checks and the shared middleware
//! stack (tracing, CORS) into a single router.

pub mod graphql;
pub mod health;

use axum::{
    extract::Extension,
    http::{header, Method, Uri},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::error::ApiError;
use crate::graphql::EdgeCloudSchema;

pub use graphql::{graphql_handler, graphql_playground};
pub use health::health_router;

/// Build the application router
pub fn build_router(config: &Config, schema: EdgeCloudSchema) -> Router {
    let mut app = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/query", post(graphql_handler));

    if config.graphql_playground {
        app = app.route("/graphql/playground", get(graphql_playground));
    }

    app.nest("/health", health_router())
        .fallback(not_found)
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
}

async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::route_not_found(method.as_str(), uri.path())
}

/// Build the CORS layer based on configuration.
///
/// In production mode:
/// - If `CORS_ORIGINS` is set, only those origins are allowed
/// - If `CORS_ORIGINS` is not set, CORS requests are rejected (no origins allowed)
///
/// In development mode:
/// - If `CORS_ORIGINS` is set, those origins are used
/// - If `CORS_ORIGINS` is not set, permissive CORS is used for convenience
pub fn build_cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) if !origins.is_empty() => {
            let allowed_origins: Vec<_> = origins
                .iter()
                .filter_map(|origin| {
                    origin.parse().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin '{}', skipping", origin);
                        None
                    })
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::error!("No valid CORS origins configured, CORS requests will be rejected");
                CorsLayer::new()
            } else {
                tracing::info!(
                    "CORS configured with {} allowed origin(s): {:?}",
                    allowed_origins.len(),
                    origins
                );
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
                    .max_age(std::time::Duration::from_secs(3600))
            }
        }
        _ if config.is_production() => {
            tracing::warn!(
                "CORS_ORIGINS not configured in production mode. \
                 CORS requests will be rejected."
            );
            CorsLayer::new()
        }
        _ => {
            tracing::warn!("Using permissive CORS in development mode");
            CorsLayer::permissive()
        }
    }
}
