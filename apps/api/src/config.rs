//! API server configuration

use std::env;

use anyhow::{Context, Result};
use edgecloud_shared_config::{parse_env, parse_flag, CommonConfig};

/// Log filter used when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_FILTER: &str = "edgecloud_api=debug,tower_http=debug";

/// Default maximum GraphQL query depth
pub const DEFAULT_GRAPHQL_DEPTH_LIMIT: usize = 15;

/// Default maximum GraphQL query complexity
pub const DEFAULT_GRAPHQL_COMPLEXITY_LIMIT: usize = 200;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,

    /// Serve the GraphQL playground at `/graphql/playground`
    pub graphql_playground: bool,

    /// Allow schema introspection queries
    pub graphql_introspection: bool,

    /// Maximum query nesting depth
    pub graphql_depth_limit: usize,

    /// Maximum query complexity
    pub graphql_complexity_limit: usize,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Outside production the playground and introspection default to on.
    /// In production introspection defaults to off and the playground is
    /// never served, whatever `GRAPHQL_PLAYGROUND` says.
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load common config")?;
        let is_production = common.environment.is_production();

        let graphql_playground = parse_flag("GRAPHQL_PLAYGROUND", !is_production)? && !is_production;

        Ok(Self {
            common,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),

            graphql_playground,

            graphql_introspection: parse_flag("GRAPHQL_INTROSPECTION", !is_production)?,

            graphql_depth_limit: parse_env("GRAPHQL_DEPTH_LIMIT", DEFAULT_GRAPHQL_DEPTH_LIMIT)?,

            graphql_complexity_limit: parse_env(
                "GRAPHQL_COMPLEXITY_LIMIT",
                DEFAULT_GRAPHQL_COMPLEXITY_LIMIT,
            )?,
        })
    }

    /// Tracing filter directives: `RUST_LOG`, then `LOG_LEVEL`, then [`DEFAULT_LOG_FILTER`]
    pub fn log_filter(&self) -> &str {
        self.common
            .log_level
            .as_deref()
            .unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            common: CommonConfig::default(),
            cors_allowed_origins: None,
            graphql_playground: true,
            graphql_introspection: true,
            graphql_depth_limit: DEFAULT_GRAPHQL_DEPTH_LIMIT,
            graphql_complexity_limit: DEFAULT_GRAPHQL_COMPLEXITY_LIMIT,
        }
    }
}
