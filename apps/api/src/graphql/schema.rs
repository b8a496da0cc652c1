//! GraphQL schema builder for EdgeCloud
//!
//! This module provides the schema construction for the async-graphql API.

use async_graphql::{EmptySubscription, Schema};

use crate::config::Config;

use super::creator::{DefaultResolverCreator, SharedResolverCreator};
use super::mutation::Mutation;
use super::query::Query;

/// The EdgeCloud GraphQL schema type
pub type EdgeCloudSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with its resolver creator
pub struct SchemaBuilder {
    creator: Option<SharedResolverCreator>,
    depth_limit: Option<usize>,
    complexity_limit: Option<usize>,
    introspection: bool,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        Self {
            creator: None,
            depth_limit: None,
            complexity_limit: None,
            introspection: true,
        }
    }

    /// Apply the GraphQL limits and introspection setting from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .depth_limit(config.graphql_depth_limit)
            .complexity_limit(config.graphql_complexity_limit)
            .introspection(config.graphql_introspection)
    }

    /// Set the resolver creator
    ///
    /// If not set, a [`DefaultResolverCreator`] is used.
    pub fn resolver_creator(mut self, creator: SharedResolverCreator) -> Self {
        self.creator = Some(creator);
        self
    }

    /// Limit query nesting depth
    pub fn depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    /// Limit query complexity
    pub fn complexity_limit(mut self, limit: usize) -> Self {
        self.complexity_limit = Some(limit);
        self
    }

    /// Enable or disable schema introspection
    pub fn introspection(mut self, enabled: bool) -> Self {
        self.introspection = enabled;
        self
    }

    /// Build the schema
    pub fn build(self) -> EdgeCloudSchema {
        let creator = self.creator.unwrap_or_else(DefaultResolverCreator::shared);

        let mut builder =
            Schema::build(Query::default(), Mutation::default(), EmptySubscription).data(creator);

        if let Some(depth) = self.depth_limit {
            builder = builder.limit_depth(depth);
        }
        if let Some(complexity) = self.complexity_limit {
            builder = builder.limit_complexity(complexity);
        }
        if !self.introspection {
            builder = builder.disable_introspection();
        }

        builder.finish()
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new GraphQL schema around the given resolver creator
pub fn build_schema(creator: SharedResolverCreator) -> EdgeCloudSchema {
    SchemaBuilder::new().resolver_creator(creator).build()
}
