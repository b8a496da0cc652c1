//! GraphQL schema and resolvers for EdgeCloud
//!
//! This module contains the async-graphql schema including:
//! - The resolver creator every resolver builds its children through
//! - Query resolvers rooted at the current user
//! - Relay-style mutations for tenants and edge clusters
//! - Type definitions for all GraphQL objects

pub mod creator;
pub mod error;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod types;

pub use creator::{DefaultResolverCreator, ResolverCreator, SharedResolverCreator};
pub use error::{ResolverError, ResolverResult};
pub use schema::{build_schema, EdgeCloudSchema, SchemaBuilder};
