//! GraphQL queries for EdgeCloud
//!
//! Query resolvers are organized by domain and merged into the root type.

mod user;

pub use user::UserQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(UserQuery);
