//! User queries for EdgeCloud GraphQL API
//!
//! - user: entry point into the User → Tenant → EdgeCluster hierarchy

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::graphql::creator::{random_identifier, SharedResolverCreator};
use crate::graphql::types::User;

/// User-related queries
#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// The user issuing the request
    ///
    /// Each request gets a freshly generated user identifier.
    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        let creator = ctx.data::<SharedResolverCreator>()?;

        creator
            .clone()
            .new_user(ID::from(random_identifier()))
            .map_err(|e| e.extend())
    }
}
