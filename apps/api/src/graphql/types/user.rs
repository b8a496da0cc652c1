//! User GraphQL type
//!
//! The user is the root of the resource hierarchy. It owns tenants and,
//! through them, edge clusters; both are reachable directly from the user.

use async_graphql::{ErrorExtensions, Object, Result, ID};

use crate::graphql::creator::SharedResolverCreator;
use crate::graphql::error::{require_non_blank, ResolverResult};
use crate::graphql::pagination::ConnectionArgs;

use super::{EdgeCluster, EdgeClusterTypeConnection, Tenant, TenantTypeConnection};

/// The user issuing the request
pub struct User {
    creator: SharedResolverCreator,
    id: ID,
}

impl User {
    /// Create a user resolver. Fails when `user_id` is blank.
    pub fn new(creator: SharedResolverCreator, user_id: ID) -> ResolverResult<Self> {
        require_non_blank("userId", &user_id)?;
        Ok(Self {
            creator,
            id: user_id,
        })
    }
}

#[Object]
impl User {
    /// Unique user identifier
    async fn id(&self) -> &ID {
        &self.id
    }

    /// Look up a single tenant by id
    async fn tenant(&self, tenant_id: ID) -> Result<Tenant> {
        self.creator
            .clone()
            .new_tenant(tenant_id)
            .map_err(|e| e.extend())
    }

    /// Tenants owned by the user
    ///
    /// `tenantIds` and `sortOption` are accepted but not applied yet.
    #[allow(clippy::too_many_arguments)]
    async fn tenants(
        &self,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
        tenant_ids: Option<Vec<ID>>,
        sort_option: Option<String>,
    ) -> Result<TenantTypeConnection> {
        ConnectionArgs::new(after, first, before, last)
            .validate()
            .map_err(|e| e.extend())?;
        tracing::trace!(
            user_id = %self.id.as_str(),
            filter_count = tenant_ids.map_or(0, |ids| ids.len()),
            sort_option = ?sort_option,
            "Resolving tenant connection"
        );

        Ok(self.creator.clone().new_tenant_connection())
    }

    /// Look up a single edge cluster by id
    async fn edge_cluster(&self, edge_cluster_id: ID) -> Result<EdgeCluster> {
        self.creator
            .clone()
            .new_edge_cluster(edge_cluster_id)
            .map_err(|e| e.extend())
    }

    /// Edge clusters across all tenants of the user
    ///
    /// `edgeClusterIds` and `sortOption` are accepted but not applied yet.
    #[allow(clippy::too_many_arguments)]
    async fn edge_clusters(
        &self,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
        edge_cluster_ids: Option<Vec<ID>>,
        sort_option: Option<String>,
    ) -> Result<EdgeClusterTypeConnection> {
        ConnectionArgs::new(after, first, before, last)
            .validate()
            .map_err(|e| e.extend())?;
        tracing::trace!(
            user_id = %self.id.as_str(),
            filter_count = edge_cluster_ids.map_or(0, |ids| ids.len()),
            sort_option = ?sort_option,
            "Resolving edge cluster connection"
        );

        Ok(self.creator.clone().new_edge_cluster_connection())
    }
}
