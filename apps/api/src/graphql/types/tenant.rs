//! Tenant GraphQL types: the tenant itself and its Relay connection/edge

use async_graphql::{ErrorExtensions, Object, Result, ID};

use crate::graphql::creator::{random_identifier, SharedResolverCreator};
use crate::graphql::error::{require_non_blank, ResolverResult};
use crate::graphql::pagination::ConnectionArgs;

use super::page_info::placeholder_page_info;
use super::{EdgeCluster, EdgeClusterTypeConnection, PageInfo};

/// A tenant owned by a user
pub struct Tenant {
    creator: SharedResolverCreator,
    id: ID,
    name: String,
}

impl Tenant {
    /// Create a tenant resolver with a generated display name
    pub fn new(creator: SharedResolverCreator, tenant_id: ID) -> ResolverResult<Self> {
        Self::with_name(creator, tenant_id, random_identifier())
    }

    pub fn with_name(
        creator: SharedResolverCreator,
        tenant_id: ID,
        name: impl Into<String>,
    ) -> ResolverResult<Self> {
        require_non_blank("tenantId", &tenant_id)?;
        Ok(Self {
            creator,
            id: tenant_id,
            name: name.into(),
        })
    }
}

#[Object]
impl Tenant {
    /// Unique tenant identifier
    async fn id(&self) -> &ID {
        &self.id
    }

    /// Display name
    async fn name(&self) -> &str {
        &self.name
    }

    /// Look up a single edge cluster of this tenant
    async fn edge_cluster(&self, edge_cluster_id: ID) -> Result<EdgeCluster> {
        self.creator
            .clone()
            .new_edge_cluster(edge_cluster_id)
            .map_err(|e| e.extend())
    }

    /// Edge clusters of this tenant
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
            tenant_id = %self.id.as_str(),
            filter_count = edge_cluster_ids.map_or(0, |ids| ids.len()),
            sort_option = ?sort_option,
            "Resolving edge cluster connection"
        );

        Ok(self.creator.clone().new_edge_cluster_connection())
    }
}

/// Edge of a tenant connection
#[derive(Clone)]
pub struct TenantTypeEdge {
    creator: SharedResolverCreator,
    tenant_id: ID,
    cursor: String,
}

impl TenantTypeEdge {
    pub fn new(
        creator: SharedResolverCreator,
        tenant_id: ID,
        cursor: String,
    ) -> ResolverResult<Self> {
        require_non_blank("tenantId", &tenant_id)?;
        require_non_blank("cursor", &cursor)?;
        Ok(Self {
            creator,
            tenant_id,
            cursor,
        })
    }
}

#[Object]
impl TenantTypeEdge {
    /// The tenant at the end of the edge
    async fn node(&self) -> Result<Tenant> {
        self.creator
            .clone()
            .new_tenant(self.tenant_id.clone())
            .map_err(|e| e.extend())
    }

    /// Opaque position of this edge
    async fn cursor(&self) -> &str {
        &self.cursor
    }
}

/// Relay connection over tenants
pub struct TenantTypeConnection {
    creator: SharedResolverCreator,
    edges: Vec<TenantTypeEdge>,
}

impl TenantTypeConnection {
    pub fn new(creator: SharedResolverCreator) -> Self {
        Self {
            creator,
            edges: Vec::new(),
        }
    }
}

#[Object]
impl TenantTypeConnection {
    async fn page_info(&self) -> PageInfo {
        placeholder_page_info(self.creator.as_ref())
    }

    async fn edges(&self) -> Vec<TenantTypeEdge> {
        self.edges.clone()
    }

    /// Total number of tenants
    async fn total_count(&self) -> i32 {
        i32::try_from(self.edges.len()).unwrap_or(i32::MAX)
    }
}
