//! Relay mutation payloads for tenants and edge clusters
//!
//! Payloads echo the caller's `clientMutationId`. Create and update payloads
//! expose the affected entity as a connection edge so clients can splice it
//! into an existing connection.

use async_graphql::{ErrorExtensions, Object, Result, SimpleObject, ID};

use crate::graphql::creator::{random_identifier, SharedResolverCreator};
use crate::graphql::error::{require_non_blank, ResolverResult};

use super::{EdgeClusterTypeEdge, TenantTypeEdge};

const NEW_TENANT_CURSOR: &str = "New tenant cursor";
const UPDATED_TENANT_CURSOR: &str = "Updated tenant cursor";
const NEW_EDGE_CLUSTER_CURSOR: &str = "New edge cluster cursor";
const UPDATED_EDGE_CLUSTER_CURSOR: &str = "Updated edge cluster cursor";

pub struct CreateTenantPayload {
    creator: SharedResolverCreator,
    client_mutation_id: Option<String>,
}

impl CreateTenantPayload {
    pub fn new(creator: SharedResolverCreator, client_mutation_id: Option<String>) -> Self {
        Self {
            creator,
            client_mutation_id,
        }
    }
}

#[Object]
impl CreateTenantPayload {
    /// Edge pointing at the new tenant
    async fn tenant(&self) -> Result<TenantTypeEdge> {
        self.creator
            .clone()
            .new_tenant_edge(ID::from(random_identifier()), NEW_TENANT_CURSOR.to_string())
            .map_err(|e| e.extend())
    }

    async fn client_mutation_id(&self) -> Option<&str> {
        self.client_mutation_id.as_deref()
    }
}

pub struct UpdateTenantPayload {
    creator: SharedResolverCreator,
    tenant_id: ID,
    client_mutation_id: Option<String>,
}

impl UpdateTenantPayload {
    pub fn new(
        creator: SharedResolverCreator,
        tenant_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<Self> {
        require_non_blank("tenantId", &tenant_id)?;
        Ok(Self {
            creator,
            tenant_id,
            client_mutation_id,
        })
    }
}

#[Object]
impl UpdateTenantPayload {
    /// Edge pointing at the updated tenant
    async fn tenant(&self) -> Result<TenantTypeEdge> {
        self.creator
            .clone()
            .new_tenant_edge(self.tenant_id.clone(), UPDATED_TENANT_CURSOR.to_string())
            .map_err(|e| e.extend())
    }

    async fn client_mutation_id(&self) -> Option<&str> {
        self.client_mutation_id.as_deref()
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct DeleteTenantPayload {
    pub deleted_tenant_id: ID,
    pub client_mutation_id: Option<String>,
}

impl DeleteTenantPayload {
    pub fn new(tenant_id: ID, client_mutation_id: Option<String>) -> ResolverResult<Self> {
        require_non_blank("tenantId", &tenant_id)?;
        Ok(Self {
            deleted_tenant_id: tenant_id,
            client_mutation_id,
        })
    }
}

pub struct CreateEdgeClusterPayload {
    creator: SharedResolverCreator,
    client_mutation_id: Option<String>,
}

impl CreateEdgeClusterPayload {
    pub fn new(creator: SharedResolverCreator, client_mutation_id: Option<String>) -> Self {
        Self {
            creator,
            client_mutation_id,
        }
    }
}

#[Object]
impl CreateEdgeClusterPayload {
    /// Edge pointing at the new edge cluster
    async fn edge_cluster(&self) -> Result<EdgeClusterTypeEdge> {
        self.creator
            .clone()
            .new_edge_cluster_edge(
                ID::from(random_identifier()),
                NEW_EDGE_CLUSTER_CURSOR.to_string(),
            )
            .map_err(|e| e.extend())
    }

    async fn client_mutation_id(&self) -> Option<&str> {
        self.client_mutation_id.as_deref()
    }
}

pub struct UpdateEdgeClusterPayload {
    creator: SharedResolverCreator,
    edge_cluster_id: ID,
    client_mutation_id: Option<String>,
}

impl UpdateEdgeClusterPayload {
    pub fn new(
        creator: SharedResolverCreator,
        edge_cluster_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<Self> {
        require_non_blank("edgeClusterId", &edge_cluster_id)?;
        Ok(Self {
            creator,
            edge_cluster_id,
            client_mutation_id,
        })
    }
}

#[Object]
impl UpdateEdgeClusterPayload {
    /// Edge pointing at the updated edge cluster
    async fn edge_cluster(&self) -> Result<EdgeClusterTypeEdge> {
        self.creator
            .clone()
            .new_edge_cluster_edge(
                self.edge_cluster_id.clone(),
                UPDATED_EDGE_CLUSTER_CURSOR.to_string(),
            )
            .map_err(|e| e.extend())
    }

    async fn client_mutation_id(&self) -> Option<&str> {
        self.client_mutation_id.as_deref()
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct DeleteEdgeClusterPayload {
    pub deleted_edge_cluster_id: ID,
    pub client_mutation_id: Option<String>,
}

impl DeleteEdgeClusterPayload {
    pub fn new(edge_cluster_id: ID, client_mutation_id: Option<String>) -> ResolverResult<Self> {
        require_non_blank("edgeClusterId", &edge_cluster_id)?;
        Ok(Self {
            deleted_edge_cluster_id: edge_cluster_id,
            client_mutation_id,
        })
    }
}
