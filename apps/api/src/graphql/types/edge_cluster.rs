//! Edge cluster GraphQL types

use async_graphql::{ErrorExtensions, Object, Result, ID};

use crate::graphql::creator::{random_identifier, SharedResolverCreator};
use crate::graphql::error::{require_non_blank, ResolverResult};

use super::page_info::placeholder_page_info;
use super::PageInfo;

/// An edge cluster provisioned for a tenant
pub struct EdgeCluster {
    id: ID,
    name: String,
}

impl EdgeCluster {
    /// Create an edge cluster resolver with a generated display name
    pub fn new(edge_cluster_id: ID) -> ResolverResult<Self> {
        Self::with_name(edge_cluster_id, random_identifier())
    }

    pub fn with_name(edge_cluster_id: ID, name: impl Into<String>) -> ResolverResult<Self> {
        require_non_blank("edgeClusterId", &edge_cluster_id)?;
        Ok(Self {
            id: edge_cluster_id,
            name: name.into(),
        })
    }
}

#[Object]
impl EdgeCluster {
    /// Unique edge cluster identifier
    async fn id(&self) -> &ID {
        &self.id
    }

    /// Display name
    async fn name(&self) -> &str {
        &self.name
    }
}

/// Edge of an edge cluster connection
#[derive(Clone)]
pub struct EdgeClusterTypeEdge {
    creator: SharedResolverCreator,
    edge_cluster_id: ID,
    cursor: String,
}

impl EdgeClusterTypeEdge {
    pub fn new(
        creator: SharedResolverCreator,
        edge_cluster_id: ID,
        cursor: String,
    ) -> ResolverResult<Self> {
        require_non_blank("edgeClusterId", &edge_cluster_id)?;
        require_non_blank("cursor", &cursor)?;
        Ok(Self {
            creator,
            edge_cluster_id,
            cursor,
        })
    }
}

#[Object]
impl EdgeClusterTypeEdge {
    /// The edge cluster at the end of the edge
    async fn node(&self) -> Result<EdgeCluster> {
        self.creator
            .clone()
            .new_edge_cluster(self.edge_cluster_id.clone())
            .map_err(|e| e.extend())
    }

    /// Opaque position of this edge
    async fn cursor(&self) -> &str {
        &self.cursor
    }
}

/// Relay connection over edge clusters
pub struct EdgeClusterTypeConnection {
    creator: SharedResolverCreator,
    edges: Vec<EdgeClusterTypeEdge>,
}

impl EdgeClusterTypeConnection {
    pub fn new(creator: SharedResolverCreator) -> Self {
        Self {
            creator,
            edges: Vec::new(),
        }
    }
}

#[Object]
impl EdgeClusterTypeConnection {
    async fn page_info(&self) -> PageInfo {
        placeholder_page_info(self.creator.as_ref())
    }

    async fn edges(&self) -> Vec<EdgeClusterTypeEdge> {
        self.edges.clone()
    }

    /// Total number of edge clusters
    async fn total_count(&self) -> i32 {
        i32::try_from(self.edges.len()).unwrap_or(i32::MAX)
    }
}
