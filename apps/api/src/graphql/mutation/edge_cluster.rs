//! Edge cluster mutations for EdgeCloud GraphQL API
//!
//! - createEdgeCluster
//! - updateEdgeCluster
//! - deleteEdgeCluster

use async_graphql::{Context, ErrorExtensions, InputObject, Object, Result, ID};

use crate::graphql::creator::SharedResolverCreator;
use crate::graphql::error::require_non_blank;
use crate::graphql::types::{
    CreateEdgeClusterPayload, DeleteEdgeClusterPayload, UpdateEdgeClusterPayload,
};

#[derive(Debug, Clone, InputObject)]
pub struct CreateEdgeClusterInput {
    /// Display name of the new edge cluster
    pub name: String,
    pub client_mutation_id: Option<String>,
}

#[derive(Debug, Clone, InputObject)]
pub struct UpdateEdgeClusterInput {
    pub id: ID,
    /// New display name
    pub name: String,
    pub client_mutation_id: Option<String>,
}

#[derive(Debug, Clone, InputObject)]
pub struct DeleteEdgeClusterInput {
    pub id: ID,
    pub client_mutation_id: Option<String>,
}

/// Edge cluster mutations
#[derive(Default)]
pub struct EdgeClusterMutation;

#[Object]
impl EdgeClusterMutation {
    async fn create_edge_cluster(
        &self,
        ctx: &Context<'_>,
        input: CreateEdgeClusterInput,
    ) -> Result<CreateEdgeClusterPayload> {
        require_non_blank("name", &input.name).map_err(|e| e.extend())?;
        let creator = ctx.data::<SharedResolverCreator>()?;

        tracing::info!(name = %input.name, "createEdgeCluster requested");
        Ok(creator
            .clone()
            .new_create_edge_cluster_payload(input.client_mutation_id))
    }

    async fn update_edge_cluster(
        &self,
        ctx: &Context<'_>,
        input: UpdateEdgeClusterInput,
    ) -> Result<UpdateEdgeClusterPayload> {
        require_non_blank("name", &input.name).map_err(|e| e.extend())?;
        let creator = ctx.data::<SharedResolverCreator>()?;

        tracing::info!(
            edge_cluster_id = %input.id.as_str(),
            name = %input.name,
            "updateEdgeCluster requested"
        );
        creator
            .clone()
            .new_update_edge_cluster_payload(input.id, input.client_mutation_id)
            .map_err(|e| e.extend())
    }

    async fn delete_edge_cluster(
        &self,
        ctx: &Context<'_>,
        input: DeleteEdgeClusterInput,
    ) -> Result<DeleteEdgeClusterPayload> {
        let creator = ctx.data::<SharedResolverCreator>()?;

        tracing::info!(edge_cluster_id = %input.id.as_str(), "deleteEdgeCluster requested");
        creator
            .new_delete_edge_cluster_payload(input.id, input.client_mutation_id)
            .map_err(|e| e.extend())
    }
}
