//! GraphQL mutations for EdgeCloud
//!
//! Relay-style mutations: each takes a single `input` object carrying an
//! optional `clientMutationId` that is echoed back in the payload.

mod edge_cluster;
mod tenant;

pub use edge_cluster::{
    CreateEdgeClusterInput, DeleteEdgeClusterInput, EdgeClusterMutation, UpdateEdgeClusterInput,
};
pub use tenant::{CreateTenantInput, DeleteTenantInput, TenantMutation, UpdateTenantInput};

use async_graphql::MergedObject;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(TenantMutation, EdgeClusterMutation);
