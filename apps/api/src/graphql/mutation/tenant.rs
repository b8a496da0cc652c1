//! Tenant mutations for EdgeCloud GraphQL API
//!
//! - createTenant
//! - updateTenant
//! - deleteTenant
//!
//! Mutations validate their input and build the payload through the resolver
//! creator. Tenant storage lives in the tenant service; nothing is persisted
//! here.

use async_graphql::{Context, ErrorExtensions, InputObject, Object, Result, ID};

use crate::graphql::creator::SharedResolverCreator;
use crate::graphql::error::require_non_blank;
use crate::graphql::types::{CreateTenantPayload, DeleteTenantPayload, UpdateTenantPayload};

#[derive(Debug, Clone, InputObject)]
pub struct CreateTenantInput {
    /// Display name of the new tenant
    pub name: String,
    pub client_mutation_id: Option<String>,
}

#[derive(Debug, Clone, InputObject)]
pub struct UpdateTenantInput {
    pub id: ID,
    /// New display name
    pub name: String,
    pub client_mutation_id: Option<String>,
}

#[derive(Debug, Clone, InputObject)]
pub struct DeleteTenantInput {
    pub id: ID,
    pub client_mutation_id: Option<String>,
}

/// Tenant-related mutations
#[derive(Default)]
pub struct TenantMutation;

#[Object]
impl TenantMutation {
    /// Create a tenant
    async fn create_tenant(
        &self,
        ctx: &Context<'_>,
        input: CreateTenantInput,
    ) -> Result<CreateTenantPayload> {
        require_non_blank("name", &input.name).map_err(|e| e.extend())?;
        let creator = ctx.data::<SharedResolverCreator>()?;

        tracing::info!(name = %input.name, "createTenant requested");
        Ok(creator
            .clone()
            .new_create_tenant_payload(input.client_mutation_id))
    }

    /// Rename an existing tenant
    async fn update_tenant(
        &self,
        ctx: &Context<'_>,
        input: UpdateTenantInput,
    ) -> Result<UpdateTenantPayload> {
        require_non_blank("name", &input.name).map_err(|e| e.extend())?;
        let creator = ctx.data::<SharedResolverCreator>()?;

        tracing::info!(tenant_id = %input.id.as_str(), name = %input.name, "updateTenant requested");
        creator
            .clone()
            .new_update_tenant_payload(input.id, input.client_mutation_id)
            .map_err(|e| e.extend())
    }

    /// Delete a tenant
    async fn delete_tenant(
        &self,
        ctx: &Context<'_>,
        input: DeleteTenantInput,
    ) -> Result<DeleteTenantPayload> {
        let creator = ctx.data::<SharedResolverCreator>()?;

        tracing::info!(tenant_id = %input.id.as_str(), "deleteTenant requested");
        creator
            .new_delete_tenant_payload(input.id, input.client_mutation_id)
            .map_err(|e| e.extend())
    }
}
