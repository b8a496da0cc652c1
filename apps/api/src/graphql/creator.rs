//! Resolver factory
//!
//! Every resolver holds a [`SharedResolverCreator`] and asks it for the
//! resolvers it returns instead of calling their constructors itself. The
//! schema injects one creator per process; tests substitute their own.

use std::sync::Arc;

use async_graphql::ID;
use tracing::Span;
use uuid::Uuid;

use super::error::ResolverResult;
use super::types::{
    CreateEdgeClusterPayload, CreateTenantPayload, DeleteEdgeClusterPayload, DeleteTenantPayload,
    EdgeCluster, EdgeClusterTypeConnection, EdgeClusterTypeEdge, PageInfo, Tenant,
    TenantTypeConnection, TenantTypeEdge, UpdateEdgeClusterPayload, UpdateTenantPayload, User,
};

/// Handle to the resolver factory shared by every resolver of a schema
pub type SharedResolverCreator = Arc<dyn ResolverCreator>;

/// Constructs every resolver kind from its identifying key.
///
/// Methods taking `self: Arc<Self>` hand the creator itself to the resolver
/// they build, so child resolvers keep going through the same factory. Call
/// them on a clone of the shared handle: `creator.clone().new_tenant(id)`.
pub trait ResolverCreator: Send + Sync + 'static {
    fn new_user(self: Arc<Self>, user_id: ID) -> ResolverResult<User>;

    fn new_tenant(self: Arc<Self>, tenant_id: ID) -> ResolverResult<Tenant>;

    fn new_tenant_edge(self: Arc<Self>, tenant_id: ID, cursor: String)
        -> ResolverResult<TenantTypeEdge>;

    fn new_tenant_connection(self: Arc<Self>) -> TenantTypeConnection;

    fn new_edge_cluster(self: Arc<Self>, edge_cluster_id: ID) -> ResolverResult<EdgeCluster>;

    fn new_edge_cluster_edge(
        self: Arc<Self>,
        edge_cluster_id: ID,
        cursor: String,
    ) -> ResolverResult<EdgeClusterTypeEdge>;

    fn new_edge_cluster_connection(self: Arc<Self>) -> EdgeClusterTypeConnection;

    fn new_page_info(
        &self,
        start_cursor: Option<String>,
        end_cursor: Option<String>,
        has_next_page: bool,
        has_previous_page: bool,
    ) -> PageInfo;

    fn new_create_tenant_payload(
        self: Arc<Self>,
        client_mutation_id: Option<String>,
    ) -> CreateTenantPayload;

    fn new_update_tenant_payload(
        self: Arc<Self>,
        tenant_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<UpdateTenantPayload>;

    fn new_delete_tenant_payload(
        &self,
        tenant_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<DeleteTenantPayload>;

    fn new_create_edge_cluster_payload(
        self: Arc<Self>,
        client_mutation_id: Option<String>,
    ) -> CreateEdgeClusterPayload;

    fn new_update_edge_cluster_payload(
        self: Arc<Self>,
        edge_cluster_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<UpdateEdgeClusterPayload>;

    fn new_delete_edge_cluster_payload(
        &self,
        edge_cluster_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<DeleteEdgeClusterPayload>;
}

/// Random opaque identifier used for generated ids and display names
pub fn random_identifier() -> String {
    Uuid::new_v4().simple().to_string()
}

/// The production resolver factory
pub struct DefaultResolverCreator {
    span: Span,
}

impl DefaultResolverCreator {
    pub fn new() -> Self {
        Self {
            span: tracing::debug_span!("resolver_creator"),
        }
    }

    /// Create a creator already wrapped in a shared handle
    pub fn shared() -> SharedResolverCreator {
        Arc::new(Self::new())
    }
}

impl Default for DefaultResolverCreator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverCreator for DefaultResolverCreator {
    fn new_user(self: Arc<Self>, user_id: ID) -> ResolverResult<User> {
        tracing::debug!(parent: &self.span, user_id = %user_id.as_str(), "Creating user resolver");
        User::new(self, user_id)
    }

    fn new_tenant(self: Arc<Self>, tenant_id: ID) -> ResolverResult<Tenant> {
        tracing::debug!(parent: &self.span, tenant_id = %tenant_id.as_str(), "Creating tenant resolver");
        Tenant::new(self, tenant_id)
    }

    fn new_tenant_edge(
        self: Arc<Self>,
        tenant_id: ID,
        cursor: String,
    ) -> ResolverResult<TenantTypeEdge> {
        tracing::debug!(
            parent: &self.span,
            tenant_id = %tenant_id.as_str(),
            cursor = %cursor,
            "Creating tenant edge resolver"
        );
        TenantTypeEdge::new(self, tenant_id, cursor)
    }

    fn new_tenant_connection(self: Arc<Self>) -> TenantTypeConnection {
        tracing::debug!(parent: &self.span, "Creating tenant connection resolver");
        TenantTypeConnection::new(self)
    }

    fn new_edge_cluster(self: Arc<Self>, edge_cluster_id: ID) -> ResolverResult<EdgeCluster> {
        tracing::debug!(
            parent: &self.span,
            edge_cluster_id = %edge_cluster_id.as_str(),
            "Creating edge cluster resolver"
        );
        EdgeCluster::new(edge_cluster_id)
    }

    fn new_edge_cluster_edge(
        self: Arc<Self>,
        edge_cluster_id: ID,
        cursor: String,
    ) -> ResolverResult<EdgeClusterTypeEdge> {
        tracing::debug!(
            parent: &self.span,
            edge_cluster_id = %edge_cluster_id.as_str(),
            cursor = %cursor,
            "Creating edge cluster edge resolver"
        );
        EdgeClusterTypeEdge::new(self, edge_cluster_id, cursor)
    }

    fn new_edge_cluster_connection(self: Arc<Self>) -> EdgeClusterTypeConnection {
        tracing::debug!(parent: &self.span, "Creating edge cluster connection resolver");
        EdgeClusterTypeConnection::new(self)
    }

    fn new_page_info(
        &self,
        start_cursor: Option<String>,
        end_cursor: Option<String>,
        has_next_page: bool,
        has_previous_page: bool,
    ) -> PageInfo {
        tracing::debug!(
            parent: &self.span,
            has_next_page,
            has_previous_page,
            "Creating page info resolver"
        );
        PageInfo::new(start_cursor, end_cursor, has_next_page, has_previous_page)
    }

    fn new_create_tenant_payload(
        self: Arc<Self>,
        client_mutation_id: Option<String>,
    ) -> CreateTenantPayload {
        tracing::debug!(parent: &self.span, "Creating createTenant payload resolver");
        CreateTenantPayload::new(self, client_mutation_id)
    }

    fn new_update_tenant_payload(
        self: Arc<Self>,
        tenant_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<UpdateTenantPayload> {
        tracing::debug!(
            parent: &self.span,
            tenant_id = %tenant_id.as_str(),
            "Creating updateTenant payload resolver"
        );
        UpdateTenantPayload::new(self, tenant_id, client_mutation_id)
    }

    fn new_delete_tenant_payload(
        &self,
        tenant_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<DeleteTenantPayload> {
        tracing::debug!(
            parent: &self.span,
            tenant_id = %tenant_id.as_str(),
            "Creating deleteTenant payload resolver"
        );
        DeleteTenantPayload::new(tenant_id, client_mutation_id)
    }

    fn new_create_edge_cluster_payload(
        self: Arc<Self>,
        client_mutation_id: Option<String>,
    ) -> CreateEdgeClusterPayload {
        tracing::debug!(parent: &self.span, "Creating createEdgeCluster payload resolver");
        CreateEdgeClusterPayload::new(self, client_mutation_id)
    }

    fn new_update_edge_cluster_payload(
        self: Arc<Self>,
        edge_cluster_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<UpdateEdgeClusterPayload> {
        tracing::debug!(
            parent: &self.span,
            edge_cluster_id = %edge_cluster_id.as_str(),
            "Creating updateEdgeCluster payload resolver"
        );
        UpdateEdgeClusterPayload::new(self, edge_cluster_id, client_mutation_id)
    }

    fn new_delete_edge_cluster_payload(
        &self,
        edge_cluster_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<DeleteEdgeClusterPayload> {
        tracing::debug!(
            parent: &self.span,
            edge_cluster_id = %edge_cluster_id.as_str(),
            "Creating deleteEdgeCluster payload resolver"
        );
        DeleteEdgeClusterPayload::new(edge_cluster_id, client_mutation_id)
    }
}
