//! Test fixtures for API integration tests
//!
//! [`RecordingCreator`] stands in for the production resolver creator: it
//! gives every tenant and edge cluster a fixed name, reports a fixed page
//! and remembers which constructors were called.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_graphql::ID;

use edgecloud_api::graphql::error::ResolverResult;
use edgecloud_api::graphql::types::{
    CreateEdgeClusterPayload, CreateTenantPayload, DeleteEdgeClusterPayload, DeleteTenantPayload,
    EdgeCluster, EdgeClusterTypeConnection, EdgeClusterTypeEdge, PageInfo, Tenant,
    TenantTypeConnection, TenantTypeEdge, UpdateEdgeClusterPayload, UpdateTenantPayload, User,
};
use edgecloud_api::ResolverCreator;

pub const FIXED_TENANT_NAME: &str = "fixture tenant";
pub const FIXED_EDGE_CLUSTER_NAME: &str = "fixture edge cluster";

/// Resolver creator with deterministic output that records its calls
#[derive(Default)]
pub struct RecordingCreator {
    calls: Mutex<Vec<String>>,
}

impl RecordingCreator {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Constructor calls in the order they happened
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: impl Into<String>) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.into());
        }
    }
}

impl ResolverCreator for RecordingCreator {
    fn new_user(self: Arc<Self>, user_id: ID) -> ResolverResult<User> {
        self.record("user");
        User::new(self, user_id)
    }

    fn new_tenant(self: Arc<Self>, tenant_id: ID) -> ResolverResult<Tenant> {
        self.record(format!("tenant:{}", tenant_id.as_str()));
        Tenant::with_name(self, tenant_id, FIXED_TENANT_NAME)
    }

    fn new_tenant_edge(
        self: Arc<Self>,
        tenant_id: ID,
        cursor: String,
    ) -> ResolverResult<TenantTypeEdge> {
        self.record(format!("tenant_edge:{}", cursor));
        TenantTypeEdge::new(self, tenant_id, cursor)
    }

    fn new_tenant_connection(self: Arc<Self>) -> TenantTypeConnection {
        self.record("tenant_connection");
        TenantTypeConnection::new(self)
    }

    fn new_edge_cluster(self: Arc<Self>, edge_cluster_id: ID) -> ResolverResult<EdgeCluster> {
        self.record(format!("edge_cluster:{}", edge_cluster_id.as_str()));
        EdgeCluster::with_name(edge_cluster_id, FIXED_EDGE_CLUSTER_NAME)
    }

    fn new_edge_cluster_edge(
        self: Arc<Self>,
        edge_cluster_id: ID,
        cursor: String,
    ) -> ResolverResult<EdgeClusterTypeEdge> {
        self.record(format!("edge_cluster_edge:{}", cursor));
        EdgeClusterTypeEdge::new(self, edge_cluster_id, cursor)
    }

    fn new_edge_cluster_connection(self: Arc<Self>) -> EdgeClusterTypeConnection {
        self.record("edge_cluster_connection");
        EdgeClusterTypeConnection::new(self)
    }

    fn new_page_info(
        &self,
        start_cursor: Option<String>,
        end_cursor: Option<String>,
        _has_next_page: bool,
        _has_previous_page: bool,
    ) -> PageInfo {
        self.record("page_info");
        PageInfo::new(start_cursor, end_cursor, false, false)
    }

    fn new_create_tenant_payload(
        self: Arc<Self>,
        client_mutation_id: Option<String>,
    ) -> CreateTenantPayload {
        self.record("create_tenant_payload");
        CreateTenantPayload::new(self, client_mutation_id)
    }

    fn new_update_tenant_payload(
        self: Arc<Self>,
        tenant_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<UpdateTenantPayload> {
        self.record("update_tenant_payload");
        UpdateTenantPayload::new(self, tenant_id, client_mutation_id)
    }

    fn new_delete_tenant_payload(
        &self,
        tenant_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<DeleteTenantPayload> {
        self.record("delete_tenant_payload");
        DeleteTenantPayload::new(tenant_id, client_mutation_id)
    }

    fn new_create_edge_cluster_payload(
        self: Arc<Self>,
        client_mutation_id: Option<String>,
    ) -> CreateEdgeClusterPayload {
        self.record("create_edge_cluster_payload");
        CreateEdgeClusterPayload::new(self, client_mutation_id)
    }

    fn new_update_edge_cluster_payload(
        self: Arc<Self>,
        edge_cluster_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<UpdateEdgeClusterPayload> {
        self.record("update_edge_cluster_payload");
        UpdateEdgeClusterPayload::new(self, edge_cluster_id, client_mutation_id)
    }

    fn new_delete_edge_cluster_payload(
        &self,
        edge_cluster_id: ID,
        client_mutation_id: Option<String>,
    ) -> ResolverResult<DeleteEdgeClusterPayload> {
        self.record("delete_edge_cluster_payload");
        DeleteEdgeClusterPayload::new(edge_cluster_id, client_mutation_id)
    }
}
