//! GraphQL type definitions for EdgeCloud
//!
//! Every object here is a resolver: it carries the identifying key of its
//! entity plus the shared resolver creator used to build related objects.

mod edge_cluster;
mod page_info;
mod payloads;
mod tenant;
mod user;

pub use edge_cluster::{EdgeCluster, EdgeClusterTypeConnection, EdgeClusterTypeEdge};
pub use page_info::PageInfo;
pub use payloads::{
    CreateEdgeClusterPayload, CreateTenantPayload, DeleteEdgeClusterPayload, DeleteTenantPayload,
    UpdateEdgeClusterPayload, UpdateTenantPayload,
};
pub use tenant::{Tenant, TenantTypeConnection, TenantTypeEdge};
pub use user::User;
