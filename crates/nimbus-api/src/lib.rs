//! nimbus-api: Shared API types
//!
//! Contains the resource and request types exchanged with the cloud provider
//! API, used by the client and the CLI.

pub mod requests;
pub mod responses;

pub use requests::{KubernetesClusterConfig, KubernetesClusterPoolConfig};
pub use responses::{
    Instance, InstanceSize, KubernetesCluster, KubernetesInstance, KubernetesPool, Network,
    PaginatedResponse, Quota, Region, Volume,
};
