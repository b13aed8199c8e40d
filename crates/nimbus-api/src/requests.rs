//! Request types for the API

use serde::{Deserialize, Serialize};

use crate::responses::KubernetesPool;

/// Body of a Kubernetes cluster update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KubernetesClusterConfig {
    /// Complete list of pools the cluster should have after the update
    pub pools: Vec<KubernetesClusterPoolConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// One node pool in a cluster update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesClusterPoolConfig {
    pub id: String,
    pub count: u32,
    pub size: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub public_ip_node_pool: bool,
}

impl From<&KubernetesPool> for KubernetesClusterPoolConfig {
    fn from(pool: &KubernetesPool) -> Self {
        Self {
            id: pool.id.clone(),
            count: pool.count,
            size: pool.size.clone(),
            public_ip_node_pool: pool.public_ip_node_pool,
        }
    }
}
