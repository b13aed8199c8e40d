//! Data-fetch trait consumed by the CLI commands

use async_trait::async_trait;

use nimbus_api::{
    Instance, InstanceSize, KubernetesCluster, KubernetesClusterConfig, Network, Quota, Region,
    Volume,
};

use crate::error::{ClientError, Result};

/// Read and update operations against the cloud provider
///
/// Every method performs a single attempt and returns the collection exactly as
/// the API delivered it.
#[async_trait]
pub trait CloudApi: Send + Sync {
    async fn list_instance_sizes(&self) -> Result<Vec<InstanceSize>>;
    async fn list_regions(&self) -> Result<Vec<Region>>;
    async fn get_quota(&self) -> Result<Quota>;
    async fn list_volumes(&self) -> Result<Vec<Volume>>;
    async fn list_dangling_volumes(&self) -> Result<Vec<Volume>>;
    async fn list_networks(&self) -> Result<Vec<Network>>;
    async fn list_instances(&self) -> Result<Vec<Instance>>;
    async fn list_kubernetes_clusters(&self) -> Result<Vec<KubernetesCluster>>;
    async fn update_kubernetes_cluster(
        &self,
        id: &str,
        config: &KubernetesClusterConfig,
    ) -> Result<KubernetesCluster>;

    /// Find a cluster by ID or name
    async fn find_kubernetes_cluster(&self, search: &str) -> Result<KubernetesCluster> {
        let clusters = self.list_kubernetes_clusters().await?;
        find_cluster(clusters, search)
    }
}

/// Pick the cluster matching `search`
///
/// An exact ID or name match wins; otherwise the search must be a prefix of
/// exactly one cluster's ID or name.
///
/// # Errors
/// Returns `ClusterNotFound` when nothing matches and `AmbiguousCluster` when
/// several clusters share the prefix.
pub fn find_cluster(mut clusters: Vec<KubernetesCluster>, search: &str) -> Result<KubernetesCluster> {
    if let Some(exact) = clusters
        .iter()
        .position(|c| c.id == search || c.name == search)
    {
        return Ok(clusters.swap_remove(exact));
    }

    let mut partial: Vec<KubernetesCluster> = clusters
        .into_iter()
        .filter(|c| !search.is_empty() && (c.id.starts_with(search) || c.name.starts_with(search)))
        .collect();

    match partial.len() {
        0 => Err(ClientError::ClusterNotFound(search.to_string())),
        1 => Ok(partial.remove(0)),
        matches => Err(ClientError::AmbiguousCluster {
            search: search.to_string(),
            matches,
        }),
    }
}
