//! In-memory `CloudApi` for command tests

use std::sync::Mutex;

use async_trait::async_trait;

use nimbus_api::{
    Instance, InstanceSize, KubernetesCluster, KubernetesClusterConfig, Network, Quota, Region,
    Volume,
};
use nimbus_client::{ClientError, CloudApi, Result};

#[derive(Default)]
pub struct MockApi {
    pub sizes: Vec<InstanceSize>,
    pub regions: Vec<Region>,
    pub quota: Quota,
    pub volumes: Vec<Volume>,
    pub networks: Vec<Network>,
    pub instances: Vec<Instance>,
    pub clusters: Vec<KubernetesCluster>,
    /// Endpoint that answers with an error
    pub failing: Option<&'static str>,
    pub calls: Mutex<Vec<&'static str>>,
    pub updates: Mutex<Vec<(String, KubernetesClusterConfig)>>,
}

impl MockApi {
    fn call<T: Clone>(&self, endpoint: &'static str, value: &T) -> Result<T> {
        self.calls.lock().unwrap().push(endpoint);
        if self.failing == Some(endpoint) {
            return Err(ClientError::Api {
                status: 500,
                message: format!("{endpoint} unavailable"),
            });
        }
        Ok(value.clone())
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CloudApi for MockApi {
    async fn list_instance_sizes(&self) -> Result<Vec<InstanceSize>> {
        self.call("sizes", &self.sizes)
    }

    async fn list_regions(&self) -> Result<Vec<Region>> {
        self.call("regions", &self.regions)
    }

    async fn get_quota(&self) -> Result<Quota> {
        self.call("quota", &self.quota)
    }

    async fn list_volumes(&self) -> Result<Vec<Volume>> {
        self.call("volumes", &self.volumes)
    }

    async fn list_dangling_volumes(&self) -> Result<Vec<Volume>> {
        let dangling: Vec<Volume> = self
            .volumes
            .iter()
            .filter(|v| v.status == "dangling")
            .cloned()
            .collect();
        self.call("dangling_volumes", &dangling)
    }

    async fn list_networks(&self) -> Result<Vec<Network>> {
        self.call("networks", &self.networks)
    }

    async fn list_instances(&self) -> Result<Vec<Instance>> {
        self.call("instances", &self.instances)
    }

    async fn list_kubernetes_clusters(&self) -> Result<Vec<KubernetesCluster>> {
        self.call("clusters", &self.clusters)
    }

    async fn update_kubernetes_cluster(
        &self,
        id: &str,
        config: &KubernetesClusterConfig,
    ) -> Result<KubernetesCluster> {
        self.updates
            .lock()
            .unwrap()
            .push((id.to_string(), config.clone()));
        let cluster = self
            .clusters
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .unwrap_or_default();
        self.call("update_cluster", &cluster)
    }
}
