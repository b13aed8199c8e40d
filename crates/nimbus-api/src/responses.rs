//! Response types for the API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Paginated list envelope used by the instance and Kubernetes endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub per_page: u64,
    #[serde(default)]
    pub pages: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// A block storage volume
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    pub id: String,
    pub name: String,
    /// Instance the volume is attached to (empty when detached)
    pub instance_id: String,
    /// Kubernetes cluster that owns the volume (empty for standalone volumes)
    pub cluster_id: String,
    pub network_id: String,
    #[serde(rename = "mountpoint")]
    pub mount_point: String,
    pub status: String,
    #[serde(rename = "size_gb")]
    pub size_gigabytes: u64,
    pub bootable: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// A private network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    pub id: String,
    pub name: String,
    /// Human readable label shown in listings
    pub label: String,
    pub default: bool,
    pub cidr: String,
    pub status: String,
}

impl Network {
    /// Name to show for this network: the label, or the name when unlabelled
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

/// A standalone compute instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    pub id: String,
    pub hostname: String,
    pub size: String,
    pub status: String,
    pub network_id: String,
    pub private_ip: String,
    pub public_ip: String,
}

/// A node belonging to a Kubernetes cluster
///
/// Node identifiers are only unique within their cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesInstance {
    pub id: String,
    pub hostname: String,
    pub size: String,
    pub status: String,
}

/// A node pool of a Kubernetes cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesPool {
    pub id: String,
    pub count: u32,
    pub size: String,
    pub instance_names: Vec<String>,
    pub public_ip_node_pool: bool,
}

/// A managed Kubernetes cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesCluster {
    pub id: String,
    pub name: String,
    pub status: String,
    pub network_id: String,
    pub instances: Vec<KubernetesInstance>,
    pub pools: Vec<KubernetesPool>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Account quota: a limit and current usage for every resource kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quota {
    pub instance_count_limit: u64,
    pub instance_count_usage: u64,
    pub cpu_core_limit: u64,
    pub cpu_core_usage: u64,
    pub ram_mb_limit: u64,
    pub ram_mb_usage: u64,
    pub disk_gb_limit: u64,
    pub disk_gb_usage: u64,
    pub disk_volume_count_limit: u64,
    pub disk_volume_count_usage: u64,
    pub disk_snapshot_count_limit: u64,
    pub disk_snapshot_count_usage: u64,
    pub public_ip_address_limit: u64,
    pub public_ip_address_usage: u64,
    pub subnet_count_limit: u64,
    pub subnet_count_usage: u64,
    pub network_count_limit: u64,
    pub network_count_usage: u64,
    pub security_group_limit: u64,
    pub security_group_usage: u64,
    pub security_group_rule_limit: u64,
    pub security_group_rule_usage: u64,
    pub loadbalancer_count_limit: u64,
    pub loadbalancer_count_usage: u64,
    pub objectstore_gb_limit: u64,
    pub objectstore_gb_usage: u64,
    pub database_count_limit: u64,
    pub database_count_usage: u64,
    pub database_cpu_core_limit: u64,
    pub database_cpu_core_usage: u64,
    pub database_ram_mb_limit: u64,
    pub database_ram_mb_usage: u64,
    pub database_disk_gb_limit: u64,
    pub database_disk_gb_usage: u64,
    pub database_snapshot_count_limit: u64,
    pub database_snapshot_count_usage: u64,
}

/// A datacenter region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub out_of_capacity: bool,
    pub country: String,
    pub country_name: String,
    pub default: bool,
}

/// A purchasable instance size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceSize {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub nice_name: String,
    pub description: String,
    pub cpu_cores: u32,
    pub gpu_count: u32,
    pub ram_mb: u64,
    pub disk_gb: u64,
    pub transfer_tb: u64,
    pub selectable: bool,
}
