//! Cross-resource resolution for volume listings
//!
//! Volumes reference networks, clusters and instances by ID. The listing shows
//! names instead, looked up in collections fetched once up front.

use std::collections::HashMap;
use std::fmt;

use nimbus_api::{Instance, KubernetesCluster, Network, Volume};

use crate::error::RecordError;
use crate::record::RecordSet;

/// Status of a volume whose owning cluster no longer exists
pub const DANGLING: &str = "dangling";

/// Machine keys and labels of a volume row
pub const VOLUME_COLUMNS: [(&str, &str); 8] = [
    ("id", "ID"),
    ("name", "Name"),
    ("network_id", "Network"),
    ("cluster_id", "Cluster"),
    ("instance_id", "Instance"),
    ("size_gigabytes", "Size"),
    ("mount_point", "Mount Point"),
    ("status", "Status"),
];

/// Informational message produced alongside a record set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// At least one volume was reported dangling by the API
    DanglingVolumes,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::DanglingVolumes => write!(
                f,
                "Volumes with status '{DANGLING}' mean they are attached to a cluster that no \
                 longer exists. You can attach them to an instance, or delete them if they are \
                 no longer needed."
            ),
        }
    }
}

/// Identifier-keyed lookups over the auxiliary collections of one invocation
#[derive(Debug, Default)]
pub struct ResolutionContext<'a> {
    networks: HashMap<&'a str, &'a Network>,
    clusters: HashMap<&'a str, &'a KubernetesCluster>,
    instances: HashMap<&'a str, &'a Instance>,
}

impl<'a> ResolutionContext<'a> {
    /// Index the fetched collections
    ///
    /// When an ID appears twice the first entity wins.
    #[must_use]
    pub fn new(
        networks: &'a [Network],
        clusters: &'a [KubernetesCluster],
        instances: &'a [Instance],
    ) -> Self {
        Self {
            networks: index(networks, |n| &n.id),
            clusters: index(clusters, |c| &c.id),
            instances: index(instances, |i| &i.id),
        }
    }

    /// Display name of a network, empty when absent or unknown
    #[must_use]
    pub fn network_name(&self, id: &str) -> &'a str {
        if id.is_empty() {
            return "";
        }
        self.networks
            .get(id)
            .copied()
            .map_or("", Network::display_name)
    }

    #[must_use]
    pub fn cluster(&self, id: &str) -> Option<&'a KubernetesCluster> {
        if id.is_empty() {
            return None;
        }
        self.clusters.get(id).copied()
    }

    /// Hostname of an instance, empty when absent or unknown
    ///
    /// Cluster nodes are looked up inside their own cluster since node IDs are
    /// only unique per cluster. Without a cluster the global instance list is
    /// used.
    #[must_use]
    pub fn instance_name(&self, cluster: Option<&'a KubernetesCluster>, id: &str) -> &'a str {
        if id.is_empty() {
            return "";
        }
        match cluster {
            Some(cluster) => cluster
                .instances
                .iter()
                .find(|node| node.id == id)
                .map_or("", |node| node.hostname.as_str()),
            None => self
                .instances
                .get(id)
                .copied()
                .map_or("", |instance| instance.hostname.as_str()),
        }
    }
}

fn index<'a, T>(items: &'a [T], id: impl Fn(&'a T) -> &'a String) -> HashMap<&'a str, &'a T> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        map.entry(id(item).as_str()).or_insert(item);
    }
    map
}

/// A volume with its references replaced by display names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVolume<'a> {
    pub volume: &'a Volume,
    pub network: &'a str,
    pub cluster: &'a str,
    pub instance: &'a str,
    pub status: &'a str,
}

impl<'a> ResolvedVolume<'a> {
    /// Resolve one volume against the context
    #[must_use]
    pub fn new(volume: &'a Volume, ctx: &ResolutionContext<'a>) -> Self {
        let cluster = ctx.cluster(&volume.cluster_id);
        let status = if !volume.cluster_id.is_empty() && cluster.is_none() {
            DANGLING
        } else {
            volume.status.as_str()
        };

        Self {
            volume,
            network: ctx.network_name(&volume.network_id),
            cluster: cluster.map_or("", |c| c.name.as_str()),
            instance: ctx.instance_name(cluster, &volume.instance_id),
            status,
        }
    }
}

/// Volume rows ready for rendering
#[derive(Debug, Clone)]
pub struct ResolvedVolumes {
    pub records: RecordSet,
    /// Message to show outside the structured output, if any
    pub notice: Option<Notice>,
}

/// Build the volume listing rows, sorted by name
///
/// # Errors
/// Only fails if the row schema itself is inconsistent.
pub fn resolve_volumes(
    volumes: &[Volume],
    ctx: &ResolutionContext<'_>,
) -> Result<ResolvedVolumes, RecordError> {
    let notice = volumes
        .iter()
        .any(|volume| volume.status == DANGLING)
        .then_some(Notice::DanglingVolumes);

    let mut sorted: Vec<&Volume> = volumes.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut records = RecordSet::with_columns(VOLUME_COLUMNS);
    for volume in sorted {
        let row = ResolvedVolume::new(volume, ctx);
        if row.status == DANGLING && volume.status != DANGLING {
            tracing::debug!(
                volume = %volume.id,
                cluster = %volume.cluster_id,
                "cluster missing, marking volume dangling"
            );
        }

        records
            .start_record()
            .append_field("id", &volume.id, "ID")?
            .append_field("name", &volume.name, "Name")?
            .append_field("network_id", row.network, "Network")?
            .append_field("cluster_id", row.cluster, "Cluster")?
            .append_field("instance_id", row.instance, "Instance")?
            .append_field("size_gigabytes", format!("{} GB", volume.size_gigabytes), "Size")?
            .append_field("mount_point", &volume.mount_point, "Mount Point")?
            .append_field("status", row.status, "Status")?;
    }

    Ok(ResolvedVolumes { records, notice })
}
