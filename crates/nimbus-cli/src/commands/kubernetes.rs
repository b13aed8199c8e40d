//! `nimbus kubernetes` commands

use std::io::Write;

use clap::{Args, Subcommand};
use color_eyre::Result;
use eyre::{WrapErr, bail};
use uuid::Uuid;

use nimbus_api::{KubernetesClusterConfig, KubernetesClusterPoolConfig};
use nimbus_core::{Layout, Record, RecordSet, render};

use super::Context;

/// Pool identifiers end up in Kubernetes label values
const MAX_POOL_ID_LEN: usize = 63;

#[derive(Subcommand, Debug)]
pub enum KubernetesCommands {
    /// Manage node pools
    #[command(name = "node-pool", subcommand, aliases = ["nodepool", "pool"])]
    NodePool(NodePoolCommands),
}

#[derive(Subcommand, Debug)]
pub enum NodePoolCommands {
    /// Add a node pool to a Kubernetes cluster
    #[command(name = "create", aliases = ["add"])]
    Create(NodePoolCreateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct NodePoolCreateArgs {
    /// Cluster name or ID
    pub cluster: String,

    /// Name of the new pool (a random ID when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Number of nodes in the pool
    #[arg(short = 'n', long = "nodes", default_value_t = 3)]
    pub nodes: u32,

    /// Node size
    #[arg(short, long, default_value = "g4s.kube.medium")]
    pub size: String,

    /// Give every node in the pool a public IP
    #[arg(long)]
    pub public_ip_node_pool: bool,
}

/// Run a Kubernetes subcommand
///
/// # Errors
/// Returns an error if the cluster cannot be found, the pool is invalid, or
/// an API call or rendering fails.
pub async fn run<W: Write>(
    ctx: &Context<'_>,
    command: &KubernetesCommands,
    out: &mut W,
) -> Result<()> {
    match command {
        KubernetesCommands::NodePool(NodePoolCommands::Create(args)) => {
            create_node_pool(ctx, args, out).await
        }
    }
}

async fn create_node_pool<W: Write>(
    ctx: &Context<'_>,
    args: &NodePoolCreateArgs,
    out: &mut W,
) -> Result<()> {
    let cluster = ctx
        .api
        .find_kubernetes_cluster(&args.cluster)
        .await
        .wrap_err("Kubernetes cluster lookup failed")?;

    let pool_id = pool_id(args.name.as_deref())?;
    if cluster.pools.iter().any(|pool| pool.id == pool_id) {
        bail!("the cluster {} already has a pool named {pool_id}", cluster.name);
    }

    let mut pools: Vec<KubernetesClusterPoolConfig> =
        cluster.pools.iter().map(KubernetesClusterPoolConfig::from).collect();
    pools.push(KubernetesClusterPoolConfig {
        id: pool_id.clone(),
        count: args.nodes,
        size: args.size.clone(),
        public_ip_node_pool: args.public_ip_node_pool,
    });

    let config = KubernetesClusterConfig {
        pools,
        region: ctx.region.map(str::to_string),
    };
    let updated = ctx
        .api
        .update_kubernetes_cluster(&cluster.id, &config)
        .await
        .wrap_err("updating the Kubernetes cluster failed")?;

    let mut records = RecordSet::new();
    records.push(Record::from_pairs([
        ("id", updated.id.clone()),
        ("name", updated.name.clone()),
        ("pool_id", pool_id.chars().take(6).collect()),
    ])?);

    let layout = Layout::message(format!(
        "The pool ({pool_id}) was added to the cluster ({})",
        updated.name
    ));
    render(&records, ctx.output, &layout, out)?;
    Ok(())
}

/// The user's pool name, or a fresh UUID
fn pool_id(name: Option<&str>) -> Result<String> {
    let id = match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => Uuid::new_v4().to_string(),
    };

    if id.chars().count() > MAX_POOL_ID_LEN {
        bail!("the pool name must be less than {} characters", MAX_POOL_ID_LEN + 1);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use nimbus_api::{KubernetesCluster, KubernetesPool};
    use nimbus_core::{OutputFormat, OutputOptions};

    use super::*;
    use crate::commands::mock::MockApi;

    fn api() -> MockApi {
        MockApi {
            clusters: vec![KubernetesCluster {
                id: "c-123".to_string(),
                name: "production".to_string(),
                pools: vec![KubernetesPool {
                    id: "default".to_string(),
                    count: 3,
                    size: "g4s.kube.medium".to_string(),
                    ..KubernetesPool::default()
                }],
                ..KubernetesCluster::default()
            }],
            ..MockApi::default()
        }
    }

    fn args(name: Option<&str>) -> NodePoolCreateArgs {
        NodePoolCreateArgs {
            cluster: "prod".to_string(),
            name: name.map(str::to_string),
            nodes: 2,
            size: "g4s.kube.large".to_string(),
            public_ip_node_pool: true,
        }
    }

    async fn create(api: &MockApi, output: &OutputOptions, name: Option<&str>) -> Result<String> {
        let ctx = Context {
            api,
            output,
            region: Some("LON1"),
        };
        let command = KubernetesCommands::NodePool(NodePoolCommands::Create(args(name)));

        let mut out = Vec::new();
        run(&ctx, &command, &mut out).await?;
        Ok(String::from_utf8(out)?)
    }

    #[tokio::test]
    async fn test_appends_pool_to_existing() {
        let api = api();
        let text = create(&api, &OutputOptions::default(), Some("workers")).await.unwrap();

        assert_eq!(text, "The pool (workers) was added to the cluster (production)\n");

        let updates = api.updates.lock().unwrap();
        let (id, config) = &updates[0];
        assert_eq!(id, "c-123");
        assert_eq!(config.region.as_deref(), Some("LON1"));
        assert_eq!(config.pools.len(), 2);
        assert_eq!(config.pools[0].id, "default");
        assert_eq!(
            config.pools[1],
            KubernetesClusterPoolConfig {
                id: "workers".to_string(),
                count: 2,
                size: "g4s.kube.large".to_string(),
                public_ip_node_pool: true,
            }
        );
    }

    #[tokio::test]
    async fn test_json_shortens_pool_id() {
        let api = api();
        let output = OutputOptions::new(OutputFormat::Json);
        let text = create(&api, &output, Some("gpu-workers")).await.unwrap();

        assert_eq!(text, "{\"id\":\"c-123\",\"name\":\"production\",\"pool_id\":\"gpu-wo\"}\n");
    }

    #[tokio::test]
    async fn test_short_pool_name_kept_whole() {
        let api = api();
        let output = OutputOptions::new(OutputFormat::Custom).with_template("{{pool_id}}");
        let text = create(&api, &output, Some("gpu")).await.unwrap();

        assert_eq!(text, "gpu\n");
    }

    #[tokio::test]
    async fn test_duplicate_pool_rejected() {
        let api = api();
        let err = create(&api, &OutputOptions::default(), Some("default")).await;

        assert!(err.is_err());
        assert!(api.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_cluster() {
        let api = MockApi::default();
        let err = create(&api, &OutputOptions::default(), None).await.unwrap_err();

        assert!(format!("{err:?}").contains("unable to find Kubernetes cluster prod"));
    }

    #[test]
    fn test_generated_pool_id() {
        let id = pool_id(None).unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
        assert!(Uuid::parse_str(&pool_id(Some("")).unwrap()).is_ok());
    }

    #[test]
    fn test_pool_id_length_limit() {
        assert!(pool_id(Some(&"a".repeat(63))).is_ok());
        assert!(pool_id(Some(&"a".repeat(64))).is_err());
    }
}
