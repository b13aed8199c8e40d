//! `nimbus volume` commands

use std::io::Write;

use clap::{Args, Subcommand};
use color_eyre::Result;
use eyre::WrapErr;

use nimbus_core::{Layout, ResolutionContext, render, resolve_volumes};

use super::Context;

#[derive(Subcommand, Debug)]
pub enum VolumeCommands {
    /// List volumes
    ///
    /// Fields available to custom output: id, name, network_id, cluster_id,
    /// instance_id, size_gigabytes, mount_point, status.
    #[command(name = "ls", aliases = ["list", "all"])]
    List(VolumeListArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct VolumeListArgs {
    /// Only list volumes whose cluster no longer exists
    #[arg(short, long)]
    pub dangling: bool,
}

/// Run a volume subcommand
///
/// Notices about the listed volumes go to `notices`, never to `out`.
///
/// # Errors
/// Returns an error if an API call or rendering fails.
pub async fn run<W: Write, N: Write>(
    ctx: &Context<'_>,
    command: &VolumeCommands,
    out: &mut W,
    notices: &mut N,
) -> Result<()> {
    match command {
        VolumeCommands::List(args) => list(ctx, args, out, notices).await,
    }
}

async fn list<W: Write, N: Write>(
    ctx: &Context<'_>,
    args: &VolumeListArgs,
    out: &mut W,
    notices: &mut N,
) -> Result<()> {
    let volumes = if args.dangling {
        ctx.api.list_dangling_volumes().await
    } else {
        ctx.api.list_volumes().await
    }
    .wrap_err("listing volumes failed")?;

    let networks = ctx
        .api
        .list_networks()
        .await
        .wrap_err("listing networks failed")?;
    let instances = ctx
        .api
        .list_instances()
        .await
        .wrap_err("listing instances failed")?;
    let clusters = ctx
        .api
        .list_kubernetes_clusters()
        .await
        .wrap_err("listing Kubernetes clusters failed")?;

    let resolution = ResolutionContext::new(&networks, &clusters, &instances);
    let resolved = resolve_volumes(&volumes, &resolution)?;

    if let Some(notice) = resolved.notice {
        writeln!(notices, "{notice}")?;
    }
    render(&resolved.records, ctx.output, &Layout::table(), out)?;
    Ok(())
}
