//! `nimbus instance` commands

use std::io::Write;

use clap::Subcommand;
use color_eyre::Result;
use eyre::WrapErr;

use nimbus_api::InstanceSize;
use nimbus_core::{Layout, RecordError, RecordSet, render, yes_no};

use super::Context;

/// Name fragments of sizes reserved for managed services
const SERVICE_SIZE_MARKERS: [&str; 4] = [".kube.", ".k3s.", ".db.", ".kf."];

#[derive(Subcommand, Debug)]
pub enum InstanceCommands {
    /// List instance sizes
    #[command(name = "size", aliases = ["sizes", "all"])]
    Size,
}

/// Run an instance subcommand
///
/// # Errors
/// Returns an error if the API call or rendering fails.
pub async fn run<W: Write>(ctx: &Context<'_>, command: &InstanceCommands, out: &mut W) -> Result<()> {
    match command {
        InstanceCommands::Size => list_sizes(ctx, out).await,
    }
}

async fn list_sizes<W: Write>(ctx: &Context<'_>, out: &mut W) -> Result<()> {
    let sizes = ctx
        .api
        .list_instance_sizes()
        .await
        .wrap_err("listing instance sizes failed")?;

    let records = size_records(&sizes)?;
    render(&records, ctx.output, &Layout::table(), out)?;
    Ok(())
}

/// Whether a size can be used for a plain instance
fn is_instance_size(size: &InstanceSize) -> bool {
    !SERVICE_SIZE_MARKERS
        .iter()
        .any(|marker| size.name.contains(marker))
}

fn size_records(sizes: &[InstanceSize]) -> Result<RecordSet, RecordError> {
    let mut records = RecordSet::with_columns([
        ("name", "Name"),
        ("description", "Description"),
        ("type", "Type"),
        ("cpu_cores", "CPU"),
        ("ram_mb", "RAM"),
        ("disk_gb", "SSD"),
        ("selectable", "Selectable"),
    ]);

    for size in sizes.iter().filter(|size| is_instance_size(size)) {
        records
            .start_record()
            .append_field("name", &size.name, "Name")?
            .append_field("description", &size.description, "Description")?
            .append_field("type", "Instance", "Type")?
            .append_field("cpu_cores", size.cpu_cores.to_string(), "CPU")?
            .append_field("ram_mb", size.ram_mb.to_string(), "RAM")?
            .append_field("disk_gb", size.disk_gb.to_string(), "SSD")?
            .append_field("selectable", yes_no(size.selectable), "Selectable")?;
    }
    Ok(records)
}
