//! `nimbus region` commands

use std::io::Write;

use clap::Subcommand;
use color_eyre::Result;
use eyre::WrapErr;

use nimbus_api::Region;
use nimbus_core::{Layout, OutputOptions, RecordError, RecordSet, render, yes_no};

use super::Context;

/// Marker shown next to the current region in table output
const CURRENT_MARKER: &str = "<=====";

#[derive(Subcommand, Debug)]
pub enum RegionCommands {
    /// List regions, marking the current one
    ///
    /// Fields available to custom output: code, name, country, current.
    #[command(name = "ls", aliases = ["list", "all"])]
    List,
}

/// Run a region subcommand
///
/// # Errors
/// Returns an error if the API call or rendering fails.
pub async fn run<W: Write>(ctx: &Context<'_>, command: &RegionCommands, out: &mut W) -> Result<()> {
    match command {
        RegionCommands::List => {
            let regions = ctx
                .api
                .list_regions()
                .await
                .wrap_err("listing regions failed")?;

            let records = region_records(&regions, ctx.region, ctx.output)?;
            render(&records, ctx.output, &Layout::table(), out)?;
            Ok(())
        }
    }
}

fn region_records(
    regions: &[Region],
    current: Option<&str>,
    output: &OutputOptions,
) -> Result<RecordSet, RecordError> {
    let mut records = RecordSet::with_columns([
        ("code", "Code"),
        ("name", "Name"),
        ("country", "Country"),
        ("current", "Current"),
    ]);

    for region in regions {
        let is_current = current.is_some_and(|code| region.code.eq_ignore_ascii_case(code));
        let marker = if output.is_machine_readable() {
            yes_no(is_current)
        } else if is_current {
            CURRENT_MARKER
        } else {
            ""
        };

        records
            .start_record()
            .append_field("code", &region.code, "Code")?
            .append_field("name", &region.name, "Name")?
            .append_field("country", &region.country_name, "Country")?
            .append_field("current", marker, "Current")?;
    }
    Ok(records)
}
