//! nimbus CLI
//!
//! Command-line client for the cloud provider API

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::{Report, Result, Section};
use eyre::WrapErr;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use nimbus_client::{ClientError, HttpClient};
use nimbus_core::{OutputFormat, OutputOptions};

mod commands;
mod config;

use commands::Context;
use commands::instance::InstanceCommands;
use commands::kubernetes::KubernetesCommands;
use commands::region::RegionCommands;
use commands::volume::VolumeCommands;
use config::Config;

#[derive(Parser)]
#[command(name = "nimbus", version)]
#[command(about = "Command-line client for cloud infrastructure", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table, json or custom
    #[arg(short, long, global = true, default_value = "table")]
    output: OutputFormat,

    /// Indent JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Template for custom output, e.g. "{{id}}: {{name}}"
    #[arg(short = 'f', long = "format", global = true)]
    format: Option<String>,

    /// Region to run the command in
    #[arg(long, global = true)]
    region: Option<String>,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Instance details
    #[command(subcommand, alias = "instances")]
    Instance(InstanceCommands),

    /// Kubernetes clusters
    #[command(subcommand, aliases = ["k8s", "k3s"])]
    Kubernetes(KubernetesCommands),

    /// Show quota and usage
    #[command(alias = "quotas")]
    Quota,

    /// Regions
    #[command(subcommand, alias = "regions")]
    Region(RegionCommands),

    /// Block storage volumes
    #[command(subcommand, alias = "volumes")]
    Volume(VolumeCommands),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load_default(cli.config.as_deref())?.with_env(|key| std::env::var(key).ok());

    run(cli, &config).await.map_err(with_connectivity_hint)
}

async fn run(cli: Cli, config: &Config) -> Result<()> {
    let region = config.region(cli.region.as_deref());

    let api_key = config.api_key.clone().ok_or(ClientError::MissingApiKey)?;
    let mut client = HttpClient::new(&config.api_url, api_key)
        .wrap_err("creating the connection to the API failed")?;
    if let Some(region) = &region {
        client = client.with_region(region.as_str());
    }

    let output = OutputOptions {
        format: cli.output,
        pretty: cli.pretty,
        template: cli.format,
    };
    let ctx = Context {
        api: &client,
        output: &output,
        region: region.as_deref(),
    };

    let mut stdout = io::stdout();
    match &cli.command {
        Commands::Instance(command) => commands::instance::run(&ctx, command, &mut stdout).await,
        Commands::Kubernetes(command) => {
            commands::kubernetes::run(&ctx, command, &mut stdout).await
        }
        Commands::Quota => commands::quota::run(&ctx, &mut stdout).await,
        Commands::Region(command) => commands::region::run(&ctx, command, &mut stdout).await,
        Commands::Volume(command) => {
            commands::volume::run(&ctx, command, &mut stdout, &mut io::stderr()).await
        }
    }
}

/// Whether the failure came from reaching or authenticating against the API
fn is_connectivity_failure(report: &Report) -> bool {
    report
        .chain()
        .filter_map(|cause| cause.downcast_ref::<ClientError>())
        .any(ClientError::is_connectivity)
}

fn with_connectivity_hint(report: Report) -> Report {
    if is_connectivity_failure(&report) {
        report.suggestion(
            "check the API key and URL in the config file or NIMBUS_API_KEY / NIMBUS_API_URL",
        )
    } else {
        report
    }
}
