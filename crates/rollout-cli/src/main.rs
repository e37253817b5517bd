mod commands;

use clap::{Parser, Subcommand};
use commands::ConfigOverrides;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rollout",
    about = "Build, push, and roll out a container image to a Kubernetes deployment"
)]
#[command(version)]
struct Cli {
    /// Path to the config file
    #[arg(long, short = 'c', global = true, default_value = rollout_core::CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build, push, and deploy a freshly tagged image
    Release {
        #[command(flatten)]
        overrides: ConfigOverrides,
        /// Print the tag and commands without running anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the release tag a release started now would use
    Tag,
    /// Show the deployment's containers and their current images
    Status {
        /// Deployment name (overrides deployment.name)
        #[arg(long)]
        deployment: Option<String>,
    },
    /// Check docker, kubectl, and cluster readiness
    Doctor {
        /// Deployment name (overrides deployment.name)
        #[arg(long)]
        deployment: Option<String>,
    },
    /// Write a rollout.toml template
    Init,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Release { overrides, dry_run } => {
            commands::release(&cli.config, overrides, dry_run).await?
        }
        Commands::Tag => commands::tag()?,
        Commands::Status { deployment } => commands::status(&cli.config, deployment).await?,
        Commands::Doctor { deployment } => commands::doctor(&cli.config, deployment).await?,
        Commands::Init => commands::init(&cli.config)?,
    }

    Ok(())
}
