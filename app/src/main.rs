#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use orpheus_config::Config;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;
mod render;

use command::{
    AlertsInput, AlertsStrategy, CommandStrategy, InfoStrategy, InitStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "orpheus")]
#[command(about = "Personalised daily alerts for Indianapolis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Gather current conditions and print ranked recommendations
    Alerts {
        /// Print the cycle report as JSON
        #[arg(long)]
        json: bool,

        /// Refresh every SECS seconds until interrupted
        #[arg(
            short = 'w',
            long,
            value_name = "SECS",
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        watch: Option<u64>,
    },
    /// Show configuration
    Info,
    /// Initialize configuration and profile templates
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            config
                .as_ref()
                .map_or("info", |c| c.logging.filter.as_str()),
        )
    });
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Alerts { json, watch } => {
            let input = AlertsInput {
                config: config?,
                json,
                watch: watch.map(Duration::from_secs),
            };
            AlertsStrategy.execute(input).await
        }
        Commands::Info => InfoStrategy.execute(config?).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
