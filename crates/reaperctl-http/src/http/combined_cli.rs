//! Combined CLI interface for the reaperctl client.

use clap::{Parser, Subcommand};
use reaperctl::ReaperError;

use crate::http::cluster::cli::{ClusterCommands, handle_cluster_command};
use crate::http::common::ReaperApi;
use crate::http::repair::cli::{RepairCommands, handle_repair_command};
use crate::http::schedule::cli::{ScheduleCommands, handle_schedule_command};

/// Environment fallback for the target host.
pub const HOST_ENV_VAR: &str = "REAPER_HOST";

#[derive(Debug, Parser)]
#[command(name = "reaperctl")]
#[command(about = "Command line client for the Reaper repair orchestration service")]
#[command(version)]
pub struct Cli {
    /// The Reaper host, as host[:port]. Falls back to $REAPER_HOST.
    #[arg(long)]
    pub host: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect and register clusters
    #[command(subcommand)]
    Cluster(ClusterCommands),
    /// Manage repair runs
    #[command(subcommand)]
    Repair(RepairCommands),
    /// Manage repair schedules
    #[command(subcommand)]
    Schedule(ScheduleCommands),
}

/// Resolves the target host from the flag, then from the environment value
/// the caller read from [`HOST_ENV_VAR`].
pub fn resolve_host(
    flag: Option<String>,
    env: Option<String>,
) -> Result<String, ReaperError> {
    flag.into_iter()
        .chain(env)
        .find(|host| !host.is_empty())
        .ok_or_else(|| {
            ReaperError::config("please provide a reaper host (--host or $REAPER_HOST)")
        })
}

pub async fn handle_cli_command(api: &ReaperApi, command: Commands) -> Result<(), ReaperError> {
    match command {
        Commands::Cluster(command) => handle_cluster_command(api, command).await,
        Commands::Repair(command) => handle_repair_command(api, command).await,
        Commands::Schedule(command) => handle_schedule_command(api, command).await,
    }
}
