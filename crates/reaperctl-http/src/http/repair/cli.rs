//! Repair-run CLI interface.

use chrono::NaiveDate;
use clap::Subcommand;
use log::debug;
use reaperctl::types::parse_date;
use reaperctl::{Parallelism, ReaperError, RunFilter, RunState};

use crate::http::common::ReaperApi;
use crate::http::render;
use crate::http::repair::client::{
    NewRepairRun, add_repair_run, delete_repair_run, list_repair_runs, set_repair_run_state,
    view_repair_run,
};

#[derive(Debug, Subcommand)]
pub enum RepairCommands {
    /// Create a repair run
    Add {
        /// The cluster name
        #[arg(long)]
        cluster: Option<String>,
        /// The keyspace name
        #[arg(long)]
        keyspace: Option<String>,
        /// The tables to repair
        #[arg(long, value_delimiter = ',')]
        tables: Vec<String>,
        /// The owner
        #[arg(long)]
        owner: Option<String>,
        /// The cause for the repair
        #[arg(long)]
        cause: Option<String>,
        /// The number of segments
        #[arg(long, default_value_t = 200)]
        segments: u32,
        /// The parallelism to use (default SEQUENTIAL)
        #[arg(long)]
        par: Option<Parallelism>,
        /// The intensity
        #[arg(long, default_value_t = 0.5)]
        intensity: f64,
    },
    /// Show one repair run
    View {
        /// The repair run ID
        #[arg(long)]
        id: Option<i64>,
    },
    /// List repair runs
    List {
        /// Filter by run state (sent to the service)
        #[arg(long)]
        run_state: Option<RunState>,
        /// Filter by cluster
        #[arg(long)]
        cluster: Option<String>,
        /// Filter by keyspace
        #[arg(long)]
        keyspace: Option<String>,
        /// Filter by tables (comma separated list of tables)
        #[arg(long, value_delimiter = ',')]
        tables: Vec<String>,
        /// Filter by owner
        #[arg(long)]
        owner: Option<String>,
        /// Filter by cause
        #[arg(long)]
        cause: Option<String>,
        /// Only runs started on or after this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start_after: Option<NaiveDate>,
        /// Only runs started on or before this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start_before: Option<NaiveDate>,
    },
    /// Pause a running repair
    Pause {
        /// The repair run ID
        #[arg(long)]
        id: Option<i64>,
    },
    /// Resume a paused repair
    Resume {
        /// The repair run ID
        #[arg(long)]
        id: Option<i64>,
    },
    /// Delete a repair run
    Delete {
        /// The repair run ID
        #[arg(long)]
        id: Option<i64>,
        /// The owner
        #[arg(long)]
        owner: Option<String>,
    },
}

fn require_id(id: Option<i64>) -> Result<i64, ReaperError> {
    match id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ReaperError::config("please provide a valid ID")),
    }
}

async fn change_state(api: &ReaperApi, id: i64, state: RunState) -> Result<(), ReaperError> {
    let body = set_repair_run_state(api, id, state).await?;
    render::notice(&format!("State changed to {state}"));
    if !body.is_empty() {
        println!("{body}");
    }
    Ok(())
}

pub async fn handle_repair_command(
    api: &ReaperApi,
    command: RepairCommands,
) -> Result<(), ReaperError> {
    match command {
        RepairCommands::Add {
            cluster,
            keyspace,
            tables,
            owner,
            cause,
            segments,
            par,
            intensity,
        } => {
            let Some(cluster) = cluster else {
                return Err(ReaperError::config("please provide a cluster"));
            };
            let Some(keyspace) = keyspace else {
                return Err(ReaperError::config("please provide a keyspace"));
            };
            let Some(owner) = owner else {
                return Err(ReaperError::config("please provide an owner"));
            };
            let Some(cause) = cause else {
                return Err(ReaperError::config("please provide a cause"));
            };

            let new = NewRepairRun {
                cluster,
                keyspace,
                tables,
                owner,
                cause,
                segments,
                parallelism: par.unwrap_or_default(),
                intensity,
            };
            let run = add_repair_run(api, &new).await?;

            render::notice(&format!("Repair #{} correctly added", run.id));
            println!("{}", run.detail());
            render::notice("NOTE: the new repair run starts paused, resume it to begin repairing");
            Ok(())
        }
        RepairCommands::View { id } => {
            let id = require_id(id)?;
            let run = view_repair_run(api, id).await?;
            debug!("fetched {run}");
            println!("{}", run.detail());
            Ok(())
        }
        RepairCommands::List {
            run_state,
            cluster,
            keyspace,
            tables,
            owner,
            cause,
            start_after,
            start_before,
        } => {
            let runs = list_repair_runs(api, run_state).await?;
            let filter = RunFilter {
                cluster,
                keyspace,
                tables,
                owner,
                cause,
                started_after: start_after,
                started_before: start_before,
            };
            for run in runs.iter().filter(|r| filter.matches(r)) {
                println!("{}", run.detail());
            }
            Ok(())
        }
        RepairCommands::Pause { id } => {
            let id = require_id(id)?;
            change_state(api, id, RunState::Paused).await
        }
        RepairCommands::Resume { id } => {
            let id = require_id(id)?;
            change_state(api, id, RunState::Running).await
        }
        RepairCommands::Delete { id, owner } => {
            let id = require_id(id)?;
            let Some(owner) = owner else {
                return Err(ReaperError::config("please provide a valid owner"));
            };
            let body = delete_repair_run(api, id, &owner).await?;
            println!("{body}");
            Ok(())
        }
    }
}
