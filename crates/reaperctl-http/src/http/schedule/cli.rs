//! Repair-schedule CLI interface.

use clap::Subcommand;
use reaperctl::{
    Parallelism, ReaperError, ScheduleFilter, ScheduleSortKey, ScheduleState,
    sort_by_next_activation,
};

use crate::http::common::ReaperApi;
use crate::http::render;
use crate::http::schedule::client::{
    NewRepairSchedule, add_schedule, delete_schedule, list_schedules, set_schedule_state,
    view_schedule,
};

#[derive(Debug, Subcommand)]
pub enum ScheduleCommands {
    /// Create a repair schedule
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
        /// The number of segments
        #[arg(long, default_value_t = 200)]
        segments: u32,
        /// The parallelism to use (default SEQUENTIAL)
        #[arg(long)]
        par: Option<Parallelism>,
        /// The intensity
        #[arg(long, default_value_t = 0.5)]
        intensity: f64,
        /// Use incremental repairs
        #[arg(long)]
        incremental: bool,
        /// Number of days between repairs
        #[arg(long, default_value_t = 14)]
        schedule_days_between: u32,
        /// Time at which to start the scheduling
        #[arg(long)]
        schedule_trigger_time: Option<String>,
    },
    /// Show one repair schedule
    View {
        /// The schedule ID
        #[arg(long)]
        id: Option<String>,
    },
    /// List repair schedules
    List {
        /// Filter by cluster (sent to the service)
        #[arg(long)]
        cluster: Option<String>,
        /// Filter by keyspace (sent to the service)
        #[arg(long)]
        keyspace: Option<String>,
        /// Filter by state
        #[arg(long)]
        state: Option<ScheduleState>,
        /// Sort by next-activation
        #[arg(long)]
        sort_by: Option<ScheduleSortKey>,
        /// Revert the sorting
        #[arg(long)]
        reverse_sort: bool,
    },
    /// Show the schedule that activates next
    Next,
    /// Pause a schedule
    Pause {
        /// The schedule ID
        #[arg(long)]
        id: Option<String>,
    },
    /// Resume a paused schedule
    Resume {
        /// The schedule ID
        #[arg(long)]
        id: Option<String>,
    },
    /// Delete a schedule
    Delete {
        /// The schedule ID
        #[arg(long)]
        id: Option<String>,
        /// The owner
        #[arg(long)]
        owner: Option<String>,
    },
}

fn require_id(id: Option<String>) -> Result<String, ReaperError> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ReaperError::config("please provide a valid ID")),
    }
}

async fn change_state(
    api: &ReaperApi,
    id: &str,
    state: ScheduleState,
) -> Result<(), ReaperError> {
    let body = set_schedule_state(api, id, state).await?;
    render::notice(&format!("State changed to {state}"));
    if !body.is_empty() {
        println!("{body}");
    }
    Ok(())
}

pub async fn handle_schedule_command(
    api: &ReaperApi,
    command: ScheduleCommands,
) -> Result<(), ReaperError> {
    match command {
        ScheduleCommands::Add {
            cluster,
            keyspace,
            tables,
            owner,
            segments,
            par,
            intensity,
            incremental,
            schedule_days_between,
            schedule_trigger_time,
        } => {
            if incremental {
                println!("NOTE: incremental repairs are not supported yet");
            }
            let Some(cluster) = cluster else {
                return Err(ReaperError::config("please provide a cluster"));
            };
            let Some(keyspace) = keyspace else {
                return Err(ReaperError::config("please provide a keyspace"));
            };
            let Some(owner) = owner else {
                return Err(ReaperError::config("please provide an owner"));
            };

            let new = NewRepairSchedule {
                cluster,
                keyspace,
                tables,
                owner,
                segments,
                parallelism: par.unwrap_or_default(),
                intensity,
                days_between: schedule_days_between,
                trigger_time: schedule_trigger_time,
            };
            let schedule = add_schedule(api, &new).await?;

            render::notice(&format!("Schedule {} correctly added", schedule.id));
            println!("{}", schedule.detail());
            Ok(())
        }
        ScheduleCommands::View { id } => {
            let id = require_id(id)?;
            let schedule = view_schedule(api, &id).await?;
            println!("{}", schedule.detail());
            Ok(())
        }
        ScheduleCommands::List {
            cluster,
            keyspace,
            state,
            sort_by,
            reverse_sort,
        } => {
            let mut schedules =
                list_schedules(api, cluster.as_deref(), keyspace.as_deref()).await?;
            if sort_by == Some(ScheduleSortKey::NextActivation) {
                sort_by_next_activation(&mut schedules, reverse_sort);
            }
            let filter = ScheduleFilter { keyspace, state };
            for schedule in schedules.iter().filter(|s| filter.matches(s)) {
                println!("{}\n", schedule.detail());
            }
            Ok(())
        }
        ScheduleCommands::Next => {
            let mut schedules = list_schedules(api, None, None).await?;
            if schedules.is_empty() {
                return Ok(());
            }
            sort_by_next_activation(&mut schedules, false);
            println!("{}", schedules[0].detail());
            Ok(())
        }
        ScheduleCommands::Pause { id } => {
            let id = require_id(id)?;
            change_state(api, &id, ScheduleState::Paused).await
        }
        ScheduleCommands::Resume { id } => {
            let id = require_id(id)?;
            change_state(api, &id, ScheduleState::Active).await
        }
        ScheduleCommands::Delete { id, owner } => {
            let id = require_id(id)?;
            let Some(owner) = owner else {
                return Err(ReaperError::config("please provide a valid owner"));
            };
            let schedule = delete_schedule(api, &id, &owner).await?;
            render::notice(&format!("Schedule {id} correctly deleted"));
            println!("{}", schedule.detail());
            Ok(())
        }
    }
}
