//! Cluster CLI interface.

use clap::Subcommand;
use reaperctl::{ClusterViewFilter, ReaperError, RunState, ScheduleState};

use crate::http::cluster::client::{add_cluster, list_clusters, view_cluster};
use crate::http::common::ReaperApi;
use crate::http::render::{self, print_cluster};

#[derive(Debug, Subcommand)]
pub enum ClusterCommands {
    /// Register a cluster from one of its seed hosts
    Add {
        /// The seed host
        #[arg(long)]
        seed: Option<String>,
    },
    /// Show one cluster, with its runs and schedules
    View {
        /// The cluster name
        name: Option<String>,
        /// Show the runs of this cluster
        #[arg(
            long,
            default_value_t = true,
            num_args = 0..=1,
            default_missing_value = "true",
            action = clap::ArgAction::Set
        )]
        runs: bool,
        /// Show the schedules of this cluster
        #[arg(long)]
        schedules: bool,
        /// Only entries touching these column families
        #[arg(long = "cf", value_delimiter = ',')]
        cf: Vec<String>,
        /// Only runs in this state
        #[arg(long)]
        run_state: Option<RunState>,
        /// Only schedules in this state
        #[arg(long)]
        schedule_state: Option<ScheduleState>,
    },
    /// List all cluster names
    List,
}

pub async fn handle_cluster_command(
    api: &ReaperApi,
    command: ClusterCommands,
) -> Result<(), ReaperError> {
    match command {
        ClusterCommands::List => {
            let names = list_clusters(api).await?;
            print!("{}", render::cluster_names(&names));
            Ok(())
        }
        ClusterCommands::View {
            name,
            runs,
            schedules,
            cf,
            run_state,
            schedule_state,
        } => {
            let Some(name) = name else {
                return Err(ReaperError::config("please provide a cluster name"));
            };
            let cluster = view_cluster(api, &name).await?;
            let filter = ClusterViewFilter {
                show_runs: runs,
                show_schedules: schedules,
                column_families: cf,
                run_state,
                schedule_state,
            };
            println!("Cluster {name:?}:\n");
            print_cluster(&cluster, &filter);
            Ok(())
        }
        ClusterCommands::Add { seed } => {
            let Some(seed) = seed else {
                return Err(ReaperError::config("please provide a seed host"));
            };
            let cluster = add_cluster(api, &seed).await?;
            render::notice(&format!("Cluster {} correctly added", cluster.name));
            print_cluster(&cluster, &ClusterViewFilter::default());
            Ok(())
        }
    }
}
