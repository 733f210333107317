//! Terminal output helpers.
//!
//! Highlighting is cosmetic only; `console` drops the colors when stdout is
//! not a terminal.

use console::style;
use reaperctl::{Cluster, ClusterViewFilter};

/// The fixed header of `cluster list`, followed by one name per line.
pub fn cluster_names(names: &[String]) -> String {
    let mut out = String::from("All clusters:\n\n");
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// Highlighted line for notable events (created, deleted, state changed).
pub fn notice(message: &str) {
    println!("{}", style(message).yellow());
}

/// Prints the seeds section of a cluster, then the runs and schedules
/// sections enabled by the filter. Section headers print once, before the
/// first matching entry, and not at all when nothing matches.
pub fn print_cluster(cluster: &Cluster, filter: &ClusterViewFilter) {
    notice("Seeds:");
    for seed in &cluster.seed_hosts {
        println!("{seed}");
    }
    println!();

    if filter.show_runs {
        let mut header_printed = false;
        for run in cluster.repair_runs.iter().filter(|r| filter.run_matches(r)) {
            if !header_printed {
                notice("Runs:");
                header_printed = true;
            }
            println!("{}", run.detail());
        }
    }

    if filter.show_schedules {
        let mut header_printed = false;
        for schedule in cluster
            .repair_schedules
            .iter()
            .filter(|s| filter.schedule_matches(s))
        {
            if !header_printed {
                notice("Schedules:");
                header_printed = true;
            }
            println!("{}", schedule.detail());
        }
    }
}
