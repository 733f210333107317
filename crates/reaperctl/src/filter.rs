//! Client-side filtering and sorting of decoded record lists.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::records::{RepairRun, RepairSchedule};
use crate::types::{RunState, ScheduleState};

/// True when the two sets share at least one element.
///
/// An empty `requested` set matches nothing here; callers treat an empty
/// request as "filter disabled" and skip the call.
pub fn any_shared(record: &[String], requested: &[String]) -> bool {
    let record: HashSet<&str> = record.iter().map(String::as_str).collect();
    requested.iter().any(|cf| record.contains(cf.as_str()))
}

fn date_floor(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Client-side filters for `repair list`.
#[derive(Debug, Default, Clone)]
pub struct RunFilter {
    pub cluster: Option<String>,
    pub keyspace: Option<String>,
    pub tables: Vec<String>,
    pub owner: Option<String>,
    pub cause: Option<String>,
    pub started_after: Option<NaiveDate>,
    pub started_before: Option<NaiveDate>,
}

impl RunFilter {
    /// All supplied filters must pass.
    ///
    /// Note the tables filter *excludes* runs that share any table with the
    /// requested set instead of keeping them. Existing workflows depend on
    /// the exclusion, so it stays; see DESIGN.md.
    pub fn matches(&self, run: &RepairRun) -> bool {
        if let Some(cluster) = &self.cluster {
            if *cluster != run.cluster_name {
                return false;
            }
        }
        if let Some(keyspace) = &self.keyspace {
            if *keyspace != run.keyspace_name {
                return false;
            }
        }
        if !self.tables.is_empty() && any_shared(&run.column_families, &self.tables) {
            return false;
        }
        if let Some(owner) = &self.owner {
            if *owner != run.owner {
                return false;
            }
        }
        if let Some(cause) = &self.cause {
            if *cause != run.cause {
                return false;
            }
        }
        if self.started_after.is_some() || self.started_before.is_some() {
            let Some(start) = run.start_time else {
                return false;
            };
            if let Some(after) = self.started_after {
                if start < date_floor(after) {
                    return false;
                }
            }
            if let Some(before) = self.started_before {
                if start > date_floor(before) {
                    return false;
                }
            }
        }
        true
    }
}

/// Client-side filters for `schedule list`.
#[derive(Debug, Default, Clone)]
pub struct ScheduleFilter {
    pub keyspace: Option<String>,
    pub state: Option<ScheduleState>,
}

impl ScheduleFilter {
    pub fn matches(&self, schedule: &RepairSchedule) -> bool {
        let keyspace_ok = self
            .keyspace
            .as_ref()
            .is_none_or(|k| *k == schedule.keyspace_name);
        let state_ok = self.state.is_none_or(|s| s == schedule.state);
        keyspace_ok && state_ok
    }
}

/// Filters applied to the runs and schedules embedded in a cluster view.
///
/// Unlike the run listing, the column-family filter here keeps entries that
/// share at least one column family with the requested set.
#[derive(Debug, Default, Clone)]
pub struct ClusterViewFilter {
    pub show_runs: bool,
    pub show_schedules: bool,
    pub column_families: Vec<String>,
    pub run_state: Option<RunState>,
    pub schedule_state: Option<ScheduleState>,
}

impl ClusterViewFilter {
    pub fn run_matches(&self, run: &RepairRun) -> bool {
        if !self.column_families.is_empty()
            && !any_shared(&run.column_families, &self.column_families)
        {
            return false;
        }
        self.run_state.is_none_or(|s| s == run.state)
    }

    pub fn schedule_matches(&self, schedule: &RepairSchedule) -> bool {
        if !self.column_families.is_empty()
            && !any_shared(&schedule.column_families, &self.column_families)
        {
            return false;
        }
        self.schedule_state.is_none_or(|s| s == schedule.state)
    }
}

/// Sorts schedules by `next_activation`.
///
/// Schedules without a next activation order after every schedule that has
/// one, in both directions. Ordering among equal keys is unspecified.
pub fn sort_by_next_activation(schedules: &mut [RepairSchedule], descending: bool) {
    schedules.sort_by(|a, b| match (a.next_activation, b.next_activation) {
        (Some(x), Some(y)) => {
            if descending {
                y.cmp(&x)
            } else {
                x.cmp(&y)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
