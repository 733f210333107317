//! Wire record types mirroring the Reaper REST API JSON shapes.
//!
//! Each record renders in two forms: a compact single line (`Display`, used
//! in debug logging) and a labeled multi-line block (`detail()`, used by the
//! view and list commands). Optional timestamps render as `-` when absent.

use std::fmt;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Parallelism, RunState, ScheduleState};

const LABEL_WIDTH: usize = 20;

/// A named group of database nodes tracked by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub name: String,
    #[serde(default)]
    pub seed_hosts: Vec<String>,
    #[serde(default)]
    pub repair_runs: Vec<RepairRun>,
    #[serde(default)]
    pub repair_schedules: Vec<RepairSchedule>,
}

/// One executed (or executing) repair operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairRun {
    pub id: i64,
    pub owner: String,
    pub cluster_name: String,
    pub keyspace_name: String,
    pub state: RunState,
    #[serde(default)]
    pub cause: String,
    #[serde(default)]
    pub column_families: Vec<String>,
    #[serde(default)]
    pub intensity: f64,
    #[serde(default)]
    pub total_segments: u32,
    #[serde(default)]
    pub segments_repaired: u32,
    #[serde(default)]
    pub last_event: String,
    #[serde(default)]
    pub duration: String,
    pub creation_time: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub pause_time: Option<DateTime<Utc>>,
}

/// A recurring policy that periodically triggers repair runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairSchedule {
    pub id: String,
    pub owner: String,
    pub cluster_name: String,
    pub keyspace_name: String,
    pub state: ScheduleState,
    #[serde(default)]
    pub column_families: Vec<String>,
    #[serde(default)]
    pub intensity: f64,
    #[serde(default)]
    pub incremental_repair: bool,
    #[serde(default)]
    pub repair_parallelism: Parallelism,
    #[serde(default)]
    pub scheduled_days_between: u32,
    #[serde(default)]
    pub segment_count: u32,
    pub creation_time: Option<DateTime<Utc>>,
    pub pause_time: Option<DateTime<Utc>>,
    pub next_activation: Option<DateTime<Utc>>,
}

fn fmt_time(t: &Option<DateTime<Utc>>) -> String {
    match t {
        Some(t) => t.to_rfc3339(),
        None => "-".to_string(),
    }
}

fn fmt_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

fn detail_line(out: &mut String, label: &str, value: impl fmt::Display) {
    let _ = writeln!(out, "{label:<width$} {value}", width = LABEL_WIDTH);
}

impl fmt::Display for RepairRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{id:{} owner:{:?} cluster:{:?} keyspace:{:?} state:{} cause:{:?} cf:{} \
             intensity:{:.3} segments:{} repaired:{} last_event:{:?} duration:{:?} \
             creation:{} start:{} end:{} pause:{}}}",
            self.id,
            self.owner,
            self.cluster_name,
            self.keyspace_name,
            self.state,
            self.cause,
            fmt_list(&self.column_families),
            self.intensity,
            self.total_segments,
            self.segments_repaired,
            self.last_event,
            self.duration,
            fmt_time(&self.creation_time),
            fmt_time(&self.start_time),
            fmt_time(&self.end_time),
            fmt_time(&self.pause_time),
        )
    }
}

impl RepairRun {
    /// Multi-line labeled block, one `label: value` pair per line.
    pub fn detail(&self) -> String {
        let mut out = String::new();
        detail_line(&mut out, "id:", self.id);
        detail_line(&mut out, "owner:", &self.owner);
        detail_line(&mut out, "cluster name:", &self.cluster_name);
        detail_line(&mut out, "keyspace name:", &self.keyspace_name);
        detail_line(&mut out, "state:", self.state);
        detail_line(&mut out, "cause:", &self.cause);
        detail_line(&mut out, "column families:", fmt_list(&self.column_families));
        detail_line(&mut out, "intensity:", format!("{:.3}", self.intensity));
        detail_line(&mut out, "total segments:", self.total_segments);
        detail_line(&mut out, "segments repaired:", self.segments_repaired);
        detail_line(&mut out, "last event:", &self.last_event);
        detail_line(&mut out, "duration:", &self.duration);
        detail_line(&mut out, "creation time:", fmt_time(&self.creation_time));
        detail_line(&mut out, "start time:", fmt_time(&self.start_time));
        detail_line(&mut out, "end time:", fmt_time(&self.end_time));
        detail_line(&mut out, "pause time:", fmt_time(&self.pause_time));
        out.pop();
        out
    }
}

impl fmt::Display for RepairSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{id:{:?} owner:{:?} cluster:{:?} keyspace:{:?} state:{} cf:{} intensity:{:.3} \
             incremental:{} par:{} days_between:{} segments:{} creation:{} pause:{} next:{}}}",
            self.id,
            self.owner,
            self.cluster_name,
            self.keyspace_name,
            self.state,
            fmt_list(&self.column_families),
            self.intensity,
            self.incremental_repair,
            self.repair_parallelism,
            self.scheduled_days_between,
            self.segment_count,
            fmt_time(&self.creation_time),
            fmt_time(&self.pause_time),
            fmt_time(&self.next_activation),
        )
    }
}

impl RepairSchedule {
    /// Multi-line labeled block, one `label: value` pair per line.
    pub fn detail(&self) -> String {
        let mut out = String::new();
        detail_line(&mut out, "id:", &self.id);
        detail_line(&mut out, "owner:", &self.owner);
        detail_line(&mut out, "cluster name:", &self.cluster_name);
        detail_line(&mut out, "keyspace name:", &self.keyspace_name);
        detail_line(&mut out, "state:", self.state);
        detail_line(&mut out, "column families:", fmt_list(&self.column_families));
        detail_line(&mut out, "intensity:", format!("{:.3}", self.intensity));
        detail_line(&mut out, "incremental:", self.incremental_repair);
        detail_line(&mut out, "parallelism:", self.repair_parallelism);
        detail_line(&mut out, "days between:", self.scheduled_days_between);
        detail_line(&mut out, "segments:", self.segment_count);
        detail_line(&mut out, "creation time:", fmt_time(&self.creation_time));
        detail_line(&mut out, "pause time:", fmt_time(&self.pause_time));
        detail_line(&mut out, "next activation:", fmt_time(&self.next_activation));
        out.pop();
        out
    }
}
