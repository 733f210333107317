//! Repair-schedule operations against the Reaper API.

use reaperctl::{Parallelism, ReaperError, RepairSchedule, ScheduleState};
use reqwest::{Method, StatusCode};

use crate::http::common::{ReaperApi, encode_segment};

/// Parameters of a new repair schedule.
#[derive(Debug, Clone)]
pub struct NewRepairSchedule {
    pub cluster: String,
    pub keyspace: String,
    pub tables: Vec<String>,
    pub owner: String,
    pub segments: u32,
    pub parallelism: Parallelism,
    pub intensity: f64,
    pub days_between: u32,
    pub trigger_time: Option<String>,
}

impl NewRepairSchedule {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("clusterName", self.cluster.clone()),
            ("keyspace", self.keyspace.clone()),
        ];
        if !self.tables.is_empty() {
            query.push(("tables", self.tables.join(",")));
        }
        query.push(("owner", self.owner.clone()));
        query.push(("segmentCount", self.segments.to_string()));
        query.push(("repairParallelism", self.parallelism.to_string()));
        query.push(("intensity", format!("{:.3}", self.intensity)));
        query.push(("scheduleDaysBetween", self.days_between.to_string()));
        if let Some(trigger_time) = &self.trigger_time {
            query.push(("scheduleTriggerTime", trigger_time.clone()));
        }
        query
    }
}

/// Fetches repair schedules. Cluster and keyspace are the filters the
/// service accepts as query parameters.
pub async fn list_schedules(
    api: &ReaperApi,
    cluster: Option<&str>,
    keyspace: Option<&str>,
) -> Result<Vec<RepairSchedule>, ReaperError> {
    let mut query = Vec::new();
    if let Some(cluster) = cluster {
        query.push(("clusterName", cluster.to_string()));
    }
    if let Some(keyspace) = keyspace {
        query.push(("keyspaceName", keyspace.to_string()));
    }
    api.request_json(
        Method::GET,
        "/repair_schedule",
        &query,
        StatusCode::OK,
        "list schedules",
    )
    .await
}

pub async fn view_schedule(api: &ReaperApi, id: &str) -> Result<RepairSchedule, ReaperError> {
    let path = format!("/repair_schedule/{}", encode_segment(id));
    api.request_json(Method::GET, &path, &[], StatusCode::OK, "view schedule")
        .await
}

pub async fn add_schedule(
    api: &ReaperApi,
    new: &NewRepairSchedule,
) -> Result<RepairSchedule, ReaperError> {
    api.request_json(
        Method::POST,
        "/repair_schedule",
        &new.to_query(),
        StatusCode::CREATED,
        "add schedule",
    )
    .await
}

/// Requests a state transition and returns the response body, which the
/// service may leave empty.
pub async fn set_schedule_state(
    api: &ReaperApi,
    id: &str,
    state: ScheduleState,
) -> Result<String, ReaperError> {
    let path = format!("/repair_schedule/{}", encode_segment(id));
    let query = [("state", state.to_string())];
    api.request(Method::PUT, &path, &query, StatusCode::OK, "change schedule state")
        .await
}

/// Deletes a schedule on behalf of its owner; the service answers with the
/// deleted schedule.
pub async fn delete_schedule(
    api: &ReaperApi,
    id: &str,
    owner: &str,
) -> Result<RepairSchedule, ReaperError> {
    let path = format!("/repair_schedule/{}", encode_segment(id));
    let query = [("owner", owner.to_string())];
    api.request_json(Method::DELETE, &path, &query, StatusCode::OK, "delete schedule")
        .await
}
