//! Repair-run operations against the Reaper API.

use reaperctl::{Parallelism, ReaperError, RepairRun, RunState};
use reqwest::{Method, StatusCode};

use crate::http::common::ReaperApi;

/// Parameters of a new repair run.
#[derive(Debug, Clone)]
pub struct NewRepairRun {
    pub cluster: String,
    pub keyspace: String,
    pub tables: Vec<String>,
    pub owner: String,
    pub cause: String,
    pub segments: u32,
    pub parallelism: Parallelism,
    pub intensity: f64,
}

impl NewRepairRun {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("clusterName", self.cluster.clone()),
            ("keyspace", self.keyspace.clone()),
        ];
        if !self.tables.is_empty() {
            query.push(("tables", self.tables.join(",")));
        }
        query.push(("owner", self.owner.clone()));
        query.push(("cause", self.cause.clone()));
        query.push(("segmentCount", self.segments.to_string()));
        query.push(("repairParallelism", self.parallelism.to_string()));
        query.push(("intensity", format!("{:.3}", self.intensity)));
        query
    }
}

/// Fetches all repair runs. The state filter is the only one the service
/// accepts as a query parameter; everything else is filtered client-side.
pub async fn list_repair_runs(
    api: &ReaperApi,
    state: Option<RunState>,
) -> Result<Vec<RepairRun>, ReaperError> {
    let mut query = Vec::new();
    if let Some(state) = state {
        query.push(("state", state.to_string()));
    }
    api.request_json(
        Method::GET,
        "/repair_run",
        &query,
        StatusCode::OK,
        "list repair runs",
    )
    .await
}

pub async fn view_repair_run(api: &ReaperApi, id: i64) -> Result<RepairRun, ReaperError> {
    let path = format!("/repair_run/{id}");
    api.request_json(Method::GET, &path, &[], StatusCode::OK, "view repair run")
        .await
}

pub async fn add_repair_run(
    api: &ReaperApi,
    new: &NewRepairRun,
) -> Result<RepairRun, ReaperError> {
    api.request_json(
        Method::POST,
        "/repair_run",
        &new.to_query(),
        StatusCode::CREATED,
        "add repair run",
    )
    .await
}

/// Requests a state transition and returns the response body, which the
/// service may leave empty.
pub async fn set_repair_run_state(
    api: &ReaperApi,
    id: i64,
    state: RunState,
) -> Result<String, ReaperError> {
    let path = format!("/repair_run/{id}");
    let query = [("state", state.to_string())];
    api.request(Method::PUT, &path, &query, StatusCode::OK, "change repair run state")
        .await
}

/// Deletes a run on behalf of its owner; the service echoes a confirmation.
pub async fn delete_repair_run(
    api: &ReaperApi,
    id: i64,
    owner: &str,
) -> Result<String, ReaperError> {
    let path = format!("/repair_run/{id}");
    let query = [("owner", owner.to_string())];
    api.request(Method::DELETE, &path, &query, StatusCode::OK, "delete repair run")
        .await
}
