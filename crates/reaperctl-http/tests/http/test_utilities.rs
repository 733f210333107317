//! Scripted Reaper service for integration tests.
//!
//! Serves canned responses for every endpoint the client consumes and records
//! each incoming request line (`METHOD path?query`) so tests can assert on
//! exactly what went over the wire.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reaperctl_http::ReaperApi;
use serde_json::{Value, json};

#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<String>>>);

pub struct TestReaper {
    pub addr: SocketAddr,
    log: RequestLog,
}

impl TestReaper {
    pub async fn start() -> Self {
        let log = RequestLog::default();
        let app = routes().layer(middleware::from_fn_with_state(log.clone(), record_request));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("listener has a local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server failed");
        });
        TestReaper { addr, log }
    }

    pub fn api(&self) -> ReaperApi {
        ReaperApi::new(&self.addr.to_string())
    }

    /// Request lines seen so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.log.0.lock().unwrap().clone()
    }
}

async fn record_request(State(log): State<RequestLog>, request: Request, next: Next) -> Response {
    let line = format!("{} {}", request.method(), request.uri());
    log.0.lock().unwrap().push(line);
    next.run(request).await
}

pub fn canned_run(id: i64, cluster: &str, state: &str, tables: &[&str], start: Option<&str>) -> Value {
    json!({
        "id": id,
        "owner": "alice",
        "cluster_name": cluster,
        "keyspace_name": "events",
        "state": state,
        "cause": "weekly",
        "column_families": tables,
        "intensity": 0.5,
        "total_segments": 200,
        "segments_repaired": 42,
        "last_event": "segment done",
        "duration": "10m",
        "creation_time": "2020-01-15T08:00:00Z",
        "start_time": start,
        "end_time": null,
        "pause_time": null
    })
}

pub fn canned_schedule(id: &str, next_activation: Option<&str>) -> Value {
    json!({
        "id": id,
        "owner": "alice",
        "cluster_name": "paris",
        "keyspace_name": "events",
        "state": "ACTIVE",
        "column_families": ["by_day"],
        "intensity": 0.5,
        "incremental_repair": false,
        "repair_parallelism": "SEQUENTIAL",
        "scheduled_days_between": 14,
        "segment_count": 200,
        "creation_time": "2020-01-01T00:00:00Z",
        "pause_time": null,
        "next_activation": next_activation
    })
}

fn routes() -> Router {
    Router::new()
        .route("/cluster", get(list_clusters).post(add_cluster))
        .route("/cluster/{name}", get(view_cluster))
        .route("/repair_run", get(list_runs).post(add_run))
        .route(
            "/repair_run/{id}",
            get(view_run).put(change_run_state).delete(delete_run),
        )
        .route("/repair_schedule", get(list_schedules).post(add_schedule))
        .route(
            "/repair_schedule/{id}",
            get(view_schedule).put(change_schedule_state).delete(delete_schedule),
        )
}

async fn list_clusters() -> Json<Value> {
    Json(json!(["paris", "london"]))
}

async fn view_cluster(Path(name): Path<String>) -> Response {
    if name != "paris" {
        return (StatusCode::NOT_FOUND, "no such cluster").into_response();
    }
    Json(json!({
        "name": "paris",
        "seed_hosts": ["10.0.0.1", "10.0.0.2"],
        "repair_runs": [
            canned_run(1, "paris", "RUNNING", &["by_day"], Some("2020-02-01T10:00:00Z")),
            canned_run(2, "paris", "PAUSED", &["by_user"], None),
        ],
        "repair_schedules": [canned_schedule("abc", Some("2020-03-15T08:00:00Z"))]
    }))
    .into_response()
}

async fn add_cluster(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let seed = params.get("seedHost").cloned().unwrap_or_default();
    Json(json!({
        "name": "paris",
        "seed_hosts": [seed],
        "repair_runs": [],
        "repair_schedules": []
    }))
}

async fn list_runs() -> Json<Value> {
    Json(json!([
        canned_run(1, "paris", "RUNNING", &["by_day"], Some("2020-02-01T10:00:00Z")),
        canned_run(2, "london", "PAUSED", &["by_user"], None),
    ]))
}

async fn view_run(Path(id): Path<i64>) -> Response {
    if id != 1 {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    }
    Json(canned_run(1, "paris", "RUNNING", &["by_day"], Some("2020-02-01T10:00:00Z")))
        .into_response()
}

async fn add_run(Query(params): Query<HashMap<String, String>>) -> Response {
    let cluster = params.get("clusterName").cloned().unwrap_or_default();
    let run = canned_run(42, &cluster, "NOT_STARTED", &[], None);
    (StatusCode::CREATED, Json(run)).into_response()
}

async fn change_run_state() -> &'static str {
    ""
}

async fn delete_run(Path(id): Path<i64>) -> String {
    format!("repair run {id} deleted")
}

async fn list_schedules() -> Json<Value> {
    Json(json!([
        canned_schedule("late", Some("2020-03-01T00:00:00Z")),
        canned_schedule("early", Some("2020-01-01T00:00:00Z")),
        canned_schedule("never", None),
    ]))
}

async fn view_schedule(Path(id): Path<String>) -> Response {
    if id != "abc" {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    }
    Json(canned_schedule("abc", Some("2020-03-15T08:00:00Z"))).into_response()
}

async fn add_schedule() -> Response {
    (StatusCode::CREATED, Json(canned_schedule("abc", Some("2020-03-15T08:00:00Z"))))
        .into_response()
}

async fn change_schedule_state() -> &'static str {
    ""
}

async fn delete_schedule(Path(id): Path<String>) -> Json<Value> {
    Json(canned_schedule(&id, None))
}
