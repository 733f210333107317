//! Cluster operations against the Reaper API.

use reaperctl::{Cluster, ReaperError};
use reqwest::{Method, StatusCode};

use crate::http::common::{ReaperApi, encode_segment};

pub async fn list_clusters(api: &ReaperApi) -> Result<Vec<String>, ReaperError> {
    api.request_json(Method::GET, "/cluster", &[], StatusCode::OK, "list clusters")
        .await
}

pub async fn view_cluster(api: &ReaperApi, name: &str) -> Result<Cluster, ReaperError> {
    let path = format!("/cluster/{}", encode_segment(name));
    api.request_json(Method::GET, &path, &[], StatusCode::OK, "view cluster")
        .await
}

/// Registers a cluster from one of its seed hosts. The service answers 200
/// with the cluster it created (or already knew about).
pub async fn add_cluster(api: &ReaperApi, seed_host: &str) -> Result<Cluster, ReaperError> {
    let query = [("seedHost", seed_host.to_string())];
    api.request_json(Method::POST, "/cluster", &query, StatusCode::OK, "add cluster")
        .await
}
