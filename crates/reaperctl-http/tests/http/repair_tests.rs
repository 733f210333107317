use super::test_utilities::TestReaper;
use reaperctl::{Parallelism, ReaperError, RunFilter, RunState};
use reaperctl_http::http::repair::client::{
    NewRepairRun, add_repair_run, delete_repair_run, list_repair_runs, set_repair_run_state,
    view_repair_run,
};

#[tokio::test]
async fn test_view_missing_run_surfaces_body_verbatim() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    let err = view_repair_run(&api, 999).await.unwrap_err();
    match &err {
        ReaperError::Rejected { status, body, .. } => {
            assert_eq!(*status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("expected a rejection, got {other:?}"),
    }
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_view_run_decodes_record() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    let run = view_repair_run(&api, 1).await.unwrap();
    assert_eq!(run.id, 1);
    assert_eq!(run.state, RunState::Running);
    assert!(run.start_time.is_some());
    assert!(run.end_time.is_none());
}

#[tokio::test]
async fn test_list_sends_state_filter_to_the_service() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    list_repair_runs(&api, Some(RunState::Running)).await.unwrap();
    assert_eq!(reaper.requests(), vec!["GET /repair_run?state=RUNNING"]);
}

#[tokio::test]
async fn test_list_without_state_sends_no_query() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    let runs = list_repair_runs(&api, None).await.unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(reaper.requests(), vec!["GET /repair_run"]);
}

#[tokio::test]
async fn test_list_then_client_side_filters() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    let runs = list_repair_runs(&api, None).await.unwrap();

    let filter = RunFilter {
        cluster: Some("paris".to_string()),
        ..RunFilter::default()
    };
    let kept: Vec<_> = runs.iter().filter(|r| filter.matches(r)).collect();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, 1);

    // The tables filter drops runs touching the requested tables.
    let filter = RunFilter {
        tables: vec!["by_day".to_string()],
        ..RunFilter::default()
    };
    let kept: Vec<_> = runs.iter().filter(|r| filter.matches(r)).collect();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, 2);
}

#[tokio::test]
async fn test_add_run_sends_documented_query_parameters() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    let new = NewRepairRun {
        cluster: "paris".to_string(),
        keyspace: "events".to_string(),
        tables: vec!["by_day".to_string(), "by_user".to_string()],
        owner: "alice".to_string(),
        cause: "weekly repair".to_string(),
        segments: 200,
        parallelism: Parallelism::Sequential,
        intensity: 0.5,
    };
    let run = add_repair_run(&api, &new).await.unwrap();
    assert_eq!(run.id, 42);
    assert_eq!(run.cluster_name, "paris");

    assert_eq!(
        reaper.requests(),
        vec![
            "POST /repair_run?clusterName=paris&keyspace=events&tables=by_day%2Cby_user\
             &owner=alice&cause=weekly%20repair&segmentCount=200\
             &repairParallelism=SEQUENTIAL&intensity=0.500"
        ]
    );
}

#[tokio::test]
async fn test_pause_sends_one_put_with_canonical_state() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    let body = set_repair_run_state(&api, 1, RunState::Paused).await.unwrap();
    assert!(body.is_empty());
    assert_eq!(reaper.requests(), vec!["PUT /repair_run/1?state=PAUSED"]);
}

#[tokio::test]
async fn test_delete_echoes_the_service_body() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    let body = delete_repair_run(&api, 1, "alice").await.unwrap();
    assert_eq!(body, "repair run 1 deleted");
    assert_eq!(reaper.requests(), vec!["DELETE /repair_run/1?owner=alice"]);
}
