use super::test_utilities::TestReaper;
use reaperctl::{ReaperError, ScheduleState, sort_by_next_activation};
use reaperctl_http::http::schedule::client::{
    NewRepairSchedule, add_schedule, delete_schedule, list_schedules, set_schedule_state,
    view_schedule,
};

fn new_schedule() -> NewRepairSchedule {
    NewRepairSchedule {
        cluster: "paris".to_string(),
        keyspace: "events".to_string(),
        tables: vec![],
        owner: "alice".to_string(),
        segments: 200,
        parallelism: Default::default(),
        intensity: 0.5,
        days_between: 14,
        trigger_time: None,
    }
}

#[tokio::test]
async fn test_add_schedule_decodes_created_record() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    let schedule = add_schedule(&api, &new_schedule()).await.unwrap();
    assert_eq!(schedule.id, "abc");

    // The confirmation the CLI prints references the new ID, and the detail
    // block carries the full record.
    assert_eq!(format!("Schedule {} correctly added", schedule.id), "Schedule abc correctly added");
    let detail = schedule.detail();
    assert!(detail.starts_with("id:                  abc\n"));
    assert!(detail.contains("next activation:     2020-03-15T08:00:00+00:00"));
}

#[tokio::test]
async fn test_add_schedule_sends_documented_query_parameters() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    add_schedule(&api, &new_schedule()).await.unwrap();
    assert_eq!(
        reaper.requests(),
        vec![
            "POST /repair_schedule?clusterName=paris&keyspace=events&owner=alice\
             &segmentCount=200&repairParallelism=SEQUENTIAL&intensity=0.500\
             &scheduleDaysBetween=14"
        ]
    );
}

#[tokio::test]
async fn test_list_sends_cluster_and_keyspace_to_the_service() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    list_schedules(&api, Some("paris"), Some("events")).await.unwrap();
    assert_eq!(
        reaper.requests(),
        vec!["GET /repair_schedule?clusterName=paris&keyspaceName=events"]
    );
}

#[tokio::test]
async fn test_list_then_sort_puts_earliest_first_and_missing_last() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    let mut schedules = list_schedules(&api, None, None).await.unwrap();
    sort_by_next_activation(&mut schedules, false);
    let ids: Vec<&str> = schedules.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["early", "late", "never"]);

    sort_by_next_activation(&mut schedules, true);
    let ids: Vec<&str> = schedules.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["late", "early", "never"]);
}

#[tokio::test]
async fn test_view_missing_schedule_is_a_rejection() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    let err = view_schedule(&api, "nope").await.unwrap_err();
    match err {
        ReaperError::Rejected { status, body, .. } => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resume_sends_active_state() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    set_schedule_state(&api, "abc", ScheduleState::Active).await.unwrap();
    assert_eq!(reaper.requests(), vec!["PUT /repair_schedule/abc?state=ACTIVE"]);
}

#[tokio::test]
async fn test_delete_decodes_the_deleted_schedule() {
    let reaper = TestReaper::start().await;
    let api = reaper.api();

    let schedule = delete_schedule(&api, "abc", "alice").await.unwrap();
    assert_eq!(schedule.id, "abc");
    assert_eq!(
        reaper.requests(),
        vec!["DELETE /repair_schedule/abc?owner=alice"]
    );
}
