mod common;

use common::{FakeCommits, options, raw_post};
use serde_json::json;
use site_backend::activity::ActivityHandler;

#[tokio::test]
async fn returns_commits_in_upstream_order() {
    let handler = ActivityHandler::new(FakeCommits::with(&["third", "second", "first"]));

    let resp = handler.handle(&raw_post(None)).await;

    assert_eq!(resp.status_code, 200);
    assert_eq!(
        resp.json_body(),
        json!({ "commits": ["third", "second", "first"] })
    );
}

#[tokio::test]
async fn caps_at_five() {
    let handler = ActivityHandler::new(FakeCommits::with(&["a", "b", "c", "d", "e", "f", "g"]));

    let resp = handler.handle(&raw_post(None)).await;

    assert_eq!(
        resp.json_body()["commits"],
        json!(["a", "b", "c", "d", "e"])
    );
}

#[tokio::test]
async fn empty_history_is_empty_list() {
    let resp = ActivityHandler::new(FakeCommits::with(&[]))
        .handle(&raw_post(None))
        .await;
    assert_eq!(resp.status_code, 200);
    assert_eq!(resp.json_body(), json!({ "commits": [] }));
}

#[tokio::test]
async fn upstream_failure_is_500() {
    let resp = ActivityHandler::new(FakeCommits::failing("connection refused"))
        .handle(&raw_post(None))
        .await;

    assert_eq!(resp.status_code, 500);
    assert!(
        resp.json_body()["error"]
            .as_str()
            .unwrap()
            .contains("connection refused")
    );
    assert_eq!(resp.headers["Content-Type"], "application/json");
}

#[tokio::test]
async fn preflight_is_200() {
    let resp = ActivityHandler::new(FakeCommits::failing("unused"))
        .handle(&options())
        .await;
    assert_eq!(resp.status_code, 200);
}
