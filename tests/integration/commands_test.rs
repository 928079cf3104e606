use super::common;

use common::fake_upstream::{scheme, FakeUpstream};
use scheme_admin::adapters::http_client::HttpSchemeApi;
use scheme_admin::cli::Command;
use scheme_admin::commands::{self, CommandError};
use scheme_admin_core::{Credentials, SchemeListController};
use std::sync::Arc;

fn controller(
    upstream: &FakeUpstream,
    cookie: Option<&str>,
) -> SchemeListController<HttpSchemeApi> {
    let credentials = match cookie {
        Some(c) => Credentials::Cookie(c.to_string()),
        None => Credentials::None,
    };
    SchemeListController::new(HttpSchemeApi::new(
        upstream.base_url.clone(),
        None,
        Arc::new(credentials),
    ))
}

#[tokio::test]
async fn test_list_prints_every_scheme() {
    let upstream = FakeUpstream::start(
        vec![scheme("a", "Jal Jeevan"), scheme("b", "Ujjwala")],
        None,
    )
    .await;
    let mut controller = controller(&upstream, None);
    let mut out = Vec::<u8>::new();

    commands::run(Command::List, &mut controller, &mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("Jal Jeevan"));
    assert!(text.contains("Ujjwala"));
}

#[tokio::test]
async fn test_update_patches_one_scheme() {
    let upstream = FakeUpstream::start(vec![scheme("a", "X"), scheme("b", "Y")], None).await;
    let mut controller = controller(&upstream, None);
    let mut out = Vec::<u8>::new();

    commands::run(
        Command::Update {
            id: "a".to_string(),
            assignments: vec!["schemename=Z".to_string(), "place=Nashik".to_string()],
        },
        &mut controller,
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(String::from_utf8(out).unwrap().trim(), "Scheme edited successfully!");
    let names: Vec<_> = controller.state().schemes().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Z", "Y"]);
    assert_eq!(controller.state().schemes()[0].place, "Nashik");
    assert!(!controller.state().modal().is_open());

    let received = upstream.received();
    let (_, body) = &received[0];
    assert_eq!(body["schemename"], "Z");
    assert_eq!(body["place"], "Nashik");
}

#[tokio::test]
async fn test_update_unknown_id() {
    let upstream = FakeUpstream::start(vec![scheme("a", "X")], None).await;
    let mut controller = controller(&upstream, None);

    let err = commands::run(
        Command::Update {
            id: "nope".to_string(),
            assignments: vec!["schemename=Z".to_string()],
        },
        &mut controller,
        &mut Vec::<u8>::new(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CommandError::NotFound(id) if id == "nope"));
    assert!(upstream.received().is_empty());
}

#[tokio::test]
async fn test_bad_assignment_fails_before_any_request() {
    let upstream = FakeUpstream::start(vec![scheme("a", "X")], Some("token=good")).await;
    let mut controller = controller(&upstream, None);

    let err = commands::run(
        Command::Update {
            id: "a".to_string(),
            assignments: vec!["budget=10".to_string()],
        },
        &mut controller,
        &mut Vec::<u8>::new(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CommandError::InvalidAssignment(_)));
}

#[tokio::test]
async fn test_delete_removes_scheme() {
    let upstream =
        FakeUpstream::start(vec![scheme("a", "X"), scheme("b", "Y")], Some("token=good")).await;
    let mut controller = controller(&upstream, Some("token=good"));
    let mut out = Vec::<u8>::new();

    commands::run(Command::Delete { id: "a".to_string() }, &mut controller, &mut out)
        .await
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap().trim(), "Scheme deleted successfully!");
    assert_eq!(upstream.scheme_ids(), vec!["b".to_string()]);
    assert_eq!(controller.state().schemes().len(), 1);
}

#[tokio::test]
async fn test_missing_session_is_reported() {
    let upstream = FakeUpstream::start(vec![scheme("a", "X")], Some("token=good")).await;
    let mut controller = controller(&upstream, Some("token=stale"));

    let err = commands::run(Command::List, &mut controller, &mut Vec::<u8>::new())
        .await
        .unwrap_err();

    assert!(matches!(err, CommandError::SessionExpired));
}

#[tokio::test]
async fn test_failed_update_reports_error() {
    let upstream = FakeUpstream::start(vec![scheme("explode", "Boom")], None).await;
    let mut controller = controller(&upstream, None);

    let err = commands::run(
        Command::Update {
            id: "explode".to_string(),
            assignments: vec!["schemename=Bang".to_string()],
        },
        &mut controller,
        &mut Vec::<u8>::new(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CommandError::Failed(msg) if msg == "Error editing scheme!"));
    assert_eq!(controller.state().schemes()[0].name, "Boom");
    assert!(controller.state().modal().is_open());
}
