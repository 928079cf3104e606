use super::common;

use common::fake_upstream::{closed_base_url, scheme, FakeUpstream};
use scheme_admin::adapters::http_client::HttpSchemeApi;
use scheme_admin::config::ApiSettings;
use scheme_admin_core::{Credentials, SchemeApi, SchemeError, SchemeField};
use std::sync::Arc;
use std::time::Duration;

fn client(base_url: &str, credentials: Credentials) -> HttpSchemeApi {
    HttpSchemeApi::new(base_url, None, Arc::new(credentials))
}

#[tokio::test]
async fn test_list_sends_session_cookie() {
    let upstream =
        FakeUpstream::start(vec![scheme("a", "X"), scheme("b", "Y")], Some("token=good")).await;
    let api = client(&upstream.base_url, Credentials::Cookie("token=good".to_string()));

    let schemes = api.list_schemes().await.unwrap();

    let ids: Vec<_> = schemes.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert_eq!(schemes[0].name, "X");
    assert_eq!(schemes[0].field(SchemeField::MoneyGranted), "1000");
    assert_eq!(schemes[0].time_added.as_deref(), Some("2024-02-01T09:30:00.000Z"));
}

#[tokio::test]
async fn test_list_without_session_is_unauthorized() {
    let upstream = FakeUpstream::start(vec![scheme("a", "X")], Some("token=good")).await;
    let api = client(&upstream.base_url, Credentials::None);

    let err = api.list_schemes().await.unwrap_err();

    assert_eq!(err, SchemeError::Unauthorized { status: 401 });
    assert!(err.requires_login());
}

#[tokio::test]
async fn test_update_sends_full_record() {
    let upstream = FakeUpstream::start(vec![scheme("a", "X")], None).await;
    let api = client(&upstream.base_url, Credentials::None);

    let mut record = api.list_schemes().await.unwrap().remove(0);
    record.set_field(SchemeField::Name, "Z").unwrap();
    api.update_scheme(&record.id, &record).await.unwrap();

    let received = upstream.received();
    assert_eq!(received.len(), 1);
    let (id, body) = &received[0];
    assert_eq!(id, "a");
    assert_eq!(body["schemename"], "Z");
    assert_eq!(body["ministry"], "Health");
    assert_eq!(body["moneygranted"], 1000);
    assert_eq!(body["__v"], 0);

    let reloaded = api.list_schemes().await.unwrap();
    assert_eq!(reloaded[0].name, "Z");
}

#[tokio::test]
async fn test_update_server_error_is_a_status_error() {
    let upstream = FakeUpstream::start(vec![], None).await;
    let api = client(&upstream.base_url, Credentials::None);
    let record = serde_json::from_value(scheme("explode", "Boom")).unwrap();

    let err = api.update_scheme("explode", &record).await.unwrap_err();

    assert_eq!(
        err,
        SchemeError::Status {
            status: 500,
            message: "database unavailable".to_string()
        }
    );
    assert!(!err.requires_login());
}

#[tokio::test]
async fn test_delete_encodes_id() {
    let upstream = FakeUpstream::start(vec![scheme("a/b", "Slash"), scheme("c", "W")], None).await;
    let api = client(&upstream.base_url, Credentials::None);
    let record = serde_json::from_value(scheme("a/b", "Slash")).unwrap();

    api.delete_scheme("a/b", &record).await.unwrap();

    assert_eq!(upstream.scheme_ids(), vec!["c".to_string()]);
    assert_eq!(upstream.received()[0].0, "a/b");
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_error() {
    let api = client(&closed_base_url().await, Credentials::None);

    let err = api.list_schemes().await.unwrap_err();

    assert!(matches!(err, SchemeError::Transport(_)));
    assert!(!err.requires_login());
}

#[tokio::test]
async fn test_unparseable_body_is_a_decode_error() {
    let upstream = FakeUpstream::start(vec![], None).await;
    let api = client(&upstream.url("/garbage"), Credentials::None);

    let err = api.list_schemes().await.unwrap_err();

    assert!(matches!(err, SchemeError::Decode(_)));
}

#[tokio::test]
async fn test_configured_timeout_applies() {
    let upstream = FakeUpstream::start(vec![], None).await;
    let api = HttpSchemeApi::new(
        upstream.url("/slow"),
        Some(Duration::from_millis(100)),
        Arc::new(Credentials::None),
    );

    let err = api.list_schemes().await.unwrap_err();

    assert!(matches!(err, SchemeError::Transport(_)));
}

#[tokio::test]
async fn test_from_settings_uses_configured_cookie() {
    let upstream = FakeUpstream::start(vec![scheme("a", "X")], Some("token=good")).await;
    let settings = ApiSettings {
        base_url: upstream.base_url.clone(),
        session_cookie: Some("token=good".to_string()),
        ..Default::default()
    };

    let api = HttpSchemeApi::from_settings(&settings);

    assert_eq!(api.base_url(), upstream.base_url);
    assert_eq!(api.list_schemes().await.unwrap().len(), 1);
}
