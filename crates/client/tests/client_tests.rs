//! Integration tests for the live config HTTP client

use liveconf_client::{AuthenticatedClient, ClientError, PublicClient, TypedClientBuilder};
use liveconf_core::{ApiSettings, ListParams, LiveConfig, SortOrder};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authenticated(server: &MockServer) -> AuthenticatedClient {
    AuthenticatedClient::new(server.uri(), "test-token").unwrap()
}

#[tokio::test]
async fn test_builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let result = TypedClientBuilder::new().base_url("  ").build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_builder_trims_trailing_slash() {
    let client = PublicClient::new("http://localhost:8080/api/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080/api");
}

#[tokio::test]
async fn test_builder_rejects_empty_token() {
    let result = TypedClientBuilder::new()
        .base_url("http://localhost")
        .build_authenticated("");
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_builder_from_settings() {
    let settings = ApiSettings {
        base_url: "http://localhost:9000/".into(),
        timeout_secs: Some(5),
        user_agent: Some("admin-ui".into()),
    };
    let client = TypedClientBuilder::from_settings(&settings)
        .build_authenticated("t")
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:9000");
    assert_eq!(client.to_public().base_url(), "http://localhost:9000");
}

#[tokio::test]
async fn test_list_sends_query_and_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/live_config/list"))
        .and(query_param("nowPage", "2"))
        .and(query_param("pageSize", "10"))
        .and(query_param("orderName", "priority"))
        .and(query_param("orderBy", "desc"))
        .and(query_param("type", "push"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": {
                "nowPage": 2,
                "pageSize": 10,
                "hasMore": false,
                "total": 11,
                "rows": [{"id": 11, "key": "cdn", "value": "on"}]
            },
            "message": "ok"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = ListParams::default()
        .page(2, 10)
        .order("priority", SortOrder::Desc)
        .filter("type", "push");

    let response = authenticated(&mock_server)
        .live_config()
        .list(&params)
        .await
        .unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.data.total, 11);
    assert_eq!(response.data.rows.len(), 1);
    assert_eq!(response.data.rows[0].id, Some(11));
    assert_eq!(response.data.rows[0].field("key"), Some(&json!("cdn")));
}

#[tokio::test]
async fn test_get_by_id_issues_single_get() {
    let mock_server = MockServer::start().await;

    for id in [1_u64, 42] {
        Mock::given(method("GET"))
            .and(path(format!("/live_config/find/{id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"code": 200, "data": {"id": id, "key": "k"}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = authenticated(&mock_server).live_config();
    for id in [1_u64, 42] {
        let response = client.get_by_id(id).await.unwrap();
        assert_eq!(response.data.id, Some(id));
    }
}

#[tokio::test]
async fn test_create_posts_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/live_config/create"))
        .and(body_json(json!({"key": "allow_push", "value": "1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 200, "data": {"id": 5}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let entry = LiveConfig::new()
        .with_field("key", "allow_push")
        .with_field("value", "1");

    let response = authenticated(&mock_server)
        .live_config()
        .create(&entry)
        .await
        .unwrap();
    assert_eq!(response.data["id"], 5);
}

#[tokio::test]
async fn test_update_puts_to_entry_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/live_config/update/7"))
        .and(body_json(json!({"id": 7, "value": "off"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 200, "data": null})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let entry = LiveConfig::new().with_id(7).with_field("value", "off");
    let response = authenticated(&mock_server)
        .live_config()
        .update(&entry)
        .await
        .unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_update_without_id_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let entry = LiveConfig::new().with_field("value", "off");
    let result = authenticated(&mock_server).live_config().update(&entry).await;
    assert!(matches!(result, Err(ClientError::Validation(_))));
}

#[tokio::test]
async fn test_delete_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/live_config/delete/3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 200, "message": "deleted"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = authenticated(&mock_server)
        .live_config()
        .delete(3)
        .await
        .unwrap();
    assert_eq!(response.message.as_deref(), Some("deleted"));
}

#[tokio::test]
async fn test_error_statuses_propagate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/live_config/find/1"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/live_config/find/2"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/live_config/delete/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = authenticated(&mock_server).live_config();

    let result = client.get_by_id(1).await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));

    match client.get_by_id(2).await {
        Err(ClientError::NotFound(message)) => assert_eq!(message, "missing"),
        other => panic!("expected NotFound, got {other:?}"),
    }

    match client.delete(1).await {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/live_config/find/9"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let result = authenticated(&mock_server).live_config().get_by_id(9).await;
    assert!(matches!(result, Err(ClientError::Request(_))));
}
