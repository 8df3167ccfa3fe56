//! Integration tests for the user listing API client against a mock server.

#![cfg(not(target_arch = "wasm32"))]

use hrms_business::{BusinessConfig, StaticCookieStore, UserListError, list_users};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USERS_PATH: &str = "/accounts/api/proxy-supabase/";

async fn setup() -> (MockServer, BusinessConfig) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;
    let config = BusinessConfig::new(mock_server.uri());
    (mock_server, config)
}

fn users_body() -> serde_json::Value {
    serde_json::json!({
        "users": [
            {
                "email": "ada@example.com",
                "is_admin": true,
                "first_name": "Ada",
                "last_name": "Lovelace",
                "created_at": "2024-03-01T10:00:00Z",
                "last_sign_in_at": "2024-06-15T12:00:00Z",
                "email_confirmed": true
            },
            {
                "email": "bob@example.com",
                "is_admin": false,
                "first_name": "",
                "last_name": "",
                "created_at": "2024-04-01T10:00:00Z",
                "last_sign_in_at": null,
                "email_confirmed": false
            }
        ]
    })
}

#[tokio::test]
async fn test_posts_with_csrf_header_and_returns_users_in_order() {
    let (mock_server, config) = setup().await;

    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .and(header("X-CSRFToken", "tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let cookies = StaticCookieStore::new("sessionid=s1; csrftoken=tok123");
    let users = list_users(&config, &cookies).await.expect("list should succeed");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].email, "ada@example.com");
    assert_eq!(users[1].email, "bob@example.com");
    assert_eq!(users[1].last_sign_in_at, None);
}

#[tokio::test]
async fn test_missing_cookie_omits_csrf_header() {
    let (mock_server, config) = setup().await;

    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"users": []})))
        .mount(&mock_server)
        .await;

    let users = list_users(&config, &StaticCookieStore::empty())
        .await
        .expect("list should succeed");
    assert!(users.is_empty());

    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-csrftoken").is_none());
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_http_status_error() {
    let (mock_server, config) = setup().await;

    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "Failed to fetch users: boom"})),
        )
        .mount(&mock_server)
        .await;

    let err = list_users(&config, &StaticCookieStore::empty())
        .await
        .unwrap_err();

    assert_eq!(err, UserListError::HttpStatus { status: 500 });
    assert_eq!(err.to_string(), "Failed to fetch users");
}

#[tokio::test]
async fn test_get_only_endpoint_rejects_and_maps_to_status_error() {
    let (mock_server, config) = setup().await;

    // Nothing mounted for POST: wiremock answers 404.
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .mount(&mock_server)
        .await;

    let err = list_users(&config, &StaticCookieStore::empty())
        .await
        .unwrap_err();
    assert_eq!(err, UserListError::HttpStatus { status: 404 });
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let (mock_server, config) = setup().await;

    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let err = list_users(&config, &StaticCookieStore::empty())
        .await
        .unwrap_err();
    assert!(matches!(err, UserListError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_wrong_shape_is_parse_error() {
    let (mock_server, config) = setup().await;

    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
        .mount(&mock_server)
        .await;

    let err = list_users(&config, &StaticCookieStore::empty())
        .await
        .unwrap_err();
    match err {
        UserListError::Parse(message) => assert!(message.contains("users"), "{message}"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let _ = env_logger::builder().is_test(true).try_init();
    // Nothing listens on port 1 of the loopback interface.
    let config = BusinessConfig::new("http://127.0.0.1:1");

    let err = list_users(&config, &StaticCookieStore::empty())
        .await
        .unwrap_err();
    assert!(matches!(err, UserListError::Network(_)), "got {err:?}");
}
