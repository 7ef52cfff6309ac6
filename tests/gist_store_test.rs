use mockito::Matcher;
use serde_json::json;

use newsrelay::config::StateConfig;
use newsrelay::domain::PostedState;
use newsrelay::store::{GistStore, StateStore, StoreError};

fn config(api_base: String) -> StateConfig {
    StateConfig {
        token: Some("secret".into()),
        gist_id: Some("abc123".into()),
        api_base,
        ..StateConfig::default()
    }
}

#[tokio::test]
async fn test_load_reads_state_file() {
    let mut server = mockito::Server::new_async().await;

    let body = json!({
        "id": "abc123",
        "files": {
            "gigazine_state.json": {
                "filename": "gigazine_state.json",
                "content": "{\n  \"last_posted_ids\": [\"a\", \"b\"]\n}"
            },
            "README.md": {"content": "unrelated"}
        }
    });
    let mock = server
        .mock("GET", "/gists/abc123")
        .match_header("authorization", "Bearer secret")
        .match_header("accept", "application/vnd.github.v3+json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let store = GistStore::new(reqwest::Client::new(), &config(server.url()));
    let state = store.load().await.unwrap();

    assert_eq!(state.last_posted_ids, vec!["a", "b"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_load_missing_file_is_empty_state() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/gists/abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"files": {"other.json": {"content": "{}"}}}"#)
        .create_async()
        .await;

    let store = GistStore::new(reqwest::Client::new(), &config(server.url()));
    let state = store.load().await.unwrap();

    assert!(state.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_load_http_error() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/gists/abc123")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;

    let store = GistStore::new(reqwest::Client::new(), &config(server.url()));
    let err = store.load().await.unwrap_err();

    assert!(matches!(err, StoreError::Status(404)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_load_malformed_state_content() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/gists/abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"files": {"gigazine_state.json": {"content": "not json"}}}"#)
        .create_async()
        .await;

    let store = GistStore::new(reqwest::Client::new(), &config(server.url()));
    let err = store.load().await.unwrap_err();

    assert!(matches!(err, StoreError::Json(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_save_patches_state_file() {
    let mut server = mockito::Server::new_async().await;

    let mut state = PostedState::new();
    state.record("a");
    state.record("b");
    let expected = json!({
        "files": {
            "gigazine_state.json": {
                "content": state.to_json().unwrap()
            }
        }
    });

    let mock = server
        .mock("PATCH", "/gists/abc123")
        .match_header("authorization", "Bearer secret")
        .match_body(Matcher::Json(expected))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let store = GistStore::new(reqwest::Client::new(), &config(server.url()));
    store.save(&state).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_save_http_error() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("PATCH", "/gists/abc123")
        .with_status(500)
        .create_async()
        .await;

    let store = GistStore::new(reqwest::Client::new(), &config(server.url()));
    let err = store.save(&PostedState::new()).await.unwrap_err();

    assert!(matches!(err, StoreError::Status(500)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_credentials_skip_requests() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = StateConfig {
        token: None,
        api_base: server.url(),
        ..StateConfig::default()
    };
    let store = GistStore::new(reqwest::Client::new(), &config);

    assert!(!store.is_configured());
    assert!(matches!(store.load().await, Err(StoreError::NotConfigured)));
    assert!(matches!(
        store.save(&PostedState::new()).await,
        Err(StoreError::NotConfigured)
    ));
    mock.assert_async().await;
}
