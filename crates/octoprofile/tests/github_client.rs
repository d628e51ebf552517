//! Integration tests for the GitHub client against a wiremock server.

use std::time::Duration;

use octoprofile::github::{GitHubClient, GitHubClientConfig, GitHubError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, page_size: u32) -> GitHubClient {
    GitHubClient::new(GitHubClientConfig {
        api_root: server.uri(),
        token: None,
        page_size,
        timeout: Duration::from_secs(5),
    })
    .expect("client builds")
}

fn user_body() -> serde_json::Value {
    json!({
        "login": "alice",
        "name": "Alice",
        "bio": "systems tinkerer",
        "location": "Dhaka",
        "avatar_url": "https://avatars.githubusercontent.com/u/1",
        "followers": 10,
        "following": 5,
        "created_at": "2015-03-01T12:00:00Z"
    })
}

fn repo_body(name: &str, stars: u32) -> serde_json::Value {
    json!({
        "name": name,
        "description": "a tool",
        "language": "Rust",
        "stargazers_count": stars,
        "forks_count": 0,
        "updated_at": "2025-01-01T00:00:00Z",
        "html_url": format!("https://github.com/alice/{name}")
    })
}

#[tokio::test]
async fn get_user_maps_profile_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    let profile = client.get_user("alice").await.expect("user fetch");

    assert_eq!(profile.login, "alice");
    assert_eq!(profile.name.as_deref(), Some("Alice"));
    assert_eq!(profile.followers, 10);
    assert_eq!(profile.following, 5);
    assert_eq!(profile.created_at.to_rfc3339(), "2015-03-01T12:00:00+00:00");
}

#[tokio::test]
async fn get_user_unknown_username_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    let err = client.get_user("ghost").await.expect_err("should fail");

    assert!(err.is_not_found());
    assert!(err.to_string().contains("user ghost"));
}

#[tokio::test]
async fn exhausted_quota_surfaces_as_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("x-ratelimit-remaining", "0")
                .insert_header("x-ratelimit-reset", "1700000000"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    let err = client.get_user("alice").await.expect_err("should fail");

    match err {
        GitHubError::RateLimited { reset_at } => {
            assert_eq!(reset_at.timestamp(), 1_700_000_000);
        }
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn list_repositories_walks_link_header_pages() {
    let server = MockServer::start().await;

    let next = format!(
        r#"<{}/users/alice/repos?per_page=2&page=2>; rel="next", <{}/users/alice/repos?per_page=2&page=2>; rel="last""#,
        server.uri(),
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next.as_str())
                .set_body_json(json!([repo_body("a", 1), repo_body("b", 2)])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([repo_body("c", 3)])))
        .mount(&server)
        .await;

    let client = client_for(&server, 2);
    let repos = client.list_repositories("alice").await.expect("repo fetch");

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(repos[2].stars, 3);
}

#[tokio::test]
async fn list_repositories_single_page_without_link_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([repo_body("only", 7)])))
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    let repos = client.list_repositories("alice").await.expect("repo fetch");

    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name, "only");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    let err = client
        .list_repositories("alice")
        .await
        .expect_err("should fail");

    assert!(matches!(err, GitHubError::Decode { .. }));
}

#[tokio::test]
async fn upstream_server_error_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    let err = client.get_user("alice").await.expect_err("should fail");

    match err {
        GitHubError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}
