mod common;

use alias_shortener::domain::repositories::AliasRepository;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_success() {
    let (server, _repo) = common::create_test_server();
    common::create_alias(&server, "redirect1", "https://example.com/target").await;

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 307);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_counts_every_click() {
    let (server, repo) = common::create_test_server();
    common::create_alias(&server, "clickme", "https://example.com").await;

    for _ in 0..5 {
        let response = server.get("/clickme").await;
        assert_eq!(response.status_code(), 307);
    }

    let record = repo.find_by_alias("clickme").await.unwrap().unwrap();
    assert_eq!(record.clicks, 5);
}

#[tokio::test]
async fn test_redirect_unknown_alias_counts_nothing() {
    let (server, repo) = common::create_test_server();
    common::create_alias(&server, "known", "https://example.com").await;

    server.get("/unknown").await.assert_status_not_found();

    let stats = repo.stats().await.unwrap();
    assert_eq!(stats.clicks, 0);
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (server, _repo) = common::create_test_server();
    common::create_alias(&server, "Promo", "https://example.com").await;

    server.get("/promo").await.assert_status_not_found();
    assert_eq!(server.get("/Promo").await.status_code(), 307);
}

#[tokio::test]
async fn test_redirect_survives_click_count_failure() {
    let server = common::server_with(Arc::new(common::ReadOnlyClicksRepository::default()));
    common::create_alias(&server, "abc", "https://example.com").await;

    let response = server.get("/abc").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_store_unavailable_is_internal_error() {
    let server = common::server_with(Arc::new(common::UnavailableRepository));

    let response = server.get("/abc").await;

    assert_eq!(response.status_code(), 500);
}

/// Create, resolve twice, then try to re-create with another URL.
#[tokio::test]
async fn test_full_alias_lifecycle() {
    let (server, repo) = common::create_test_server();

    let created = server
        .post("/api/shorten")
        .json(&json!({ "alias": "abc", "url": "https://example.com" }))
        .await;
    assert_eq!(created.status_code(), 201);

    let first = server.get("/abc").await;
    assert_eq!(first.status_code(), 307);
    assert_eq!(first.header("location"), "https://example.com");
    assert_eq!(repo.find_by_alias("abc").await.unwrap().unwrap().clicks, 1);

    let second = server.get("/abc").await;
    assert_eq!(second.status_code(), 307);
    assert_eq!(repo.find_by_alias("abc").await.unwrap().unwrap().clicks, 2);

    let conflict = server
        .post("/api/shorten")
        .json(&json!({ "alias": "abc", "url": "https://other.com" }))
        .await;
    conflict.assert_status_bad_request();
    assert_eq!(conflict.json::<serde_json::Value>()["code"], "conflict");

    let record = repo.find_by_alias("abc").await.unwrap().unwrap();
    assert_eq!(record.url, "https://example.com");
    assert_eq!(record.clicks, 2);
}
