//! Integration tests for session fetching and cache slots against a mock host

#![allow(clippy::expect_used)]

use bnet_core::{ApiError, Cached, CachedMap, ClientConfig, Document, Endpoint, Session, Shape};
use serde::Deserialize;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Realm {
    name: String,
    population: String,
}

fn session_for(server: &MockServer) -> Session {
    let config = ClientConfig::new("test-key", "en_US")
        .expect("Operation should succeed")
        .with_base_url(server.uri());
    Session::from_config(&config).expect("Operation should succeed")
}

#[tokio::test]
async fn test_fetch_sends_locale_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wow/realm/status"))
        .and(query_param("locale", "en_US"))
        .and(query_param("apikey", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"realms":[{"name":"Stormrage","population":"high"}]}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    let endpoint = Endpoint::new(["wow", "realm", "status"]).extract("realms");
    let realms: Vec<Realm> = session.fetch(&endpoint).await.expect("Operation should succeed");

    assert_eq!(realms.len(), 1);
    assert_eq!(realms[0].name, "Stormrage");
    assert_eq!(realms[0].population, "high");
}

#[tokio::test]
async fn test_load_fetches_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wow/zone/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"zones":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    let endpoint = Endpoint::new(["wow", "zone"]).with_trailing_slash();
    let mut slot: Cached<Document> = Cached::new();

    for _ in 0..3 {
        let document = session
            .load(&mut slot, &endpoint)
            .await
            .expect("Operation should succeed");
        assert!(document["zones"].is_array());
    }

    server.verify().await;
}

#[tokio::test]
async fn test_refresh_replaces_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wow/mount/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"mounts":[1]}"#))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wow/mount/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"mounts":[1,2]}"#))
        .mount(&server)
        .await;

    let session = session_for(&server);
    let endpoint = Endpoint::new(["wow", "mount"]).with_trailing_slash();
    let mut slot: Cached<Document> = Cached::new();

    let first = session
        .refresh(&mut slot, &endpoint)
        .await
        .expect("Operation should succeed");
    assert_eq!(first["mounts"].as_array().map(Vec::len), Some(1));

    let second = session
        .refresh(&mut slot, &endpoint)
        .await
        .expect("Operation should succeed");
    assert_eq!(second["mounts"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wow/boss/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"bosses":["Ragnaros"]}"#))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wow/boss/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let session = session_for(&server);
    let endpoint = Endpoint::new(["wow", "boss"]).with_trailing_slash();
    let mut slot: Cached<Document> = Cached::new();

    session
        .refresh(&mut slot, &endpoint)
        .await
        .expect("Operation should succeed");
    let err = session
        .refresh(&mut slot, &endpoint)
        .await
        .expect_err("Test operation should fail");

    assert!(err.is_retrieval_failure());
    let kept = slot.get().expect("Slot should stay populated");
    assert_eq!(kept["bosses"][0], "Ragnaros");
}

#[tokio::test]
async fn test_missing_field_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sc2/ladder/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"nok"}"#))
        .mount(&server)
        .await;

    let session = session_for(&server);
    let endpoint = Endpoint::new(["sc2", "ladder", "42"]).extract("ladderMembers");
    let mut slot: Cached<Vec<Document>> = Cached::new();

    let err = session
        .load(&mut slot, &endpoint)
        .await
        .expect_err("Test operation should fail");
    assert!(matches!(err, ApiError::MissingField { field: "ladderMembers", .. }));
    assert!(!slot.is_populated());
}

#[tokio::test]
async fn test_keyed_slots_fetch_per_key() {
    let server = MockServer::start().await;
    for id in ["1", "2"] {
        Mock::given(method("GET"))
            .and(path(format!("/wow/quest/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!(r#"{{"id":{id}}}"#)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let session = session_for(&server);
    let mut quests: CachedMap<u64, Document> = CachedMap::new();

    for id in [1_u64, 2, 1, 2] {
        let endpoint = Endpoint::new(["wow", "quest"]).segment(id);
        let quest = session
            .load_keyed(&mut quests, id, &endpoint)
            .await
            .expect("Operation should succeed");
        assert_eq!(quest["id"], id);
    }

    server.verify().await;
}

#[tokio::test]
async fn test_fetch_url_uses_absolute_location() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auction-data/abc/auctions.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"auctions":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    let url = format!("{}/auction-data/abc/auctions.json", server.uri());
    let auctions: Vec<Document> = session
        .fetch_url(&url, Shape::Field("auctions"))
        .await
        .expect("Operation should succeed");
    assert!(auctions.is_empty());

    let err = session
        .fetch_url::<Document>("::not-a-url::", Shape::Document)
        .await
        .expect_err("Test operation should fail");
    assert!(matches!(err, ApiError::InvalidUrl(_)));
}
