// tests/catalog_client_tests.rs - Catalog API client against a mock server
//
// Each test starts a wiremock server, mounts the responses it needs and
// points a `CatalogClient` at `<mock>/api`.

use std::net::TcpListener;
use std::time::Duration;

use scent_catalog::web_app::api::{get_client, set_test_client, CatalogClient, CatalogConfig, CatalogError};
use scent_catalog::web_app::model::CatalogKind;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base: &str) -> CatalogClient {
    CatalogClient::new(CatalogConfig::new(base, Duration::from_secs(5)).unwrap()).unwrap()
}

fn api_base(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

/// Paths of every request the mock server saw, in order
async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect()
}

#[tokio::test]
async fn test_fragrances_are_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fragrances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1, "name": "Cedar Dusk", "brand": "Maison Nord", "gender": "men",
                "year": 2020, "accords": "woody, fresh", "topNotes": "bergamot",
                "middleNotes": null, "baseNotes": "cedar", "uncategorizedNotes": null
            },
            { "id": 2, "name": "Rose Lumiere" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let fragrances = client_for(&api_base(&server)).fragrances().await.unwrap();
    assert_eq!(fragrances.len(), 2);
    assert_eq!(fragrances[0].brand.as_deref(), Some("Maison Nord"));
    assert_eq!(fragrances[0].year, Some(2020));
    assert_eq!(fragrances[0].base_notes.as_deref(), Some("cedar"));
    assert_eq!(fragrances[1].gender, None);
}

#[tokio::test]
async fn test_items_use_the_kind_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/perfumers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 7, "name": "Jean Dupont", "totalContributions": 12 }
        ])))
        .mount(&server)
        .await;

    let perfumers = client_for(&api_base(&server)).items(CatalogKind::Perfumers).await.unwrap();
    assert_eq!(perfumers[0].popularity(), 12);
    assert_eq!(requested_paths(&server).await, vec!["/api/perfumers"]);
}

#[tokio::test]
async fn test_note_name_is_one_encoded_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&api_base(&server));
    assert!(client.note_fragrances(" pink pepper ").await.unwrap().is_empty());
    assert!(client.note_fragrances("ylang/ylang").await.unwrap().is_empty());

    assert_eq!(
        requested_paths(&server).await,
        vec![
            "/api/notes/pink%20pepper/fragrances",
            "/api/notes/ylang%2Fylang/fragrances",
        ]
    );
}

#[tokio::test]
async fn test_base_query_string_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fragrances/random"))
        .and(query_param("key", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 3, "name": "Citrus Veil" })))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}?key=abc", api_base(&server));
    let fragrance = client_for(&base).random_fragrance().await.unwrap();
    assert_eq!(fragrance.id, 3);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/brands"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "detail": "down" })))
        .mount(&server)
        .await;

    let result = client_for(&api_base(&server)).brands().await;
    match result {
        Err(CatalogError::Status { status, url }) => {
            assert_eq!(status.as_u16(), 503);
            assert!(url.ends_with("/api/brands"), "Unexpected url {}", url);
        }
        other => panic!("Expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fragrances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "not": "a list" })))
        .mount(&server)
        .await;

    let result = client_for(&api_base(&server)).fragrances().await;
    assert!(matches!(result, Err(CatalogError::Request(_))));
}

#[tokio::test]
async fn test_unreachable_api_is_a_request_error() {
    // Mock servers are pooled and keep listening after drop, so bind and
    // release a plain port instead
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/api", listener.local_addr().unwrap());
    drop(listener);

    let client = CatalogClient::new(CatalogConfig::new(&base, Duration::from_secs(2)).unwrap()).unwrap();
    let result = client.random_fragrance().await;
    assert!(matches!(result, Err(CatalogError::Request(_))));
}

#[test]
fn test_invalid_base_urls_are_config_errors() {
    for base in ["http://not a host/", "ftp://catalog.example", "catalog.example/api"] {
        let result = CatalogConfig::new(base, Duration::from_secs(1));
        assert!(matches!(result, Err(CatalogError::Config(_))), "Accepted {:?}", base);
    }
}

#[test]
fn test_override_client_is_returned() {
    let config = CatalogConfig::new("http://catalog.test/api", Duration::from_secs(1)).unwrap();
    set_test_client(CatalogClient::new(config.clone()).unwrap());

    let client = get_client().expect("override installed");
    assert_eq!(client.config(), &config);
}
