//! Tests for the lowest-price report.

use std::io::Write;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::config::Credentials;

fn api_with_mock(mock_uri: &str) -> ManapoolApi {
    let creds = Credentials::new(Some("test_token".into()), Some("seller@example.com".into())).unwrap();
    ManapoolApi::with_base_url(creds, mock_uri)
}

fn product_json(name: &str, set_code: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "set_code": set_code,
        "price_market": 200,
        "price_market_foil": 600,
        "variants": [
            { "language_id": "EN", "condition_id": "NM", "finish_id": "NF", "low_price": 180 }
        ]
    })
}

// ── id collection ────────────────────────────────────────────────────

#[test]
fn dedupe_keeps_first_occurrence_order() {
    let ids = vec!["b".to_string(), "a".to_string(), "b".to_string(), " ".to_string()];
    assert_eq!(dedupe(&ids), vec!["b".to_string(), "a".to_string()]);
}

#[test]
fn lookups_require_at_least_one_id() {
    let request = LowestPriceRequest::default();
    match request.lookups().unwrap_err() {
        ManapoolError::Usage(msg) => assert!(msg.contains("--inventory-file")),
        other => panic!("Expected ManapoolError::Usage, got: {other:?}"),
    }
}

#[test]
fn lookups_group_by_kind() {
    let request = LowestPriceRequest {
        scryfall_ids: vec!["s1".into(), "s1".into()],
        tcgplayer_ids: vec!["t1".into()],
        product_ids: vec!["p1".into(), "p2".into()],
    };

    let lookups = request.lookups().unwrap();
    assert_eq!(
        lookups,
        vec![
            (IdKind::Scryfall, "s1".to_string()),
            (IdKind::Tcgplayer, "t1".to_string()),
            (IdKind::Product, "p1".to_string()),
            (IdKind::Product, "p2".to_string()),
        ]
    );
}

#[test]
fn reads_scryfall_ids_from_inventory_file() {
    let json = serde_json::json!({
        "inventory": [
            { "product": { "single": { "scryfall_id": "aaa" } } },
            { "product": { "sealed": { "tcgplayer_id": 1 } } },
            { "product": { "single": { "scryfall_id": "bbb" } } }
        ]
    });
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(tmp, "{json}").unwrap();

    let ids = scryfall_ids_from_inventory_file(tmp.path()).unwrap();
    assert_eq!(ids, vec!["aaa".to_string(), "bbb".to_string()]);
}

#[test]
fn missing_inventory_file_is_io_error() {
    let result = scryfall_ids_from_inventory_file(Path::new("/nonexistent/inventory.json"));
    match result.unwrap_err() {
        ManapoolError::Io { path, .. } => assert_eq!(path, "/nonexistent/inventory.json"),
        other => panic!("Expected ManapoolError::Io, got: {other:?}"),
    }
}

#[test]
fn malformed_inventory_file_is_parse_error() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(tmp, "{{ not valid json").unwrap();

    let result = scryfall_ids_from_inventory_file(tmp.path());
    assert!(matches!(result, Err(ManapoolError::Parse(_))));
}

// ── report ───────────────────────────────────────────────────────────

#[tokio::test]
async fn report_sends_one_request_per_id() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/products/singles"))
        .and(query_param("scryfall_ids", "s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [product_json("Sol Ring", "C21")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/singles"))
        .and(query_param("product_ids", "p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [product_json("Counterspell", "MH2")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = LowestPriceRequest {
        scryfall_ids: vec!["s1".into(), "s1".into()],
        product_ids: vec!["p1".into()],
        ..Default::default()
    };
    let output = report(&api, &request).await.unwrap();

    assert!(output.contains("Product: Sol Ring (C21)"));
    assert!(output.contains("Product: Counterspell (MH2)"));
    assert!(output.find("Sol Ring").unwrap() < output.find("Counterspell").unwrap());
    assert!(!output.contains("No products found."));
}

#[tokio::test]
async fn report_continues_after_failed_lookup() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/products/singles"))
        .and(query_param("tcgplayer_ids", "bad"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/singles"))
        .and(query_param("tcgplayer_ids", "good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [product_json("Brainstorm", "ICE")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = LowestPriceRequest {
        tcgplayer_ids: vec!["bad".into(), "good".into()],
        ..Default::default()
    };
    let output = report(&api, &request).await.unwrap();
    assert!(output.contains("Product: Brainstorm (ICE)"));
}

#[tokio::test]
async fn report_without_results_says_so() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/products/singles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    let request = LowestPriceRequest {
        scryfall_ids: vec!["unknown".into()],
        ..Default::default()
    };
    let output = report(&api, &request).await.unwrap();
    assert_eq!(output, "No products found.\n");
}
