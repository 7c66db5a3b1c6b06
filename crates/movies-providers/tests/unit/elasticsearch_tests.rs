//! Elasticsearch request/response translation tests

use std::time::Duration;

use movies_domain::ports::SearchProvider;
use movies_domain::value_objects::{
    EntityKind, FieldBoost, Filter, FullTextQuery, QueryDescriptor, SortDirective, Window,
};
use movies_providers::search::ElasticsearchProvider;
use movies_providers::search::elasticsearch::{
    parse_cluster_health, parse_get_response, parse_search_response, request_body,
};
use movies_providers::utils::HttpResponseUtils;
use reqwest::StatusCode;
use serde_json::json;

fn window(offset: u64, limit: u64) -> Window {
    Window::new(offset, limit).unwrap()
}

#[test]
fn test_listing_body() {
    let descriptor = QueryDescriptor::new(EntityKind::Film, window(2, 2))
        .with_filter(Filter::Nested {
            path: "genres".to_string(),
            field: "genres.id".to_string(),
            value: "g1".to_string(),
        })
        .with_sort(SortDirective::descending("imdb_rating"));

    let body = request_body(&descriptor);

    assert_eq!(body["from"], json!(2));
    assert_eq!(body["size"], json!(2));
    assert_eq!(body["track_total_hits"], json!(true));
    assert_eq!(body["query"]["bool"]["must"], json!([{"match_all": {}}]));
    assert_eq!(
        body["query"]["bool"]["filter"],
        json!([{
            "nested": {"path": "genres", "query": {"term": {"genres.id": "g1"}}}
        }])
    );
    assert_eq!(body["sort"], json!([{"imdb_rating": {"order": "desc"}}]));
}

#[test]
fn test_full_text_body() {
    let descriptor =
        QueryDescriptor::new(EntityKind::Film, window(0, 50)).with_full_text(FullTextQuery {
            text: "star wars".to_string(),
            fields: vec![
                FieldBoost::new("title", 4),
                FieldBoost::new("description", 2),
                FieldBoost::new("actors_names", 1),
            ],
            fuzziness: Some(2),
        });

    let body = request_body(&descriptor);

    assert_eq!(
        body["query"]["bool"]["must"],
        json!([{
            "multi_match": {
                "query": "star wars",
                "fields": ["title^4", "description^2", "actors_names"],
                "fuzziness": 2
            }
        }])
    );
    assert!(body.get("sort").is_none());
}

#[test]
fn test_ids_body() {
    let descriptor = QueryDescriptor::new(EntityKind::Film, window(0, 10_000)).with_filter(
        Filter::Ids {
            values: vec!["a".to_string(), "b".to_string()],
        },
    );

    let body = request_body(&descriptor);
    assert_eq!(
        body["query"]["bool"]["filter"],
        json!([{"terms": {"id": ["a", "b"]}}])
    );
}

#[test]
fn test_parse_search_response() {
    let response = json!({
        "hits": {
            "total": {"value": 3, "relation": "eq"},
            "hits": [
                {"_id": "1", "_source": {"id": "1", "title": "A"}},
                {"_id": "2", "_source": {"id": "2", "title": "B"}}
            ]
        }
    });

    let envelope = parse_search_response(&response).unwrap();
    assert_eq!(envelope.total_hits, 3);
    assert_eq!(envelope.documents.len(), 2);
    assert_eq!(envelope.documents[1]["title"], json!("B"));
}

#[test]
fn test_parse_rejects_malformed_response() {
    let err = parse_search_response(&json!({"error": "boom"})).unwrap_err();
    assert!(err.is_backend_unavailable());
}

#[test]
fn test_get_missing_document_status_is_absent() {
    let body = r#"{"_index":"movies","_id":"x","found":false}"#;

    let document = parse_get_response(StatusCode::NOT_FOUND, body).unwrap();
    assert!(document.is_none());
}

#[test]
fn test_get_missing_index_is_absent() {
    let body = r#"{"error":{"type":"index_not_found_exception"},"status":404}"#;

    assert!(parse_get_response(StatusCode::NOT_FOUND, body).unwrap().is_none());
}

#[test]
fn test_get_found_false_body_is_absent() {
    let body = r#"{"_index":"movies","_id":"x","found":false}"#;

    let document = parse_get_response(StatusCode::OK, body).unwrap();
    assert!(document.is_none());
}

#[test]
fn test_get_found_document_returns_source() {
    let body = r#"{"_id":"1","found":true,"_source":{"id":"1","title":"A"}}"#;

    let document = parse_get_response(StatusCode::OK, body).unwrap().unwrap();
    assert_eq!(document, json!({"id": "1", "title": "A"}));
}

#[test]
fn test_get_server_error_is_backend_unavailable() {
    let err = parse_get_response(StatusCode::SERVICE_UNAVAILABLE, "cluster not ready").unwrap_err();

    assert!(err.is_backend_unavailable());
    assert!(!err.is_not_found());
}

#[test]
fn test_get_garbled_body_is_backend_unavailable() {
    let err = parse_get_response(StatusCode::OK, "<html>").unwrap_err();
    assert!(err.is_backend_unavailable());
}

#[test]
fn test_cluster_health_red_is_unavailable() {
    assert!(parse_cluster_health(&json!({"status": "green"})).is_ok());
    assert!(parse_cluster_health(&json!({"status": "yellow"})).is_ok());

    let err = parse_cluster_health(&json!({"status": "red"})).unwrap_err();
    assert!(err.is_backend_unavailable());
}

#[test]
fn test_bad_request_is_rejected_not_unavailable() {
    let body = r#"{"error":{"type":"illegal_argument_exception","reason":"Result window is too large"}}"#;

    let err = HttpResponseUtils::status_error("Elasticsearch", StatusCode::BAD_REQUEST, body);
    assert!(err.is_backend_rejected());
    assert!(!err.is_backend_unavailable());
}

#[test]
fn test_outage_statuses_are_unavailable() {
    for status in [
        StatusCode::UNAUTHORIZED,
        StatusCode::FORBIDDEN,
        StatusCode::NOT_FOUND,
        StatusCode::TOO_MANY_REQUESTS,
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::SERVICE_UNAVAILABLE,
    ] {
        let err = HttpResponseUtils::status_error("Elasticsearch", status, "");
        assert!(err.is_backend_unavailable(), "{status} should be unavailable");
    }
}

#[tokio::test]
async fn test_unreachable_cluster_is_backend_unavailable() {
    let client = reqwest::Client::new();
    // Nothing listens on port 1
    let provider =
        ElasticsearchProvider::new("http://127.0.0.1:1/", Duration::from_millis(500), client);
    assert_eq!(provider.base_url(), "http://127.0.0.1:1");

    let err = provider.get(EntityKind::Film, "x").await.unwrap_err();
    assert!(err.is_backend_unavailable());
    assert!(!err.is_not_found());

    let descriptor = QueryDescriptor::new(EntityKind::Genre, window(0, 10));
    let err = provider.search(&descriptor).await.unwrap_err();
    assert!(err.is_backend_unavailable());
}
