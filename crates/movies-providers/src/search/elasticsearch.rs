//! Elasticsearch Search Provider
//!
//! Implements the `SearchProvider` port over Elasticsearch's HTTP API:
//! point reads via `GET /{index}/_doc/{id}` and searches via
//! `POST /{index}/_search` with a bool query body and `from`/`size` window.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use movies_domain::error::{Error, Result};
use movies_domain::ports::SearchProvider;
use movies_domain::value_objects::{
    EntityKind, FieldBoost, Filter, QueryDescriptor, ResultEnvelope,
};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tracing::debug;

use crate::constants::{
    CONTENT_TYPE_JSON, ELASTICSEARCH_DEFAULT_TIMEOUT_SECS, ELASTICSEARCH_DEFAULT_URL,
    ELASTICSEARCH_ID_FIELD,
};
use crate::utils::HttpResponseUtils;

const PROVIDER: &str = "Elasticsearch";

/// Elasticsearch search provider
///
/// Receives its HTTP client via constructor injection.
pub struct ElasticsearchProvider {
    base_url: String,
    timeout: Duration,
    http_client: Client,
}

impl ElasticsearchProvider {
    /// Create a new Elasticsearch provider
    ///
    /// # Arguments
    /// * `base_url` - Cluster URL (e.g., "http://localhost:9200")
    /// * `timeout` - Per-request timeout
    /// * `http_client` - Reqwest HTTP client
    pub fn new(base_url: impl Into<String>, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            http_client,
        }
    }

    /// Cluster base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        request
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(PROVIDER, e))
    }
}

/// Render a searched field with its boost (`title^4`)
fn boosted_field(field: &FieldBoost) -> String {
    if field.boost == 1 {
        field.field.clone()
    } else {
        format!("{}^{}", field.field, field.boost)
    }
}

/// Render one filter predicate
fn filter_clause(filter: &Filter) -> Value {
    match filter {
        Filter::Term { field, value } => json!({ "term": { field: value } }),
        Filter::Nested { path, field, value } => json!({
            "nested": {
                "path": path,
                "query": { "term": { field: value } }
            }
        }),
        Filter::Ids { values } => json!({ "terms": { ELASTICSEARCH_ID_FIELD: values } }),
    }
}

/// Translate a descriptor into an Elasticsearch `_search` request body
pub fn request_body(descriptor: &QueryDescriptor) -> Value {
    let must = match &descriptor.full_text {
        Some(full_text) => {
            let fields: Vec<String> = full_text.fields.iter().map(boosted_field).collect();
            let mut multi_match = json!({
                "query": full_text.text,
                "fields": fields,
            });
            if let Some(fuzziness) = full_text.fuzziness {
                multi_match["fuzziness"] = json!(fuzziness);
            }
            json!([{ "multi_match": multi_match }])
        }
        None => json!([{ "match_all": {} }]),
    };
    let filter: Vec<Value> = descriptor.filters.iter().map(filter_clause).collect();

    let mut body = json!({
        "query": { "bool": { "must": must, "filter": filter } },
        "from": descriptor.window.offset(),
        "size": descriptor.window.limit(),
        "track_total_hits": true,
    });
    if let Some(sort) = &descriptor.sort {
        body["sort"] = json!([{ sort.field.as_str(): { "order": sort.direction.as_str() } }]);
    }
    body
}

/// Extract the envelope from a `_search` response
pub fn parse_search_response(response: &Value) -> Result<ResultEnvelope> {
    let hits = response
        .get("hits")
        .ok_or_else(|| Error::backend_unavailable("Invalid search response: missing hits"))?;
    let total_hits = hits["total"]["value"]
        .as_u64()
        .or_else(|| hits["total"].as_u64())
        .ok_or_else(|| Error::backend_unavailable("Invalid search response: missing total"))?;
    let documents = hits["hits"]
        .as_array()
        .map(|hits| {
            hits.iter()
                .filter_map(|hit| hit.get("_source").cloned())
                .collect()
        })
        .unwrap_or_default();

    Ok(ResultEnvelope::new(total_hits, documents))
}

/// Interpret a `_doc` response
///
/// A 404 (missing document or index) and a `found: false` body are both
/// absence. Any other failure status maps through
/// [`HttpResponseUtils::status_error`].
pub fn parse_get_response(status: StatusCode, body: &str) -> Result<Option<Value>> {
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(HttpResponseUtils::status_error(PROVIDER, status, body));
    }

    let response: Value = serde_json::from_str(body).map_err(|e| {
        Error::backend_unavailable_with_source("Invalid document response", e)
    })?;
    if response["found"].as_bool() == Some(false) {
        return Ok(None);
    }
    Ok(response.get("_source").cloned())
}

/// Interpret a `_cluster/health` response; only `red` is unhealthy
pub fn parse_cluster_health(response: &Value) -> Result<()> {
    match response["status"].as_str() {
        Some("red") => Err(Error::backend_unavailable(
            "Elasticsearch cluster status is red",
        )),
        _ => Ok(()),
    }
}

#[async_trait]
impl SearchProvider for ElasticsearchProvider {
    async fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Value>> {
        let url = format!("{}/{}/_doc/{}", self.base_url, kind.index(), id);
        let response = self.send(self.http_client.get(url)).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(PROVIDER, e))?;

        let document = parse_get_response(status, &body)?;
        if document.is_none() {
            debug!(index = kind.index(), id, "Document not found");
        }
        Ok(document)
    }

    async fn search(&self, descriptor: &QueryDescriptor) -> Result<ResultEnvelope> {
        let url = format!("{}/{}/_search", self.base_url, descriptor.index());
        let request = self
            .http_client
            .post(url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .json(&request_body(descriptor));

        let response = self.send(request).await?;
        let body = HttpResponseUtils::check_and_parse(response, PROVIDER).await?;
        let envelope = parse_search_response(&body)?;

        debug!(
            index = descriptor.index(),
            total_hits = envelope.total_hits,
            returned = envelope.documents.len(),
            "Search executed"
        );
        Ok(envelope)
    }

    async fn health_check(&self) -> Result<()> {
        let url = format!("{}/_cluster/health", self.base_url);
        let response = self.send(self.http_client.get(url)).await?;
        let body = HttpResponseUtils::check_and_parse(response, PROVIDER).await?;
        parse_cluster_health(&body)
    }

    fn provider_name(&self) -> &str {
        "elasticsearch"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use movies_application::ports::registry::{
    SEARCH_PROVIDERS, SearchProviderConfig, SearchProviderEntry,
};

/// Factory function for creating Elasticsearch provider instances.
fn elasticsearch_factory(
    config: &SearchProviderConfig,
) -> std::result::Result<Arc<dyn SearchProvider>, String> {
    let base_url = config.url.as_deref().unwrap_or(ELASTICSEARCH_DEFAULT_URL);
    let timeout = Duration::from_secs(
        config
            .timeout_secs
            .unwrap_or(ELASTICSEARCH_DEFAULT_TIMEOUT_SECS),
    );
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    Ok(Arc::new(ElasticsearchProvider::new(
        base_url,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(SEARCH_PROVIDERS)]
static ELASTICSEARCH_PROVIDER: SearchProviderEntry = SearchProviderEntry {
    name: "elasticsearch",
    description: "Elasticsearch HTTP search backend",
    factory: elasticsearch_factory,
};
