//! In-memory search provider
//!
//! Holds raw documents per entity kind and evaluates query descriptors
//! locally: filters, a fuzzy weighted full-text match, sort and window. It
//! stands in for Elasticsearch in development and tests. Data is not
//! persisted.
//!
//! Full-text scoring follows `best_fields` semantics: a document scores the
//! best `boost × matched terms` over the searched fields, and a query term
//! matches a value token within `fuzziness` edits.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use movies_domain::error::{Error, Result};
use movies_domain::ports::SearchProvider;
use movies_domain::value_objects::{
    EntityKind, Filter, FullTextQuery, QueryDescriptor, ResultEnvelope, SortDirection,
    SortDirective,
};
use serde_json::Value;

use crate::constants::KEYWORD_SUBFIELD;

/// In-memory search provider
#[derive(Clone, Default)]
pub struct InMemorySearchProvider {
    documents: Arc<DashMap<EntityKind, Vec<Value>>>,
}

impl InMemorySearchProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Load documents from a JSON fixture keyed by index name
    ///
    /// ```json
    /// { "movies": [ ... ], "persons": [ ... ], "genres": [ ... ] }
    /// ```
    pub fn from_fixture(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_source(
                format!("Failed to read search fixture {}", path.display()),
                e,
            )
        })?;
        let fixture: Value = serde_json::from_str(&content)?;

        let provider = Self::new();
        for kind in EntityKind::ALL {
            if let Some(documents) = fixture.get(kind.index()).and_then(Value::as_array) {
                provider.insert_many(kind, documents.iter().cloned());
            }
        }
        Ok(provider)
    }

    /// Add one document
    pub fn insert(&self, kind: EntityKind, document: Value) {
        self.documents.entry(kind).or_default().push(document);
    }

    /// Add several documents
    pub fn insert_many(&self, kind: EntityKind, documents: impl IntoIterator<Item = Value>) {
        self.documents.entry(kind).or_default().extend(documents);
    }

    /// Drop every document of `kind`
    pub fn clear_kind(&self, kind: EntityKind) {
        self.documents.remove(&kind);
    }

    /// Number of documents of `kind`
    pub fn len(&self, kind: EntityKind) -> usize {
        self.documents.get(&kind).map_or(0, |docs| docs.len())
    }

    /// Whether no document of `kind` is held
    pub fn is_empty(&self, kind: EntityKind) -> bool {
        self.len(kind) == 0
    }

    fn snapshot(&self, kind: EntityKind) -> Vec<Value> {
        self.documents
            .get(&kind)
            .map(|docs| docs.clone())
            .unwrap_or_default()
    }
}

/// Resolve a dotted path (`genres.id`) inside a document
///
/// A trailing `.keyword` names the exact-value subfield of a text field and
/// resolves to the field itself when the document has no such key.
fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let resolve = |path: &str| path.split('.').try_fold(document, |value, part| value.get(part));
    resolve(path).or_else(|| path.strip_suffix(KEYWORD_SUBFIELD).and_then(resolve))
}

/// Compare a stored value with a filter's string value
fn value_matches(value: &Value, expected: &str) -> bool {
    match value {
        Value::String(s) => s == expected,
        Value::Array(items) => items.iter().any(|item| value_matches(item, expected)),
        Value::Null => false,
        other => other.to_string() == expected,
    }
}

fn filter_matches(document: &Value, filter: &Filter) -> bool {
    match filter {
        Filter::Term { field, value } => {
            lookup(document, field).is_some_and(|found| value_matches(found, value))
        }
        Filter::Nested { path, field, value } => {
            let inner = field
                .strip_prefix(path.as_str())
                .and_then(|rest| rest.strip_prefix('.'))
                .unwrap_or(field);
            lookup(document, path)
                .and_then(Value::as_array)
                .is_some_and(|items| {
                    items.iter().any(|item| {
                        lookup(item, inner).is_some_and(|found| value_matches(found, value))
                    })
                })
        }
        Filter::Ids { values } => document
            .get("id")
            .and_then(Value::as_str)
            .is_some_and(|id| values.iter().any(|v| v == id)),
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Levenshtein distance between two tokens
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

fn field_tokens(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => tokenize(s),
        Value::Array(items) => items.iter().flat_map(field_tokens).collect(),
        _ => Vec::new(),
    }
}

/// Best-field score of `document` for `query`; zero means no match
fn score(document: &Value, query: &FullTextQuery) -> u64 {
    let terms = tokenize(&query.text);
    let tolerance = usize::from(query.fuzziness.unwrap_or(0));

    query
        .fields
        .iter()
        .map(|field| {
            let tokens = lookup(document, &field.field)
                .map(field_tokens)
                .unwrap_or_default();
            let matched = terms
                .iter()
                .filter(|term| tokens.iter().any(|t| edit_distance(term, t) <= tolerance))
                .count() as u64;
            matched * u64::from(field.boost)
        })
        .max()
        .unwrap_or(0)
}

/// Order two documents on `sort`, missing values last in both directions
fn compare(a: &Value, b: &Value, sort: &SortDirective) -> Ordering {
    let left = lookup(a, &sort.field).filter(|v| !v.is_null());
    let right = lookup(b, &sort.field).filter(|v| !v.is_null());

    let ordering = match (left, right) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(l), Some(r)) => match (l.as_f64(), r.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => l
                .as_str()
                .unwrap_or_default()
                .to_lowercase()
                .cmp(&r.as_str().unwrap_or_default().to_lowercase()),
        },
    };

    match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Evaluate `descriptor` over `documents`
pub fn evaluate(documents: Vec<Value>, descriptor: &QueryDescriptor) -> ResultEnvelope {
    let filtered = documents
        .into_iter()
        .filter(|doc| descriptor.filters.iter().all(|f| filter_matches(doc, f)));

    let mut matched: Vec<Value> = match &descriptor.full_text {
        Some(query) => {
            let mut scored: Vec<(u64, Value)> = filtered
                .map(|doc| (score(&doc, query), doc))
                .filter(|(s, _)| *s > 0)
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            scored.into_iter().map(|(_, doc)| doc).collect()
        }
        None => filtered.collect(),
    };

    if let Some(sort) = &descriptor.sort {
        matched.sort_by(|a, b| compare(a, b, sort));
    }

    let total_hits = matched.len() as u64;
    let offset = usize::try_from(descriptor.window.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(descriptor.window.limit()).unwrap_or(usize::MAX);
    let documents = matched.into_iter().skip(offset).take(limit).collect();

    ResultEnvelope::new(total_hits, documents)
}

#[async_trait]
impl SearchProvider for InMemorySearchProvider {
    async fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Value>> {
        Ok(self.documents.get(&kind).and_then(|docs| {
            docs.iter()
                .find(|doc| doc.get("id").and_then(Value::as_str) == Some(id))
                .cloned()
        }))
    }

    async fn search(&self, descriptor: &QueryDescriptor) -> Result<ResultEnvelope> {
        Ok(evaluate(self.snapshot(descriptor.kind), descriptor))
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use movies_application::ports::registry::{
    SEARCH_PROVIDERS, SearchProviderConfig, SearchProviderEntry,
};

/// Factory: `url` optionally names a JSON fixture to preload
///
/// Network URLs (anything with a scheme) are ignored so the shared default
/// search URL does not read as a fixture path.
fn memory_factory(
    config: &SearchProviderConfig,
) -> std::result::Result<Arc<dyn SearchProvider>, String> {
    let fixture = config
        .url
        .as_deref()
        .filter(|url| !url.is_empty() && !url.contains("://"));
    let provider = match fixture {
        Some(path) => InMemorySearchProvider::from_fixture(Path::new(path))
            .map_err(|e| format!("Failed to load search fixture: {e}"))?,
        None => InMemorySearchProvider::new(),
    };
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(SEARCH_PROVIDERS)]
static MEMORY_PROVIDER: SearchProviderEntry = SearchProviderEntry {
    name: "memory",
    description: "In-memory search backend (development and testing)",
    factory: memory_factory,
};
