//! Engine response normalization
//!
//! Engine client versions differ in whether they wrap the response as
//! `{ "body": ... }`. [`unwrap_envelope`] is the single place that difference
//! is handled; everything after it sees the bare response.

use super::access::{array_at, f64_at, get_or, lookup, str_at};
use super::query::SUGGESTER_NAME;
use super::types::{AddressHit, HealthReport, SearchResult};
use serde_json::Value;
use tracing::debug;

/// Strip an optional `{ "body": ... }` envelope
pub fn unwrap_envelope(response: &Value) -> &Value {
    match response.get("body") {
        Some(body) if !body.is_null() => body,
        _ => response,
    }
}

/// Merge a relevance response and a suggestion response into one result.
///
/// Never fails: missing or malformed fields become empty values.
pub fn normalize(relevance: &Value, suggestion: &Value) -> SearchResult {
    let relevance = unwrap_envelope(relevance);
    let suggestion = unwrap_envelope(suggestion);

    SearchResult {
        took_millis: get_or(relevance, "/took", 0u64),
        hits: extract_hits(relevance),
        suggestions: extract_suggestions(suggestion),
    }
}

fn extract_hits(relevance: &Value) -> Vec<AddressHit> {
    let hits = array_at(relevance, "/hits/hits");
    if hits.is_empty() && lookup(relevance, "/hits/hits").is_none() {
        debug!("relevance response has no hits.hits, returning no hits");
    }

    hits.iter()
        .map(|hit| AddressHit {
            id: str_at(hit, "/_id").map(str::to_string),
            full_address: str_at(hit, "/_source/full").map(str::to_string),
            score: f64_at(hit, "/_score"),
        })
        .collect()
}

fn extract_suggestions(suggestion: &Value) -> Vec<String> {
    let path = format!("/suggest/{}/0/options", SUGGESTER_NAME);
    array_at(suggestion, &path)
        .iter()
        .filter_map(|option| str_at(option, "/text"))
        .map(str::to_string)
        .collect()
}

/// Build the `/health` report from the engine's info document
pub fn health_report(info: &Value) -> HealthReport {
    let info = unwrap_envelope(info);
    let raw_keys = info
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default();

    HealthReport::up(
        str_at(info, "/version/number").map(str::to_string),
        str_at(info, "/tagline").map(str::to_string),
        raw_keys,
    )
}
