//! Request and response types for address search

use serde::Serialize;

use super::query::SearchFilters;

/// Inbound address search after parameter cleanup
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Trimmed query text; empty means "no search"
    pub raw_query: String,
    pub filters: SearchFilters,
}

impl SearchRequest {
    pub fn new(query: &str, city: Option<&str>, postal_code: Option<&str>) -> Self {
        Self {
            raw_query: query.trim().to_string(),
            filters: SearchFilters::new(city, postal_code),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw_query.is_empty()
    }
}

/// One matching address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressHit {
    pub id: Option<String>,
    #[serde(rename = "full")]
    pub full_address: Option<String>,
    pub score: Option<f64>,
}

/// Flattened search response sent to clients
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchResult {
    #[serde(rename = "took")]
    pub took_millis: u64,
    pub hits: Vec<AddressHit>,
    pub suggestions: Vec<String>,
}

impl SearchResult {
    /// Zero-result answer for an empty query
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Engine status as reported by `/health`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HealthReport {
    Up {
        ok: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        version: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tagline: Option<String>,
        #[serde(rename = "rawKeys")]
        raw_keys: Vec<String>,
    },
    Down {
        ok: bool,
        error: serde_json::Value,
    },
}

impl HealthReport {
    pub fn up(version: Option<String>, tagline: Option<String>, raw_keys: Vec<String>) -> Self {
        HealthReport::Up {
            ok: true,
            version,
            tagline,
            raw_keys,
        }
    }

    pub fn down(error: serde_json::Value) -> Self {
        HealthReport::Down { ok: false, error }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, HealthReport::Up { .. })
    }
}
