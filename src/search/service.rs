//! Address search pipeline
//!
//! builder -> two concurrent engine calls -> normalizer. Shared by the HTTP
//! handlers and the CLI commands.

use super::normalize::{health_report, normalize};
use super::query::{build_queries, QueryPolicy};
use super::types::{HealthReport, SearchRequest, SearchResult};
use crate::engine::{EngineError, SearchBackend};
use std::sync::Arc;
use tracing::{debug, error};

/// Search service over an injected engine backend
pub struct AddressSearch {
    backend: Arc<dyn SearchBackend>,
    index: String,
    policy: QueryPolicy,
}

impl AddressSearch {
    pub fn new(backend: Arc<dyn SearchBackend>, index: impl Into<String>) -> Self {
        Self {
            backend,
            index: index.into(),
            policy: QueryPolicy::default(),
        }
    }

    /// Run an address search.
    ///
    /// An empty query returns the zero result without contacting the engine.
    /// If either engine call fails the whole search fails.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResult, EngineError> {
        if request.is_empty() {
            return Ok(SearchResult::empty());
        }

        let (relevance, suggestion) = build_queries(&request.raw_query, &request.filters, &self.policy);
        debug!(
            "searching '{}' in {} with {} filter(s)",
            request.raw_query,
            self.index,
            relevance.filters.len()
        );

        let (relevance_response, suggestion_response) = tokio::try_join!(
            self.backend.search(&self.index, relevance.to_body()),
            self.backend.search(&self.index, suggestion.to_body()),
        )
        .map_err(|e| {
            error!("[{}] search '{}' failed: {}", e.error_code(), request.raw_query, e);
            e
        })?;

        Ok(normalize(&relevance_response, &suggestion_response))
    }

    /// Probe the engine's status endpoint
    pub async fn health(&self) -> HealthReport {
        match self.backend.info().await {
            Ok(info) => health_report(&info),
            Err(e) => {
                error!("[{}] health check failed: {}", e.error_code(), e);
                HealthReport::down(e.payload())
            }
        }
    }
}
