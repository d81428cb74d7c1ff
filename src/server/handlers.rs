//! HTTP handlers for `/search` and `/health`

use crate::error::AppError;
use crate::search::{AddressSearch, HealthReport, SearchRequest, SearchResult};
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

/// `/search` query string; every parameter is optional
#[derive(Debug, Default, PartialEq)]
pub struct SearchParams {
    pub q: Option<String>,
    pub city: Option<String>,
    pub postal: Option<String>,
}

impl SearchParams {
    /// Lenient parse: unknown keys are ignored and a repeated key keeps its first value
    pub fn parse(raw: Option<&str>) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            let slot = match key.as_ref() {
                "q" => &mut params.q,
                "city" => &mut params.city,
                "postal" => &mut params.postal,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    pub fn to_request(&self) -> SearchRequest {
        SearchRequest::new(
            self.q.as_deref().unwrap_or_default(),
            self.city.as_deref(),
            self.postal.as_deref(),
        )
    }
}

pub async fn handle_search(
    State(search): State<Arc<AddressSearch>>,
    RawQuery(query): RawQuery,
) -> Result<Json<SearchResult>, AppError> {
    let params = SearchParams::parse(query.as_deref());
    let result = search.search(&params.to_request()).await?;
    Ok(Json(result))
}

pub async fn handle_health(State(search): State<Arc<AddressSearch>>) -> (StatusCode, Json<HealthReport>) {
    let report = search.health().await;
    let status = if report.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(report))
}
