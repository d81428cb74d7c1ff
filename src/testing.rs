//! Test doubles shared by unit tests

use crate::engine::{EngineError, SearchBackend};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

/// In-memory engine that records every request it receives.
///
/// Suggestion requests (bodies with a `suggest` key) get `suggestion`, all
/// other searches get `relevance`.
#[derive(Default)]
pub struct FakeBackend {
    pub relevance: Value,
    pub suggestion: Value,
    pub info: Value,
    /// When set, every call fails with a transport error carrying this message
    pub fail_with: Option<String>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl FakeBackend {
    pub fn with_responses(relevance: Value, suggestion: Value) -> Self {
        Self {
            relevance,
            suggestion,
            ..Default::default()
        }
    }

    pub fn with_info(info: Value) -> Self {
        Self {
            info,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    /// All `(index, body)` pairs seen so far
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn relevance_requests(&self) -> Vec<Value> {
        self.requests()
            .into_iter()
            .map(|(_, body)| body)
            .filter(|body| body.get("suggest").is_none())
            .collect()
    }

    fn fail(&self) -> Result<(), EngineError> {
        match &self.fail_with {
            Some(message) => Err(EngineError::Transport(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SearchBackend for FakeBackend {
    async fn search(&self, index: &str, body: Value) -> Result<Value, EngineError> {
        self.requests.lock().unwrap().push((index.to_string(), body.clone()));
        self.fail()?;

        if body.get("suggest").is_some() {
            Ok(self.suggestion.clone())
        } else {
            Ok(self.relevance.clone())
        }
    }

    async fn info(&self) -> Result<Value, EngineError> {
        self.fail()?;
        Ok(self.info.clone())
    }
}

/// Engine response with two hits scored 4.2 and 3.1
pub fn two_hit_response() -> Value {
    json!({
        "took": 8,
        "hits": {
            "total": { "value": 2, "relation": "eq" },
            "hits": [
                { "_id": "a1", "_score": 4.2, "_source": { "full": "Main St 1, Springfield" } },
                { "_id": "a2", "_score": 3.1, "_source": { "full": "Main St 2, Springfield" } }
            ]
        }
    })
}

/// Suggestion response with three options
pub fn three_suggestion_response() -> Value {
    json!({
        "suggest": {
            "addr": [
                {
                    "text": "Main St",
                    "options": [
                        { "text": "Main St 1" },
                        { "text": "Main St 2" },
                        { "text": "Main Street" }
                    ]
                }
            ]
        }
    })
}
