//! Search engine boundary
//!
//! Everything the service needs from the external engine goes through the
//! [`SearchBackend`] trait, so handlers never hold a global client and tests
//! can substitute a fake.

pub mod client;
pub mod error;

pub use client::ElasticClient;
pub use error::EngineError;

use async_trait::async_trait;
use serde_json::Value;

/// Query/response contract of the external engine.
///
/// Responses are returned untyped: the caller normalizes them.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run a search request body against `index`
    async fn search(&self, index: &str, body: Value) -> Result<Value, EngineError>;

    /// Fetch the engine's own status document
    async fn info(&self) -> Result<Value, EngineError>;
}
