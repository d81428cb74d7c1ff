//! Address search core
//!
//! Query construction, engine response normalization, and the pipeline that
//! joins them.

pub mod access;
pub mod normalize;
pub mod query;
pub mod service;
pub mod types;

pub use normalize::{normalize, unwrap_envelope};
pub use query::{build_queries, QueryPolicy, RelevanceQuery, SearchFilters, SuggestionQuery};
pub use service::AddressSearch;
pub use types::{AddressHit, HealthReport, SearchRequest, SearchResult};
