//! address-finder: HTTP facade over an Elasticsearch address index
//!
//! A free-text address query (plus optional city / postal code filters)
//! becomes a fuzzy relevance search and a completion suggestion request; both
//! responses are flattened into one JSON result.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod http;
pub mod search;
pub mod server;

#[cfg(test)]
mod testing;
