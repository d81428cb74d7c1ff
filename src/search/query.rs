//! Query construction
//!
//! Turns a trimmed address query plus optional filters into the two engine
//! requests: a relevance search and a completion suggestion.

use serde_json::{json, Map, Value};

/// Name of the suggester inside the suggestion request/response
pub const SUGGESTER_NAME: &str = "addr";

/// Fixed relevance and suggestion policy.
///
/// These values are not derived from input; every request uses the same ones.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPolicy {
    /// Fields searched by the fuzzy clause with their boosts
    pub field_boosts: &'static [(&'static str, u32)],
    pub fuzziness: &'static str,
    /// Leading characters that must match exactly before fuzziness applies
    pub min_unfuzzed_prefix: u32,
    /// Field used by the phrase-prefix clause
    pub phrase_field: &'static str,
    pub phrase_slop: u32,
    pub max_phrase_expansions: u32,
    pub result_limit: usize,
    pub suggestion_limit: usize,
    pub suggestion_field: &'static str,
    pub dedup_suggestions: bool,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            field_boosts: &[("full", 3), ("street", 2), ("city", 1), ("county", 1)],
            fuzziness: "AUTO",
            min_unfuzzed_prefix: 1,
            phrase_field: "full",
            phrase_slop: 2,
            max_phrase_expansions: 50,
            result_limit: 10,
            suggestion_limit: 5,
            suggestion_field: "full_suggest",
            dedup_suggestions: true,
        }
    }
}

impl QueryPolicy {
    /// Field list in engine syntax: `full^3`, boost 1 written bare
    pub fn boosted_fields(&self) -> Vec<String> {
        self.field_boosts
            .iter()
            .map(|(field, boost)| {
                if *boost == 1 {
                    field.to_string()
                } else {
                    format!("{}^{}", field, boost)
                }
            })
            .collect()
    }
}

/// Optional exact-match filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl SearchFilters {
    /// Trim both values; blank ones become absent
    pub fn new(city: Option<&str>, postal_code: Option<&str>) -> Self {
        Self {
            city: non_blank(city),
            postal_code: non_blank(postal_code),
        }
    }

    /// Exact-match clauses for the present filters, in a stable order
    pub fn clauses(&self) -> Vec<FilterClause> {
        let mut clauses = Vec::new();
        if let Some(city) = non_blank(self.city.as_deref()) {
            clauses.push(FilterClause::City(city));
        }
        if let Some(postal) = non_blank(self.postal_code.as_deref()) {
            clauses.push(FilterClause::PostalCode(postal));
        }
        clauses
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// One exact-match clause ANDed into the relevance query
#[derive(Debug, Clone, PartialEq)]
pub enum FilterClause {
    City(String),
    PostalCode(String),
}

impl FilterClause {
    /// Engine field the clause matches against
    pub fn field(&self) -> &'static str {
        match self {
            FilterClause::City(_) => "city.keyword",
            FilterClause::PostalCode(_) => "postal_code",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            FilterClause::City(v) | FilterClause::PostalCode(v) => v,
        }
    }

    fn to_json(&self) -> Value {
        json!({ "term": { self.field(): self.value() } })
    }
}

/// Compound relevance query: filters AND (fuzzy multi-field OR phrase prefix)
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceQuery {
    pub text: String,
    pub filters: Vec<FilterClause>,
    pub policy: QueryPolicy,
}

impl RelevanceQuery {
    /// Request body for the engine's `_search` endpoint
    pub fn to_body(&self) -> Value {
        let policy = &self.policy;
        let should = json!([
            {
                "multi_match": {
                    "query": self.text,
                    "fields": policy.boosted_fields(),
                    "fuzziness": policy.fuzziness,
                    "prefix_length": policy.min_unfuzzed_prefix,
                }
            },
            {
                "match_phrase_prefix": {
                    policy.phrase_field: {
                        "query": self.text,
                        "slop": policy.phrase_slop,
                        "max_expansions": policy.max_phrase_expansions,
                    }
                }
            }
        ]);

        let mut bool_query = Map::new();
        // An empty clause list is omitted rather than sent as []
        if !self.filters.is_empty() {
            let filters: Vec<Value> = self.filters.iter().map(FilterClause::to_json).collect();
            bool_query.insert("filter".to_string(), Value::Array(filters));
        }
        bool_query.insert("should".to_string(), should);

        json!({
            "size": policy.result_limit,
            "query": { "bool": bool_query },
        })
    }
}

/// Completion request against the dedicated suggestion field
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionQuery {
    pub prefix: String,
    pub policy: QueryPolicy,
}

impl SuggestionQuery {
    pub fn to_body(&self) -> Value {
        let policy = &self.policy;
        json!({
            "suggest": {
                SUGGESTER_NAME: {
                    "prefix": self.prefix,
                    "completion": {
                        "field": policy.suggestion_field,
                        "skip_duplicates": policy.dedup_suggestions,
                        "size": policy.suggestion_limit,
                    }
                }
            }
        })
    }
}

/// Build both engine queries.
///
/// `raw_query` must already be trimmed and non-empty; it is not re-checked.
pub fn build_queries(
    raw_query: &str,
    filters: &SearchFilters,
    policy: &QueryPolicy,
) -> (RelevanceQuery, SuggestionQuery) {
    let relevance = RelevanceQuery {
        text: raw_query.to_string(),
        filters: filters.clauses(),
        policy: policy.clone(),
    };
    let suggestion = SuggestionQuery {
        prefix: raw_query.to_string(),
        policy: policy.clone(),
    };
    (relevance, suggestion)
}
