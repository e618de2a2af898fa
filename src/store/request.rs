//! Search request types.

use serde::{Deserialize, Serialize};

use crate::filter::expression::FilterExpression;

fn default_query_limit() -> usize {
    10
}

/// Request model for a similarity search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Query text, passed through untouched to the search executor.
    pub query: String,
    /// Maximum number of results to return.
    #[serde(default = "default_query_limit")]
    pub limit: usize,
    /// Minimum similarity score. Results with scores below this value are
    /// filtered out by the target database. Default is 0.0 (no filtering).
    #[serde(default)]
    pub min_score: f32,
    /// Optional metadata filter, translated immediately before dispatch.
    #[serde(default)]
    pub filter: Option<FilterExpression>,
}

impl SearchRequest {
    /// Create a request with the given query text and default settings.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            limit: default_query_limit(),
            min_score: 0.0,
            filter: None,
        }
    }
}

/// Builder for [`SearchRequest`].
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl Default for SearchRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: SearchRequest::default(),
        }
    }

    /// Set the query text.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.request.query = query.into();
        self
    }

    /// Set the maximum number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.request.limit = limit;
        self
    }

    /// Set the minimum similarity score.
    pub fn min_score(mut self, min_score: f32) -> Self {
        self.request.min_score = min_score;
        self
    }

    /// Set the metadata filter.
    pub fn filter(mut self, filter: FilterExpression) -> Self {
        self.request.filter = Some(filter);
        self
    }

    pub fn build(self) -> SearchRequest {
        self.request
    }
}
