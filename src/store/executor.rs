//! Search execution boundary.
//!
//! The executor is the injected collaborator that owns the connection to
//! the target database: wire protocol, authentication, consistency
//! enforcement, and result materialization all live behind this trait. The
//! store never constructs an executor itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::data::Document;
use crate::error::Result;
use crate::filter::graphql::WhereFilter;
use crate::store::config::ConsistencyLevel;

/// Fully-translated query handed to the executor.
///
/// The query text, limit, and minimum score pass through from the search
/// request untouched; the filter arrives already translated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub class_name: String,
    pub query: String,
    pub limit: usize,
    pub min_score: f32,
    pub where_filter: Option<WhereFilter>,
    pub consistency_level: ConsistencyLevel,
}

/// Object written to the target database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataObject {
    pub id: String,
    pub class_name: String,
    pub properties: Map<String, Value>,
}

/// A single search result.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// External object id.
    pub id: String,
    pub score: f32,
    pub document: Option<Document>,
}

/// Collaborator executing store operations against the target database.
#[async_trait]
pub trait SearchExecutor: Send + Sync {
    /// Run a similarity search.
    async fn search(&self, query: SearchQuery) -> Result<Vec<SearchHit>>;

    /// Insert or replace data objects.
    async fn upsert(
        &self,
        objects: Vec<DataObject>,
        consistency_level: ConsistencyLevel,
    ) -> Result<()>;

    /// Delete objects by id. Returns whether every deletion succeeded.
    async fn delete(&self, ids: &[String], consistency_level: ConsistencyLevel) -> Result<bool>;
}
