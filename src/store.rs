//! VectorStore: client-side facade over a GraphQL vector database.
//!
//! # Module Structure
//!
//! - [`config`] - Configuration types (StoreConfig, ConsistencyLevel)
//! - [`executor`] - Search execution boundary
//! - [`request`] - Search request types
//!
//! The store owns the field registry and filter translator; all execution
//! is delegated to an injected [`SearchExecutor`] constructed and owned by
//! the caller.

pub mod config;
pub mod executor;
pub mod request;
#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use log::debug;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::data::Document;
use crate::error::{Result, TrellisError};
use crate::filter::registry::FieldRegistry;
use crate::filter::translator::WhereTranslator;

use self::config::{METADATA_FIELD, StoreConfig};
use self::executor::{DataObject, SearchExecutor, SearchHit, SearchQuery};
use self::request::SearchRequest;

/// Client-side store facade for a single object class.
pub struct VectorStore {
    config: Arc<StoreConfig>,
    registry: Arc<FieldRegistry>,
    translator: WhereTranslator,
    executor: Arc<dyn SearchExecutor>,
}

impl fmt::Debug for VectorStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorStore")
            .field("config", &self.config)
            .field("field_count", &self.registry.len())
            .finish()
    }
}

impl VectorStore {
    /// Create a new store over an externally-managed executor.
    pub fn new(config: StoreConfig, executor: Arc<dyn SearchExecutor>) -> Result<Self> {
        let registry = Arc::new(FieldRegistry::new(config.metadata_prefix.clone()));
        for (name, kind) in &config.fields {
            registry.register(name.clone(), *kind)?;
        }
        let translator = WhereTranslator::new(Arc::clone(&registry));

        Ok(Self {
            config: Arc::new(config),
            registry,
            translator,
            executor,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        self.config.as_ref()
    }

    pub fn registry(&self) -> &FieldRegistry {
        self.registry.as_ref()
    }

    /// Run a similarity search.
    ///
    /// The filter, if present, is translated before the executor is
    /// invoked; any translation error aborts the call with nothing sent
    /// downstream. Query text, limit, and minimum score pass through
    /// untouched.
    pub async fn search(&self, request: SearchRequest) -> Result<Vec<SearchHit>> {
        let where_filter = match &request.filter {
            Some(expression) => Some(self.translator.translate(expression)?),
            None => None,
        };

        debug!(
            "searching class '{}' (limit {}, min_score {})",
            self.config.class_name, request.limit, request.min_score
        );

        let query = SearchQuery {
            class_name: self.config.class_name.clone(),
            query: request.query,
            limit: request.limit,
            min_score: request.min_score,
            where_filter,
            consistency_level: self.config.consistency_level,
        };
        self.executor.search(query).await
    }

    /// Add documents, returning the assigned object ids.
    ///
    /// Documents without an id are assigned a generated UUID. Registered
    /// metadata fields are written as typed, prefixed properties and must
    /// match their declared kind; unregistered metadata is carried only in
    /// the JSON metadata property.
    pub async fn add_documents(&self, documents: Vec<Document>) -> Result<Vec<String>> {
        let mut objects = Vec::with_capacity(documents.len());
        let mut ids = Vec::with_capacity(documents.len());
        for document in documents {
            let object = self.to_data_object(document)?;
            ids.push(object.id.clone());
            objects.push(object);
        }

        debug!(
            "upserting {} objects into class '{}'",
            objects.len(),
            self.config.class_name
        );
        self.executor
            .upsert(objects, self.config.consistency_level)
            .await?;
        Ok(ids)
    }

    /// Delete documents by id.
    pub async fn delete_documents(&self, ids: &[String]) -> Result<bool> {
        debug!(
            "deleting {} objects from class '{}'",
            ids.len(),
            self.config.class_name
        );
        self.executor
            .delete(ids, self.config.consistency_level)
            .await
    }

    fn to_data_object(&self, document: Document) -> Result<DataObject> {
        let id = document
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut properties = Map::new();
        properties.insert(
            METADATA_FIELD.to_string(),
            Value::String(serde_json::to_string(&document.metadata)?),
        );

        for (name, value) in &document.metadata {
            let Ok(declared) = self.registry.resolve(name) else {
                continue;
            };
            if declared != value.kind() {
                return Err(TrellisError::type_mismatch(name, declared, value.kind()));
            }
            properties.insert(self.registry.prefixed_name(name), serde_json::to_value(value)?);
        }

        properties.insert(
            self.config.content_field.clone(),
            Value::String(document.content),
        );

        Ok(DataObject {
            id,
            class_name: self.config.class_name.clone(),
            properties,
        })
    }
}
