//! Store configuration types.
//!
//! Configuration is supplied once at store construction and read-only
//! afterwards.
//!
//! # Example
//!
//! ```
//! use trellis::{FieldKind, StoreConfig};
//!
//! # fn example() -> trellis::Result<()> {
//! let config = StoreConfig::builder("Articles")
//!     .add_field("country", FieldKind::Text)?
//!     .add_field("year", FieldKind::Number)?
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::FieldKind;
use crate::error::{Result, TrellisError};
use crate::filter::registry::DEFAULT_METADATA_PREFIX;

/// Default property name for document content.
pub const DEFAULT_CONTENT_FIELD: &str = "content";

/// Property holding the full metadata map as a JSON string.
pub const METADATA_FIELD: &str = "metadata";

/// Consistency level requested for reads and writes against the target
/// database. Enforcement is owned by the search executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyLevel {
    /// A single replica must acknowledge.
    One,
    /// A majority of replicas must acknowledge.
    #[default]
    Quorum,
    /// Every replica must acknowledge.
    All,
}

/// Configuration for a single object class in the target database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Object class the store reads and writes.
    pub class_name: String,
    /// Property the document content is stored under.
    pub content_field: String,
    /// Prefix prepended to metadata property names.
    pub metadata_prefix: String,
    /// Declared filterable metadata fields.
    pub fields: HashMap<String, FieldKind>,
    /// Consistency level for reads and writes.
    pub consistency_level: ConsistencyLevel,
}

impl StoreConfig {
    /// Start building a configuration for the given object class.
    pub fn builder(class_name: impl Into<String>) -> StoreConfigBuilder {
        StoreConfigBuilder::new(class_name)
    }
}

/// Builder for [`StoreConfig`].
pub struct StoreConfigBuilder {
    class_name: String,
    content_field: String,
    metadata_prefix: String,
    fields: HashMap<String, FieldKind>,
    consistency_level: ConsistencyLevel,
}

impl StoreConfigBuilder {
    fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            content_field: DEFAULT_CONTENT_FIELD.to_string(),
            metadata_prefix: DEFAULT_METADATA_PREFIX.to_string(),
            fields: HashMap::new(),
            consistency_level: ConsistencyLevel::default(),
        }
    }

    /// Set the property the document content is stored under.
    pub fn content_field(mut self, name: impl Into<String>) -> Self {
        self.content_field = name.into();
        self
    }

    /// Set the prefix prepended to metadata property names.
    pub fn metadata_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.metadata_prefix = prefix.into();
        self
    }

    /// Set the consistency level for reads and writes.
    pub fn consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = level;
        self
    }

    /// Declare a filterable metadata field.
    pub fn add_field(mut self, name: impl Into<String>, kind: FieldKind) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(TrellisError::configuration(
                "filter field name must not be empty",
            ));
        }
        self.fields.insert(name, kind);
        Ok(self)
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<StoreConfig> {
        if self.class_name.is_empty() {
            return Err(TrellisError::configuration("class name must not be empty"));
        }
        if self.content_field.is_empty() {
            return Err(TrellisError::configuration(
                "content field name must not be empty",
            ));
        }
        Ok(StoreConfig {
            class_name: self.class_name,
            content_field: self.content_field,
            metadata_prefix: self.metadata_prefix,
            fields: self.fields,
            consistency_level: self.consistency_level,
        })
    }
}
