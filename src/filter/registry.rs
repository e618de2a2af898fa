//! Filter field registry.
//!
//! Holds the mapping from allowed filter field name to its declared kind,
//! plus the prefix under which metadata fields appear in the target schema.
//! The registry is populated once at store construction and treated as
//! read-only afterwards; mutation is guarded by a lock so late registration
//! stays safe.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::data::FieldKind;
use crate::error::{Result, TrellisError};

/// Prefix prepended to metadata field names in the target schema.
pub const DEFAULT_METADATA_PREFIX: &str = "meta_";

/// Registry of filterable metadata fields.
#[derive(Debug)]
pub struct FieldRegistry {
    prefix: String,
    fields: RwLock<HashMap<String, FieldKind>>,
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_METADATA_PREFIX)
    }
}

impl FieldRegistry {
    /// Create an empty registry with the given metadata prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            fields: RwLock::new(HashMap::new()),
        }
    }

    /// Register a filter field, overwriting any existing declaration.
    pub fn register(&self, name: impl Into<String>, kind: FieldKind) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(TrellisError::configuration(
                "filter field name must not be empty",
            ));
        }
        self.fields.write().insert(name, kind);
        Ok(())
    }

    /// Resolve a field name to its declared kind.
    pub fn resolve(&self, name: &str) -> Result<FieldKind> {
        self.fields
            .read()
            .get(name)
            .copied()
            .ok_or_else(|| TrellisError::unknown_field(name))
    }

    /// Return the field name as it appears in the target schema.
    pub fn prefixed_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// The configured metadata prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.read().len()
    }

    /// Check if no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.read().is_empty()
    }
}
