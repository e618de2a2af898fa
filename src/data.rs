use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared type of a registered filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
}

impl FieldKind {
    /// Get the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar value carried by filter literals and document metadata.
///
/// Integer and floating-point literals both map to `Number`; there is no
/// separate int/float distinction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Number(f64),
    Boolean(bool),
}

impl FilterValue {
    /// The [`FieldKind`] this value satisfies.
    pub fn kind(&self) -> FieldKind {
        match self {
            FilterValue::Text(_) => FieldKind::Text,
            FilterValue::Number(_) => FieldKind::Number,
            FilterValue::Boolean(_) => FieldKind::Boolean,
        }
    }

    /// Returns the text value if this is a Text variant.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value if this is a Number variant.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value if this is a Boolean variant.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FilterValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

// --- Conversions ---

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Number(v as f64)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        FilterValue::Number(v as f64)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Number(v)
    }
}

impl From<f32> for FilterValue {
    fn from(v: f32) -> Self {
        FilterValue::Number(v as f64)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Boolean(v)
    }
}

/// A document handed to the store for ingestion.
///
/// A document is a content string plus named metadata values. Registered
/// metadata fields become typed, filterable properties in the target
/// database; the full metadata map is always stored alongside the content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Optional unique identifier for the document.
    ///
    /// If `None`, a UUID (v4) will be automatically generated by the store
    /// during ingestion.
    pub id: Option<String>,

    /// Content to be embedded and searched.
    pub content: String,

    /// Metadata values.
    #[serde(default)]
    pub metadata: HashMap<String, FilterValue>,
}

impl Document {
    /// Create a new document without an id.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Create a new document with a specific id.
    pub fn new_with_id(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata value.
    pub fn add_metadata(mut self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.metadata.insert(name.into(), value.into());
        self
    }

    /// Get a reference to a metadata value.
    pub fn get_metadata(&self, name: &str) -> Option<&FilterValue> {
        self.metadata.get(name)
    }

    /// Check if the document has a metadata value.
    pub fn has_metadata(&self, name: &str) -> bool {
        self.metadata.contains_key(name)
    }
}
