//! # Trellis
//!
//! A client-side integration layer for GraphQL vector databases.
//!
//! ## Features
//!
//! - Portable metadata filter expressions with free-function builders
//! - Translation to the target's nested `where` operator tree
//! - Field registry with declared kinds and metadata name prefixing
//! - Store facade delegating execution to an injected collaborator

// Core modules
pub mod data;
pub mod error;
pub mod filter;
pub mod store;

// Re-exports for the public API
pub use data::{Document, FieldKind, FilterValue};
pub use error::{Result, TrellisError};
pub use filter::expression::{
    ComparisonOperator, ComparisonValue, FilterExpression, LogicalOperator, and, eq, gt, gte,
    is_in, lt, lte, neq, not, not_in, or,
};
pub use filter::graphql::{ComparisonWhere, LogicalWhere, WhereFilter, WhereOperator, WhereValue};
pub use filter::registry::{DEFAULT_METADATA_PREFIX, FieldRegistry};
pub use filter::translator::WhereTranslator;
pub use store::VectorStore;
pub use store::config::{ConsistencyLevel, StoreConfig, StoreConfigBuilder};
pub use store::executor::{DataObject, SearchExecutor, SearchHit, SearchQuery};
pub use store::request::{SearchRequest, SearchRequestBuilder};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
