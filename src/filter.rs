//! Portable metadata filtering and translation to the target where-tree.
//!
//! # Module Structure
//!
//! - [`expression`] - Portable filter expression tree and builder functions
//! - [`graphql`] - Target where-tree model
//! - [`registry`] - Filter field registry
//! - [`translator`] - Expression to where-tree translation

pub mod expression;
pub mod graphql;
pub mod registry;
pub mod translator;

pub use expression::{
    ComparisonOperator, ComparisonValue, FilterExpression, LogicalOperator, and, eq, gt, gte,
    is_in, lt, lte, neq, not, not_in, or,
};
pub use graphql::{ComparisonWhere, LogicalWhere, WhereFilter, WhereOperator, WhereValue};
pub use registry::{DEFAULT_METADATA_PREFIX, FieldRegistry};
pub use translator::WhereTranslator;
