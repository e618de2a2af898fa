//! Target where-tree model.
//!
//! Mirrors the GraphQL `where` argument shape of the target database:
//! logical nodes carry `operator`/`operands`, comparison nodes carry
//! `path`/`operator` and exactly one of the `valueText`/`valueNumber`/
//! `valueBoolean` slots.

use serde::{Deserialize, Serialize};

use crate::data::FilterValue;

/// Operator of a where-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhereOperator {
    And,
    Or,
    Not,
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
}

/// Typed value slot of a comparison node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WhereValue {
    #[serde(rename = "valueText")]
    Text(String),
    #[serde(rename = "valueNumber")]
    Number(f64),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
}

impl From<&FilterValue> for WhereValue {
    fn from(value: &FilterValue) -> Self {
        match value {
            FilterValue::Text(s) => WhereValue::Text(s.clone()),
            FilterValue::Number(n) => WhereValue::Number(*n),
            FilterValue::Boolean(b) => WhereValue::Boolean(*b),
        }
    }
}

impl From<FilterValue> for WhereValue {
    fn from(value: FilterValue) -> Self {
        WhereValue::from(&value)
    }
}

/// Logical where node combining nested filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalWhere {
    pub operator: WhereOperator,
    pub operands: Vec<WhereFilter>,
}

/// Comparison where node on a single property path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonWhere {
    pub path: Vec<String>,
    pub operator: WhereOperator,
    #[serde(flatten)]
    pub value: WhereValue,
}

/// A node in the target where-tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WhereFilter {
    Logical(LogicalWhere),
    Comparison(ComparisonWhere),
}
