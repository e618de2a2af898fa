//! Portable filter expression tree.
//!
//! Expressions are built with the free functions in this module
//! (`eq`, `and`, `is_in`, ...) and translated immediately before a search
//! request is issued; they hold no persistent state. Arity rules are
//! enforced here at construction: `and`/`or` take two or more operands,
//! `not` takes exactly one, and `is_in`/`not_in` take at least one value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::FilterValue;
use crate::error::{Result, TrellisError};

/// Comparison operator of a leaf node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOperator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Nin,
}

impl ComparisonOperator {
    /// Get the operator as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "eq",
            ComparisonOperator::Neq => "neq",
            ComparisonOperator::Gt => "gt",
            ComparisonOperator::Gte => "gte",
            ComparisonOperator::Lt => "lt",
            ComparisonOperator::Lte => "lte",
            ComparisonOperator::In => "in",
            ComparisonOperator::Nin => "nin",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical connective of an inner node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalOperator {
    And,
    Or,
    Not,
}

impl LogicalOperator {
    /// Get the operator as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
            LogicalOperator::Not => "not",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal carried by a comparison node.
///
/// Scalar operators carry a single value; `in`/`nin` carry an ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonValue {
    Scalar(FilterValue),
    List(Vec<FilterValue>),
}

/// A node in a portable filter expression tree.
///
/// The tree is finite and acyclic; every leaf is a comparison node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterExpression {
    Comparison {
        field: String,
        operator: ComparisonOperator,
        value: ComparisonValue,
    },
    Logical {
        operator: LogicalOperator,
        operands: Vec<FilterExpression>,
    },
}

fn comparison(
    field: impl Into<String>,
    operator: ComparisonOperator,
    value: impl Into<FilterValue>,
) -> FilterExpression {
    FilterExpression::Comparison {
        field: field.into(),
        operator,
        value: ComparisonValue::Scalar(value.into()),
    }
}

fn membership<V>(
    field: impl Into<String>,
    operator: ComparisonOperator,
    values: Vec<V>,
) -> Result<FilterExpression>
where
    V: Into<FilterValue>,
{
    if values.is_empty() {
        return Err(TrellisError::validation(format!(
            "{operator} requires at least one value"
        )));
    }
    Ok(FilterExpression::Comparison {
        field: field.into(),
        operator,
        value: ComparisonValue::List(values.into_iter().map(Into::into).collect()),
    })
}

fn logical(operator: LogicalOperator, operands: Vec<FilterExpression>) -> Result<FilterExpression> {
    if operands.len() < 2 {
        return Err(TrellisError::validation(format!(
            "{operator} requires at least two operands"
        )));
    }
    Ok(FilterExpression::Logical { operator, operands })
}

/// Equality comparison.
pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> FilterExpression {
    comparison(field, ComparisonOperator::Eq, value)
}

/// Inequality comparison.
pub fn neq(field: impl Into<String>, value: impl Into<FilterValue>) -> FilterExpression {
    comparison(field, ComparisonOperator::Neq, value)
}

/// Greater-than comparison.
pub fn gt(field: impl Into<String>, value: impl Into<FilterValue>) -> FilterExpression {
    comparison(field, ComparisonOperator::Gt, value)
}

/// Greater-than-or-equal comparison.
pub fn gte(field: impl Into<String>, value: impl Into<FilterValue>) -> FilterExpression {
    comparison(field, ComparisonOperator::Gte, value)
}

/// Less-than comparison.
pub fn lt(field: impl Into<String>, value: impl Into<FilterValue>) -> FilterExpression {
    comparison(field, ComparisonOperator::Lt, value)
}

/// Less-than-or-equal comparison.
pub fn lte(field: impl Into<String>, value: impl Into<FilterValue>) -> FilterExpression {
    comparison(field, ComparisonOperator::Lte, value)
}

/// Membership test. Translates to a disjunction of per-value equality
/// comparisons. An empty value list is rejected.
pub fn is_in<V>(field: impl Into<String>, values: Vec<V>) -> Result<FilterExpression>
where
    V: Into<FilterValue>,
{
    membership(field, ComparisonOperator::In, values)
}

/// Negated membership test. Translates to a conjunction of per-value
/// inequality comparisons. An empty value list is rejected.
pub fn not_in<V>(field: impl Into<String>, values: Vec<V>) -> Result<FilterExpression>
where
    V: Into<FilterValue>,
{
    membership(field, ComparisonOperator::Nin, values)
}

/// Conjunction of two or more operands.
pub fn and(operands: Vec<FilterExpression>) -> Result<FilterExpression> {
    logical(LogicalOperator::And, operands)
}

/// Disjunction of two or more operands.
pub fn or(operands: Vec<FilterExpression>) -> Result<FilterExpression> {
    logical(LogicalOperator::Or, operands)
}

/// Negation of a single operand.
pub fn not(operand: FilterExpression) -> FilterExpression {
    FilterExpression::Logical {
        operator: LogicalOperator::Not,
        operands: vec![operand],
    }
}
