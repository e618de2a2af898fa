//! Translation from portable filter expressions to the target where-tree.

use std::sync::Arc;

use crate::data::FilterValue;
use crate::error::{Result, TrellisError};
use crate::filter::expression::{
    ComparisonOperator, ComparisonValue, FilterExpression, LogicalOperator,
};
use crate::filter::graphql::{ComparisonWhere, LogicalWhere, WhereFilter, WhereOperator, WhereValue};
use crate::filter::registry::FieldRegistry;

/// Translator from [`FilterExpression`] to [`WhereFilter`].
///
/// Translation is pure and stateless per call: the input tree is never
/// mutated, every error is raised before any output is handed downstream,
/// and nested logical nodes are preserved as-is since grouping is expressed
/// purely by tree structure.
///
/// `in`/`nin` comparisons have no native equivalent in the target and are
/// expanded into a disjunction of equalities / conjunction of inequalities.
/// The target has no native `Not` either; negation is rejected unless
/// [`with_not_support`](Self::with_not_support) declares it available.
pub struct WhereTranslator {
    registry: Arc<FieldRegistry>,
    supports_not: bool,
}

impl WhereTranslator {
    /// Create a translator over the given field registry.
    pub fn new(registry: Arc<FieldRegistry>) -> Self {
        Self {
            registry,
            supports_not: false,
        }
    }

    /// Declare whether the target system supports the `Not` operator.
    pub fn with_not_support(mut self, supported: bool) -> Self {
        self.supports_not = supported;
        self
    }

    /// Translate a portable expression into the target where-tree.
    pub fn translate(&self, expression: &FilterExpression) -> Result<WhereFilter> {
        match expression {
            FilterExpression::Logical { operator, operands } => {
                self.translate_logical(*operator, operands)
            }
            FilterExpression::Comparison {
                field,
                operator,
                value,
            } => self.translate_comparison(field, *operator, value),
        }
    }

    fn translate_logical(
        &self,
        operator: LogicalOperator,
        operands: &[FilterExpression],
    ) -> Result<WhereFilter> {
        match operator {
            LogicalOperator::And | LogicalOperator::Or => {
                let mapped = match operator {
                    LogicalOperator::And => WhereOperator::And,
                    _ => WhereOperator::Or,
                };
                let mut translated = Vec::with_capacity(operands.len());
                for operand in operands {
                    translated.push(self.translate(operand)?);
                }
                Ok(WhereFilter::Logical(LogicalWhere {
                    operator: mapped,
                    operands: translated,
                }))
            }
            LogicalOperator::Not => {
                if !self.supports_not {
                    return Err(TrellisError::unsupported_operator("not"));
                }
                let operand = operands.first().ok_or_else(|| {
                    TrellisError::validation("not requires exactly one operand")
                })?;
                Ok(WhereFilter::Logical(LogicalWhere {
                    operator: WhereOperator::Not,
                    operands: vec![self.translate(operand)?],
                }))
            }
        }
    }

    fn translate_comparison(
        &self,
        field: &str,
        operator: ComparisonOperator,
        value: &ComparisonValue,
    ) -> Result<WhereFilter> {
        let mapped = match operator {
            ComparisonOperator::In => {
                return self.expand_membership(
                    field,
                    operator,
                    value,
                    WhereOperator::Equal,
                    WhereOperator::Or,
                );
            }
            ComparisonOperator::Nin => {
                return self.expand_membership(
                    field,
                    operator,
                    value,
                    WhereOperator::NotEqual,
                    WhereOperator::And,
                );
            }
            ComparisonOperator::Eq => WhereOperator::Equal,
            ComparisonOperator::Neq => WhereOperator::NotEqual,
            ComparisonOperator::Gt => WhereOperator::GreaterThan,
            ComparisonOperator::Gte => WhereOperator::GreaterThanEqual,
            ComparisonOperator::Lt => WhereOperator::LessThan,
            ComparisonOperator::Lte => WhereOperator::LessThanEqual,
        };

        let scalar = match value {
            ComparisonValue::Scalar(scalar) => scalar,
            ComparisonValue::List(_) => {
                return Err(TrellisError::validation(format!(
                    "{operator} expects a single value"
                )));
            }
        };

        self.scalar_comparison(field, mapped, scalar)
    }

    fn expand_membership(
        &self,
        field: &str,
        operator: ComparisonOperator,
        value: &ComparisonValue,
        member_operator: WhereOperator,
        combine_operator: WhereOperator,
    ) -> Result<WhereFilter> {
        let values = match value {
            ComparisonValue::List(values) => values,
            ComparisonValue::Scalar(_) => {
                return Err(TrellisError::validation(format!(
                    "{operator} expects a list of values"
                )));
            }
        };
        if values.is_empty() {
            return Err(TrellisError::validation(format!(
                "{operator} requires at least one value"
            )));
        }

        let mut operands = Vec::with_capacity(values.len());
        for value in values {
            operands.push(self.scalar_comparison(field, member_operator, value)?);
        }
        Ok(WhereFilter::Logical(LogicalWhere {
            operator: combine_operator,
            operands,
        }))
    }

    fn scalar_comparison(
        &self,
        field: &str,
        operator: WhereOperator,
        value: &FilterValue,
    ) -> Result<WhereFilter> {
        let declared = self.registry.resolve(field)?;
        let actual = value.kind();
        if declared != actual {
            return Err(TrellisError::type_mismatch(field, declared, actual));
        }
        Ok(WhereFilter::Comparison(ComparisonWhere {
            path: vec![self.registry.prefixed_name(field)],
            operator,
            value: WhereValue::from(value),
        }))
    }
}
