//! Condition builders for WHERE clauses.

use crate::ast::{Expression, Value};

/// `left = right`, null-aware
pub fn eq(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    left.into().equals(right)
}

/// `left != right`, null-aware
pub fn ne(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    left.into().not_equals(right)
}

/// `left > right`
pub fn gt(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    left.into().greater_than(right)
}

/// `left >= right`
pub fn gte(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    left.into().greater_than_or_equal(right)
}

/// `left < right`
pub fn lt(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    left.into().less_than(right)
}

/// `left <= right`
pub fn lte(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    left.into().less_than_or_equal(right)
}

/// `expr IS NULL`
pub fn is_null(expr: impl Into<Expression>) -> Expression {
    expr.into().equals(Value::Null)
}

/// `expr IS NOT NULL`
pub fn is_not_null(expr: impl Into<Expression>) -> Expression {
    expr.into().not_equals(Value::Null)
}

/// `expr IN (values)`
pub fn is_in<V: Into<Value>>(expr: impl Into<Expression>, values: impl IntoIterator<Item = V>) -> Expression {
    expr.into().in_list(values)
}

/// Conjunction of all `conditions`; `None` when empty.
///
/// The result nests one level per condition and rendering recurses through
/// it, so tens of thousands of conditions can exhaust the stack. Test
/// membership in a large set with [`is_in`] instead.
pub fn all(conditions: impl IntoIterator<Item = Expression>) -> Option<Expression> {
    conditions.into_iter().reduce(Expression::and)
}

/// Disjunction of all `conditions`; `None` when empty.
///
/// Nests like [`all`]; for `x = a OR x = b OR ...` prefer [`is_in`].
pub fn any(conditions: impl IntoIterator<Item = Expression>) -> Option<Expression> {
    conditions.into_iter().reduce(Expression::or)
}
