//! Function call builders (MAX, MIN, COUNT).

use crate::ast::{Expression, Function};

/// MAX(args...)
pub fn max<E: Into<Expression>>(args: impl IntoIterator<Item = E>) -> Expression {
    Expression::function(Function::Max, args)
}

/// MIN(args...)
pub fn min<E: Into<Expression>>(args: impl IntoIterator<Item = E>) -> Expression {
    Expression::function(Function::Min, args)
}

/// COUNT(expr)
pub fn count(expr: impl Into<Expression>) -> Expression {
    let expr: Expression = expr.into();
    Expression::function(Function::Count, [expr])
}
