//! Extension traits for Expression.

use crate::ast::{Expression, Ordering, Projection};

/// Fluent conversions from an expression into query parts.
pub trait ExpressionExt {
    /// Project this expression under an alias
    fn as_alias(self, alias: &str) -> Projection;
    /// Sort ascending by this expression
    fn asc(self) -> Ordering;
    /// Sort descending by this expression
    fn desc(self) -> Ordering;
}

impl ExpressionExt for Expression {
    fn as_alias(self, alias: &str) -> Projection {
        Projection::aliased(self, alias)
    }

    fn asc(self) -> Ordering {
        Ordering::ascending(self)
    }

    fn desc(self) -> Ordering {
        Ordering::descending(self)
    }
}
