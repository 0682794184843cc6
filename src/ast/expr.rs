use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::ast::{BinaryOp, Column, Function, Query, Table, UnaryOp, Value};

/// A node of the SQL expression tree.
///
/// Expressions are immutable values: equality and hashing are structural, and
/// the derived `Hash` folds in the variant, the operator and each operand in
/// position, so `a AND b`, `b AND a` and `a OR b` all hash independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    /// `(left op right)`
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `(op expr)`
    Unary { op: UnaryOp, expr: Box<Expression> },
    /// A column reference
    Column(Column),
    /// A literal
    Value(Value),
    /// `FUNC(arg, ...)`
    Function { func: Function, args: Vec<Expression> },
    /// `(expr IN (v, ...))`
    InList { expr: Box<Expression>, values: Vec<Value> },
    /// An implicit equality join between `left` and `right`, carried
    /// alongside `expr`. Renders as `expr` alone; see [`Expression::joins`].
    Join {
        left: Column,
        right: Column,
        expr: Box<Expression>,
    },
    /// `EXISTS (subquery)`
    Exists(Box<Query>),
}

impl Expression {
    pub fn column(column: Column) -> Self {
        Expression::Column(column)
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Expression::Value(value.into())
    }

    /// Build a binary node as-is. Prefer [`Expression::equals`] and
    /// [`Expression::not_equals`] for comparisons, which handle NULL.
    pub fn binary(op: BinaryOp, left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    pub fn unary(op: UnaryOp, expr: impl Into<Expression>) -> Self {
        Expression::Unary {
            op,
            expr: Box::new(expr.into()),
        }
    }

    pub fn function<E: Into<Expression>>(func: Function, args: impl IntoIterator<Item = E>) -> Self {
        Expression::Function {
            func,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark an implicit join of `left = right` on top of `expr`.
    pub fn join(left: Column, right: Column, expr: impl Into<Expression>) -> Self {
        Expression::Join {
            left,
            right,
            expr: Box::new(expr.into()),
        }
    }

    /// Wrap a subquery as an EXISTS predicate.
    pub fn exists(query: Query) -> Self {
        Expression::Exists(Box::new(query))
    }

    /// `self IN (values)`
    pub fn in_list<V: Into<Value>>(self, values: impl IntoIterator<Item = V>) -> Self {
        Expression::InList {
            expr: Box::new(self),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// `self = rhs`, or `self IS NULL` when either side is the NULL literal.
    pub fn equals(self, rhs: impl Into<Expression>) -> Self {
        Self::null_aware(BinaryOp::Equal, BinaryOp::Is, self, rhs.into())
    }

    /// `self != rhs`, or `self IS NOT NULL` when either side is the NULL literal.
    pub fn not_equals(self, rhs: impl Into<Expression>) -> Self {
        Self::null_aware(BinaryOp::NotEqual, BinaryOp::IsNot, self, rhs.into())
    }

    // The NULL literal always ends up on the right: `x = NULL` is never true
    // in SQL, `x IS NULL` is.
    fn null_aware(op: BinaryOp, null_op: BinaryOp, lhs: Expression, rhs: Expression) -> Self {
        match (lhs.is_null_literal(), rhs.is_null_literal()) {
            (_, true) => Self::binary(null_op, lhs, rhs),
            (true, false) => Self::binary(null_op, rhs, lhs),
            (false, false) => Self::binary(op, lhs, rhs),
        }
    }

    pub fn and(self, rhs: impl Into<Expression>) -> Self {
        Self::binary(BinaryOp::And, self, rhs)
    }

    pub fn or(self, rhs: impl Into<Expression>) -> Self {
        Self::binary(BinaryOp::Or, self, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::unary(UnaryOp::Not, self)
    }

    pub fn less_than(self, rhs: impl Into<Expression>) -> Self {
        Self::binary(BinaryOp::LessThan, self, rhs)
    }

    pub fn less_than_or_equal(self, rhs: impl Into<Expression>) -> Self {
        Self::binary(BinaryOp::LessThanOrEqual, self, rhs)
    }

    pub fn greater_than(self, rhs: impl Into<Expression>) -> Self {
        Self::binary(BinaryOp::GreaterThan, self, rhs)
    }

    pub fn greater_than_or_equal(self, rhs: impl Into<Expression>) -> Self {
        Self::binary(BinaryOp::GreaterThanOrEqual, self, rhs)
    }

    /// Returns true if this node renders as the NULL literal, NaN included.
    pub fn is_null_literal(&self) -> bool {
        match self {
            Expression::Value(Value::Null) => true,
            Expression::Value(Value::Real(n)) => n.is_nan(),
            _ => false,
        }
    }

    /// Every table referenced by a column or join endpoint in this tree.
    ///
    /// Subqueries are opaque: an `EXISTS` node contributes nothing here, its
    /// query computes its own tables.
    pub fn tables(&self) -> BTreeSet<Table> {
        let mut tables = BTreeSet::new();
        self.walk(&mut |node| match node {
            Expression::Column(column) => {
                tables.insert(column.table.clone());
            }
            Expression::Join { left, right, .. } => {
                tables.insert(left.table.clone());
                tables.insert(right.table.clone());
            }
            _ => {}
        });
        tables
    }

    /// One `left = right` predicate per distinct join marker in this tree,
    /// in pre-order of first appearance.
    ///
    /// Nothing conjoins these automatically; see `Query::with_implicit_joins`.
    pub fn joins(&self) -> Vec<Expression> {
        let mut seen = HashSet::new();
        let mut joins = Vec::new();
        self.walk(&mut |node| {
            if let Expression::Join { left, right, .. } = node {
                let predicate = Expression::binary(
                    BinaryOp::Equal,
                    Expression::Column(left.clone()),
                    Expression::Column(right.clone()),
                );
                if seen.insert(predicate.clone()) {
                    joins.push(predicate);
                }
            }
        });
        joins
    }

    /// Pre-order traversal that stops at subquery boundaries.
    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Expression)) {
        visit(self);
        match self {
            Expression::Binary { left, right, .. } => {
                left.walk(visit);
                right.walk(visit);
            }
            Expression::Unary { expr, .. }
            | Expression::InList { expr, .. }
            | Expression::Join { expr, .. } => expr.walk(visit),
            Expression::Function { args, .. } => {
                for arg in args {
                    arg.walk(visit);
                }
            }
            Expression::Column(_) | Expression::Value(_) | Expression::Exists(_) => {}
        }
    }
}

impl std::ops::Not for Expression {
    type Output = Expression;

    fn not(self) -> Expression {
        Expression::not(self)
    }
}

impl From<Column> for Expression {
    fn from(column: Column) -> Self {
        Expression::Column(column)
    }
}

impl From<&Column> for Expression {
    fn from(column: &Column) -> Self {
        Expression::Column(column.clone())
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Expression::Value(value)
    }
}

macro_rules! literal_into_expression {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expression {
                fn from(v: $ty) -> Self {
                    Expression::Value(Value::from(v))
                }
            }
        )*
    };
}

literal_into_expression!(bool, i32, i64, f64, &str, String, Vec<u8>, NaiveDateTime);
