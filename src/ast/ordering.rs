use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::ast::{Direction, Expression, Table};

/// An expression paired with a sort direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ordering {
    pub expression: Expression,
    pub direction: Direction,
}

impl Ordering {
    pub fn new(expression: impl Into<Expression>, direction: Direction) -> Self {
        Self {
            expression: expression.into(),
            direction,
        }
    }

    pub fn ascending(expression: impl Into<Expression>) -> Self {
        Self::new(expression, Direction::Ascending)
    }

    pub fn descending(expression: impl Into<Expression>) -> Self {
        Self::new(expression, Direction::Descending)
    }
}

/// A sort rule: one or more orderings forming a single ORDER BY term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub orderings: Vec<Ordering>,
}

impl SortDescriptor {
    pub fn new(orderings: impl IntoIterator<Item = Ordering>) -> Self {
        Self {
            orderings: orderings.into_iter().collect(),
        }
    }

    /// Tables referenced by the sort expressions.
    pub fn tables(&self) -> BTreeSet<Table> {
        self.orderings
            .iter()
            .flat_map(|o| o.expression.tables())
            .collect()
    }
}

impl From<Ordering> for SortDescriptor {
    fn from(ordering: Ordering) -> Self {
        Self {
            orderings: vec![ordering],
        }
    }
}
