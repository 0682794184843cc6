use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::ast::{Expression, SortDescriptor, Table};
use crate::error::{QueryError, QueryResult};
use crate::transpiler::ToSql;

/// One item of a SELECT list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Projection {
    /// A scalar expression
    Expression(Expression),
    /// `expr AS "alias"`
    Aliased { expression: Expression, alias: String },
    /// `"table".*`
    Wildcard(Table),
}

impl Projection {
    pub fn aliased(expression: impl Into<Expression>, alias: impl Into<String>) -> Self {
        Projection::Aliased {
            expression: expression.into(),
            alias: alias.into(),
        }
    }

    /// The projected expression, if this is not a wildcard.
    pub fn expression(&self) -> Option<&Expression> {
        match self {
            Projection::Expression(expression) | Projection::Aliased { expression, .. } => {
                Some(expression)
            }
            Projection::Wildcard(_) => None,
        }
    }

    pub fn tables(&self) -> BTreeSet<Table> {
        match self {
            Projection::Wildcard(table) => BTreeSet::from([table.clone()]),
            Projection::Expression(expression) | Projection::Aliased { expression, .. } => {
                expression.tables()
            }
        }
    }
}

impl From<Expression> for Projection {
    fn from(expression: Expression) -> Self {
        Projection::Expression(expression)
    }
}

impl From<Table> for Projection {
    fn from(table: Table) -> Self {
        Projection::Wildcard(table)
    }
}

/// A SELECT statement.
///
/// `results` fixes the column order, `predicates` are ANDed in the order they
/// were added, and `order` lists ORDER BY terms from primary to last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Query {
    pub results: Vec<Projection>,
    pub predicates: Vec<Expression>,
    pub order: Vec<SortDescriptor>,
}

impl Query {
    /// Start a query selecting `results`, with no filter and no ordering.
    pub fn select<P: Into<Projection>>(results: impl IntoIterator<Item = P>) -> Self {
        Self {
            results: results.into_iter().map(Into::into).collect(),
            predicates: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Add a predicate (WHERE). Multiple calls AND together.
    pub fn filter(mut self, predicate: impl Into<Expression>) -> Self {
        self.predicates.push(predicate.into());
        self
    }

    /// Sort by `descriptors`, ahead of any existing ordering: the most recent
    /// call supplies the primary sort keys.
    pub fn sorted_by<D: Into<SortDescriptor>>(
        mut self,
        descriptors: impl IntoIterator<Item = D>,
    ) -> Self {
        let mut order: Vec<SortDescriptor> = descriptors.into_iter().map(Into::into).collect();
        order.append(&mut self.order);
        self.order = order;
        self
    }

    /// Single-descriptor form of [`Query::sorted_by`].
    pub fn sorted(self, descriptor: impl Into<SortDescriptor>) -> Self {
        let descriptor: SortDescriptor = descriptor.into();
        self.sorted_by([descriptor])
    }

    /// Tables for the FROM clause: everything the results and predicates
    /// mention. ORDER BY expressions do not contribute.
    pub fn tables(&self) -> BTreeSet<Table> {
        self.results
            .iter()
            .flat_map(Projection::tables)
            .chain(self.predicates.iter().flat_map(Expression::tables))
            .collect()
    }

    /// Render this query as SQL.
    pub fn sql(&self) -> String {
        self.to_sql()
    }

    /// Wrap this query as an `EXISTS (...)` predicate.
    pub fn exists(self) -> Expression {
        Expression::exists(self)
    }

    /// Append the equality predicates implied by every join marker in the
    /// results, predicates and ordering, skipping ones already present.
    pub fn with_implicit_joins(mut self) -> Self {
        let mut joins: Vec<Expression> = Vec::new();
        let expressions = self
            .results
            .iter()
            .filter_map(Projection::expression)
            .chain(self.predicates.iter())
            .chain(
                self.order
                    .iter()
                    .flat_map(|d| d.orderings.iter().map(|o| &o.expression)),
            );
        for expression in expressions {
            for join in expression.joins() {
                if !joins.contains(&join) && !self.predicates.contains(&join) {
                    joins.push(join);
                }
            }
        }
        tracing::debug!("folding {} implicit join predicate(s) into query", joins.len());
        self.predicates.extend(joins);
        self
    }

    /// Check that the query is meaningful SQL.
    ///
    /// Rendering never fails, so a query sorting by a table that is absent
    /// from FROM still renders; this is where such queries are rejected.
    pub fn validate(&self) -> QueryResult<()> {
        if self.results.is_empty() {
            tracing::debug!("rejecting query with empty projection");
            return Err(QueryError::EmptyProjection);
        }
        let tables = self.tables();
        for descriptor in &self.order {
            if let Some(table) = descriptor.tables().into_iter().find(|t| !tables.contains(t)) {
                tracing::debug!("rejecting query: ORDER BY references '{}'", table.name);
                return Err(QueryError::dangling(table.name));
            }
        }
        Ok(())
    }
}
