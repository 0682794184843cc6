use super::{ToSql, join_sql, quote_identifier};
use crate::ast::*;

impl ToSql for Projection {
    fn to_sql(&self) -> String {
        match self {
            Projection::Expression(expression) => expression.to_sql(),
            Projection::Aliased { expression, alias } => {
                format!("{} AS {}", expression.to_sql(), quote_identifier(alias))
            }
            Projection::Wildcard(table) => format!("{}.*", table.to_sql()),
        }
    }
}

impl ToSql for Query {
    fn to_sql(&self) -> String {
        build_select(self)
    }
}

/// Generate SELECT SQL.
///
/// Clause order is fixed: SELECT, FROM, WHERE, ORDER BY. FROM lists tables
/// by name and is left out when no table is referenced; WHERE and ORDER BY
/// are left out when empty.
pub fn build_select(query: &Query) -> String {
    let mut sql = String::from("SELECT ");
    sql.push_str(&join_sql(&query.results, ", "));

    let tables = query.tables();
    if !tables.is_empty() {
        sql.push_str(" FROM ");
        sql.push_str(&join_sql(&tables, ", "));
    }

    if !query.predicates.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&join_sql(&query.predicates, " AND "));
    }

    if !query.order.is_empty() {
        sql.push_str(" ORDER BY ");
        sql.push_str(&join_sql(&query.order, ","));
    }

    tracing::trace!(tables = tables.len(), "rendered select: {}", sql);
    sql
}
