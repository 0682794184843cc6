//! SQL renderer for the query AST.
//!
//! Rendering is a pure fold over the tree. Identifiers are double-quoted,
//! literals come from `Value`'s own escaping, and every binary or unary node
//! is fully parenthesized, so the output never depends on operator precedence.

pub mod expr;
pub mod select;

#[cfg(test)]
mod tests;

use crate::ast::*;

/// Trait for converting AST nodes to SQL.
pub trait ToSql {
    /// Convert this node to a SQL string.
    fn to_sql(&self) -> String;
}

/// Double-quote an identifier, doubling any embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

impl ToSql for Value {
    fn to_sql(&self) -> String {
        self.to_string()
    }
}

impl ToSql for Table {
    fn to_sql(&self) -> String {
        quote_identifier(&self.name)
    }
}

impl ToSql for Column {
    fn to_sql(&self) -> String {
        format!("{}.{}", self.table.to_sql(), quote_identifier(&self.name))
    }
}

/// Joins rendered nodes with `sep`.
pub(crate) fn join_sql<'a, T: ToSql + 'a>(items: impl IntoIterator<Item = &'a T>, sep: &str) -> String {
    items
        .into_iter()
        .map(ToSql::to_sql)
        .collect::<Vec<_>>()
        .join(sep)
}

macro_rules! display_via_sql {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.to_sql())
                }
            }
        )*
    };
}

display_via_sql!(Table, Column, Expression, Ordering, SortDescriptor, Projection, Query);
