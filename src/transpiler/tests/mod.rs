//! Rendering tests, grouped by node kind.

mod expr;
mod select;

use crate::ast::{Column, Expression, Table};

fn books() -> Table {
    Table::new("books")
}

fn authors() -> Table {
    Table::new("authors")
}

fn column(table: &Table, name: &str) -> Column {
    table.column(name)
}

fn col(table: &Table, name: &str) -> Expression {
    Expression::column(column(table, name))
}
