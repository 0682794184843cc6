//! Ergonomic builder functions for expressions.
//!
//! Free-function counterparts to the `Expression` methods, for code that
//! reads better prefix-style.
//!
//! # Example
//! ```
//! use sqlir::ast::builders::*;
//! use sqlir::ast::{Query, Table};
//!
//! let books = Table::new("books");
//! let query = Query::select([col(&books, "title").as_alias("t")])
//!     .filter(gt(col(&books, "year"), 1990))
//!     .sorted(col(&books, "title").asc());
//!
//! assert_eq!(
//!     query.sql(),
//!     r#"SELECT "books"."title" AS "t" FROM "books" WHERE ("books"."year" > 1990) ORDER BY "books"."title" ASC"#
//! );
//! ```

pub mod conditions;
pub mod ext;
pub mod functions;

pub use conditions::*;
pub use ext::ExpressionExt;
pub use functions::*;

use crate::ast::{Expression, Table, Value};

/// Column reference expression (`"table"."name"`)
pub fn col(table: &Table, name: &str) -> Expression {
    Expression::Column(table.column(name))
}

/// Literal expression
pub fn lit(value: impl Into<Value>) -> Expression {
    Expression::Value(value.into())
}

/// NULL literal
pub fn null() -> Expression {
    Expression::Value(Value::Null)
}
