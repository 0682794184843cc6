//! # sqlir: typed SELECT statements
//!
//! > **Compose predicates as values. Render SQL once, deterministically.**
//!
//! `sqlir` is an immutable intermediate representation for SQL `SELECT`
//! statements and the expressions inside them. Expressions, orderings and
//! queries are plain values: clone them, compare them, hash them, nest them
//! as subqueries. Literals only enter the output through [`ast::Value`], so
//! the rendered text needs no further escaping.
//!
//! ## Quick Example
//!
//! ```
//! use sqlir::prelude::*;
//!
//! let books = Table::new("books");
//! let title = Expression::column(books.column("title"));
//! let year = Expression::column(books.column("year"));
//!
//! let query = Query::select([title.clone()])
//!     .filter(year.greater_than(1990))
//!     .filter(title.clone().not_equals(Value::Null))
//!     .sorted(Ordering::ascending(title));
//!
//! assert_eq!(
//!     query.sql(),
//!     r#"SELECT "books"."title" FROM "books" WHERE ("books"."year" > 1990) AND ("books"."title" IS NOT NULL) ORDER BY "books"."title" ASC"#
//! );
//! ```
//!
//! ## Format
//!
//! | Node        | SQL                                   |
//! |-------------|---------------------------------------|
//! | Column      | `"table"."column"`                    |
//! | Text        | `'it''s'`                             |
//! | Binary      | `(lhs OP rhs)`                        |
//! | Unary       | `(NOT expr)`                          |
//! | Function    | `MAX(a,b)`                            |
//! | In-list     | `(expr IN (v1,v2))`                   |
//! | Exists      | `EXISTS (SELECT ...)`                 |
//! | Wildcard    | `"table".*`                           |

pub mod ast;
pub mod error;
pub mod transpiler;

pub mod prelude {
    pub use crate::ast::builders::ExpressionExt;
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::transpiler::ToSql;
}
