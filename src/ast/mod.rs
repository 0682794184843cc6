pub mod builders;
pub mod expr;
pub mod operators;
pub mod ordering;
pub mod query;
pub mod schema;
pub mod values;

pub use self::expr::Expression;
pub use self::operators::{BinaryOp, Direction, Function, UnaryOp};
pub use self::ordering::{Ordering, SortDescriptor};
pub use self::query::{Projection, Query};
pub use self::schema::{Column, Table};
pub use self::values::Value;
