use super::{ToSql, join_sql};
use crate::ast::*;

impl ToSql for Expression {
    fn to_sql(&self) -> String {
        match self {
            Expression::Binary { op, left, right } => {
                format!("({} {} {})", left.to_sql(), op, right.to_sql())
            }
            Expression::Unary { op, expr } => format!("({} {})", op, expr.to_sql()),
            Expression::Column(column) => column.to_sql(),
            Expression::Value(value) => value.to_sql(),
            Expression::Function { func, args } => format!("{}({})", func, join_sql(args, ",")),
            Expression::InList { expr, values } => {
                format!("({} IN ({}))", expr.to_sql(), join_sql(values, ","))
            }
            // The join pair is metadata; only the carried expression renders.
            Expression::Join { expr, .. } => expr.to_sql(),
            Expression::Exists(query) => format!("EXISTS ({})", query.to_sql()),
        }
    }
}

impl ToSql for Ordering {
    fn to_sql(&self) -> String {
        format!("{} {}", self.expression.to_sql(), self.direction)
    }
}

impl ToSql for SortDescriptor {
    fn to_sql(&self) -> String {
        join_sql(&self.orderings, ",")
    }
}
