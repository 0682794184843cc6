//! Expression rendering tests.

use pretty_assertions::assert_eq;

use super::*;
use crate::ast::builders::{count, is_in, max, min};
use crate::ast::*;
use crate::transpiler::ToSql;

#[test]
fn test_column_is_quoted() {
    assert_eq!(col(&books(), "title").to_sql(), r#""books"."title""#);
}

#[test]
fn test_identifier_quotes_are_escaped() {
    let odd = Table::new("we\"ird");
    assert_eq!(col(&odd, "a").to_sql(), r#""we""ird"."a""#);
}

#[test]
fn test_equals_null_renders_is() {
    let expr = col(&books(), "title").equals(Value::Null);
    assert_eq!(expr.to_sql(), r#"("books"."title" IS NULL)"#);
}

#[test]
fn test_null_not_equals_column_renders_is_not() {
    let expr = Expression::value(Value::Null).not_equals(col(&books(), "title"));
    assert_eq!(expr.to_sql(), r#"("books"."title" IS NOT NULL)"#);
}

#[test]
fn test_nan_compares_like_null() {
    let expr = col(&books(), "rating").equals(f64::NAN);
    assert_eq!(expr.to_sql(), r#"("books"."rating" IS NULL)"#);

    let expr = Expression::value(f64::NAN).not_equals(col(&books(), "rating"));
    assert_eq!(expr.to_sql(), r#"("books"."rating" IS NOT NULL)"#);
}

#[test]
fn test_equals_text() {
    let expr = col(&books(), "title").equals("x");
    assert_eq!(expr.to_sql(), r#"("books"."title" = 'x')"#);
}

#[test]
fn test_not_equals_value() {
    let expr = col(&books(), "year").not_equals(2001);
    assert_eq!(expr.to_sql(), r#"("books"."year" != 2001)"#);
}

#[test]
fn test_comparisons() {
    let year = col(&books(), "year");
    assert_eq!(year.clone().less_than(3).to_sql(), r#"("books"."year" < 3)"#);
    assert_eq!(year.clone().greater_than(3).to_sql(), r#"("books"."year" > 3)"#);
    assert_eq!(year.clone().less_than_or_equal(3).to_sql(), r#"("books"."year" <= 3)"#);
    assert_eq!(year.greater_than_or_equal(3).to_sql(), r#"("books"."year" >= 3)"#);
}

#[test]
fn test_logic_is_fully_parenthesized() {
    let a = col(&books(), "a").equals(1);
    let b = col(&books(), "b").equals(2);
    let c = col(&books(), "c").equals(3);
    let expr = a.and(b.or(c)).not();
    assert_eq!(
        expr.to_sql(),
        r#"(NOT (("books"."a" = 1) AND (("books"."b" = 2) OR ("books"."c" = 3))))"#
    );
}

#[test]
fn test_in_list() {
    let expr = is_in(col(&books(), "genre"), ["a", "b"]);
    assert_eq!(expr.to_sql(), r#"("books"."genre" IN ('a','b'))"#);

    let expr = col(&books(), "year").in_list([1999, 2000, 2001]);
    assert_eq!(expr.to_sql(), r#"("books"."year" IN (1999,2000,2001))"#);
}

#[test]
fn test_functions() {
    let expr = max([col(&books(), "year"), col(&books(), "edition")]);
    assert_eq!(expr.to_sql(), r#"MAX("books"."year","books"."edition")"#);
    assert_eq!(min([col(&books(), "year")]).to_sql(), r#"MIN("books"."year")"#);
    assert_eq!(count(col(&books(), "id")).to_sql(), r#"COUNT("books"."id")"#);
}

#[test]
fn test_join_renders_inner_only() {
    let expr = Expression::join(
        column(&books(), "author"),
        column(&authors(), "id"),
        col(&authors(), "name").equals("Le Guin"),
    );
    assert_eq!(expr.to_sql(), r#"("authors"."name" = 'Le Guin')"#);
}

#[test]
fn test_exists() {
    let query = Query::select([authors()]).filter(col(&authors(), "id").equals(1));
    let sql = query.sql();
    assert_eq!(query.exists().to_sql(), format!("EXISTS ({})", sql));
}

#[test]
fn test_ordering() {
    let title = col(&books(), "title");
    assert_eq!(Ordering::ascending(title.clone()).to_sql(), r#""books"."title" ASC"#);
    assert_eq!(Ordering::descending(title.clone()).to_sql(), r#""books"."title" DESC"#);

    let descriptor = SortDescriptor::new([
        Ordering::descending(col(&books(), "year")),
        Ordering::ascending(title),
    ]);
    assert_eq!(
        descriptor.to_sql(),
        r#""books"."year" DESC,"books"."title" ASC"#
    );
}

#[test]
fn test_display_matches_to_sql() {
    let expr = col(&books(), "title").equals("x");
    assert_eq!(expr.to_string(), expr.to_sql());
}

#[test]
fn test_rendering_is_deterministic() {
    let expr = col(&books(), "a")
        .equals(Value::Null)
        .or(col(&authors(), "b").in_list([1.5, 2.0]));
    assert_eq!(expr.to_sql(), expr.clone().to_sql());
    assert_eq!(
        expr.to_sql(),
        r#"(("books"."a" IS NULL) OR ("authors"."b" IN (1.5,2.0)))"#
    );
}
