//! SELECT rendering tests.

use pretty_assertions::assert_eq;

use super::*;
use crate::ast::builders::ExpressionExt;
use crate::ast::*;
use crate::transpiler::ToSql;

#[test]
fn test_simple_select() {
    let query = Query::select([col(&books(), "id")]);
    assert_eq!(query.sql(), r#"SELECT "books"."id" FROM "books""#);
}

#[test]
fn test_wildcard() {
    let query = Query::select([books()]);
    assert_eq!(query.sql(), r#"SELECT "books".* FROM "books""#);
}

#[test]
fn test_results_keep_order() {
    let query = Query::select([
        Projection::from(col(&books(), "title")),
        Projection::Wildcard(authors()),
        col(&books(), "year").as_alias("published"),
    ]);
    assert_eq!(
        query.sql(),
        r#"SELECT "books"."title", "authors".*, "books"."year" AS "published" FROM "authors", "books""#
    );
}

#[test]
fn test_single_predicate() {
    let query = Query::select([books()]).filter(col(&books(), "year").greater_than(1990));
    assert_eq!(
        query.sql(),
        r#"SELECT "books".* FROM "books" WHERE ("books"."year" > 1990)"#
    );
}

#[test]
fn test_predicates_in_call_order() {
    let query = Query::select([books()])
        .filter(col(&books(), "year").greater_than(1990))
        .filter(col(&books(), "title").equals(Value::Null));
    assert_eq!(
        query.sql(),
        r#"SELECT "books".* FROM "books" WHERE ("books"."year" > 1990) AND ("books"."title" IS NULL)"#
    );
}

#[test]
fn test_latest_sort_is_primary() {
    let query = Query::select([books()])
        .sorted(col(&books(), "title").asc())
        .sorted(col(&books(), "year").desc());
    assert_eq!(
        query.sql(),
        r#"SELECT "books".* FROM "books" ORDER BY "books"."year" DESC,"books"."title" ASC"#
    );
}

#[test]
fn test_sorted_by_list_keeps_relative_order() {
    let query = Query::select([books()])
        .sorted(col(&books(), "id").asc())
        .sorted_by([col(&books(), "year").desc(), col(&books(), "title").asc()]);
    assert_eq!(
        query.sql(),
        r#"SELECT "books".* FROM "books" ORDER BY "books"."year" DESC,"books"."title" ASC,"books"."id" ASC"#
    );
}

#[test]
fn test_from_lists_tables_by_name() {
    let query = Query::select([col(&books(), "title"), col(&authors(), "name")])
        .filter(col(&Table::new("awards"), "year").equals(2000));
    assert_eq!(
        query.sql(),
        r#"SELECT "books"."title", "authors"."name" FROM "authors", "awards", "books" WHERE ("awards"."year" = 2000)"#
    );
}

#[test]
fn test_predicate_only_table_in_from() {
    let query = Query::select([col(&books(), "title")])
        .filter(col(&authors(), "name").equals("Le Guin"));
    assert!(query.sql().contains(r#"FROM "authors", "books""#));
}

#[test]
fn test_order_table_not_in_from() {
    let query = Query::select([books()]).sorted(col(&authors(), "name").asc());
    assert_eq!(
        query.sql(),
        r#"SELECT "books".* FROM "books" ORDER BY "authors"."name" ASC"#
    );
}

#[test]
fn test_no_tables_omits_from() {
    let query = Query::select([Expression::value(1)]);
    assert_eq!(query.sql(), "SELECT 1");
}

#[test]
fn test_exists_subquery() {
    let inner = Query::select([authors()])
        .filter(col(&authors(), "id").equals(7));
    let query = Query::select([books()]).filter(inner.exists());
    assert_eq!(
        query.sql(),
        r#"SELECT "books".* FROM "books" WHERE EXISTS (SELECT "authors".* FROM "authors" WHERE ("authors"."id" = 7))"#
    );
}

#[test]
fn test_implicit_join_query() {
    let predicate = Expression::join(
        column(&books(), "author"),
        column(&authors(), "id"),
        col(&authors(), "name").equals("Le Guin"),
    );
    let query = Query::select([col(&books(), "title")])
        .filter(predicate)
        .with_implicit_joins();
    assert_eq!(
        query.sql(),
        r#"SELECT "books"."title" FROM "authors", "books" WHERE ("authors"."name" = 'Le Guin') AND ("books"."author" = "authors"."id")"#
    );
}

#[test]
fn test_query_display() {
    let query = Query::select([books()]);
    assert_eq!(query.to_string(), query.to_sql());
}
