//! End-to-end query composition through the public API.

use chrono::{TimeZone, Utc};
use sqlfrag::prelude::*;
use sqlfrag::Dialect;

#[test]
fn select_with_columns_and_filters() {
    let cols = Columns::from(["foo", "bar"]);

    let mut b = Builder::new();
    addf!(b, "SELECT %s FROM %s", cols, "table");
    addf!(b, "WHERE id = %$", 123);
    const OR_CLAUSE: &str = "OR id = %$";
    addf!(b, OR_CLAUSE, 42);

    let (sql, args) = b.build().unwrap().into_parts();
    assert_eq!(sql, "SELECT foo, bar FROM table\nWHERE id = $1\nOR id = $2");
    assert_eq!(args, vec![Value::Int(123), Value::Int(42)]);
}

#[test]
fn insert_with_question_placeholders() {
    let columns = Columns::from(["id", "created_at", "value"]);

    let mut b = Builder::new();
    addf!(b, "INSERT INTO %s (%s)", "table", columns);
    addf!(b, "VALUES (%?, %?, %?);", 42, "right now", "just testing");

    let built = b.build().unwrap();
    assert_eq!(
        built.sql(),
        "INSERT INTO table (id, created_at, value)\nVALUES (?, ?, ?);"
    );
    assert_eq!(
        built.args(),
        &[
            Value::Int(42),
            Value::from("right now"),
            Value::from("just testing"),
        ]
    );
    assert_eq!(built.dialect(), Some(Dialect::Question));
}

#[test]
fn conditional_filters() {
    let name = Some("the best");
    let category = vec![1, 2, 3];
    let prob = 0.42;
    let limit = 100.1;

    let mut b = Builder::new();
    b.add("SELECT * FROM foo").add("WHERE active IS TRUE");
    if let Some(name) = name {
        addf!(b, "AND name = %$", name);
    }
    if !category.is_empty() {
        addf!(b, "AND category IN (%+$)", category);
    }
    addf!(b, "AND page LIKE '%s'", "pat+");
    addf!(b, "AND prob < %s", prob);
    addf!(b, "LIMIT %d;", limit);

    let built = b.build().unwrap();
    assert_eq!(
        built.sql(),
        "SELECT * FROM foo\n\
         WHERE active IS TRUE\n\
         AND name = $1\n\
         AND category IN ($2, $3, $4)\n\
         AND page LIKE 'pat+'\n\
         AND prob < 0.42\n\
         LIMIT 100.1;"
    );
    assert_eq!(
        built.args(),
        &[
            Value::from("the best"),
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
        ]
    );
}

#[test]
fn insert_values_from_a_list_per_dialect() {
    let params = || Value::List(vec![Value::Int(42), Value::Bool(true), Value::from("str")]);
    let cases: [(&'static str, &str); 3] = [
        ("VALUES (%+$);", "VALUES ($1, $2, $3);"),
        ("VALUES (%+?);", "VALUES (?, ?, ?);"),
        ("VALUES (%+@);", "VALUES (@p1, @p2, @p3);"),
    ];

    for (format, want) in cases {
        let mut b = Builder::new();
        b.add("INSERT INTO table (id, flag, name)");
        b.addf(format, [params()]);

        let built = b.build().unwrap();
        assert_eq!(
            built.sql(),
            format!("INSERT INTO table (id, flag, name)\n{want}")
        );
        assert_eq!(built.args().len(), 3);
    }
}

#[test]
fn multi_row_insert() {
    let rows = vec![
        Value::list([Value::from(1), Value::from("alice")]),
        Value::list([Value::from(2), Value::from("bob")]),
    ];

    let mut b = Builder::oneline();
    b.add("INSERT INTO users (id, name) VALUES");
    addf!(b, "%#$", rows);
    addf!(b, "RETURNING %s", Columns::from(["id"]));

    let built = b.build().unwrap();
    assert_eq!(
        built.sql(),
        "INSERT INTO users (id, name) VALUES ($1, $2), ($3, $4) RETURNING id"
    );
    assert_eq!(
        built.args(),
        &[
            Value::from(1),
            Value::from("alice"),
            Value::from(2),
            Value::from("bob"),
        ]
    );
}

#[test]
fn one_shot_helpers() {
    let cols = Columns::from(["foo, bar"]);
    let built = q!("SELECT %s FROM %s WHERE id = %$", cols, "users", 123).unwrap();
    assert_eq!(built.sql(), "SELECT foo, bar FROM users WHERE id = $1");
    assert_eq!(built.args(), &[Value::Int(123)]);

    let built = sqlfrag::q("SELECT * FROM t WHERE id IN (%+?)", [vec![1, 2]]).unwrap();
    assert_eq!(built.sql(), "SELECT * FROM t WHERE id IN (?, ?)");

    let built = q!("SELECT 100 %% 7").unwrap();
    assert_eq!(built.sql(), "SELECT 100 % 7");
}

#[test]
fn debug_build_shows_inlined_values() {
    let ts = Utc.with_ymd_and_hms(2009, 11, 10, 12, 13, 15).unwrap();

    let mut b = Builder::new();
    addf!(b, "SELECT %s FROM table", Columns::from(["foo", "bar"]));
    addf!(b, "WHERE id = %$", 123);
    addf!(b, "OR id = %$ + %d", "42", 69.069);
    addf!(b, "XOR created_at = %$", ts);
    addf!(b, "MAYBE IN arr = %$", vec![1, 2, 3]);

    assert_eq!(
        b.debug_build(),
        "SELECT foo, bar FROM table\n\
         WHERE id = 123\n\
         OR id = '42' + 69.069\n\
         XOR created_at = '2009-11-10 12:13:15.000000'\n\
         MAYBE IN arr = '[1, 2, 3]'"
    );
}

#[test]
fn errors_render_with_fragment_index() {
    let mut b = Builder::new();
    b.add("SELECT 1");
    addf!(b, "WHERE a = %$ AND b = %?", 1, 2);

    let err = b.build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "mixed placeholders must not be used in a single query: '$' then '?' in fragment 1"
    );
}
