use super::*;

#[test]
fn test_literal_escaping() {
    assert_eq!(value_to_mysql_literal(&Value::Null), "NULL");
    assert_eq!(value_to_mysql_literal(&Value::Bool(true)), "TRUE");
    assert_eq!(value_to_mysql_literal(&Value::Int64(-3)), "-3");
    assert_eq!(value_to_mysql_literal(&Value::from("o'neil")), "'o''neil'");
    assert_eq!(value_to_mysql_literal(&Value::from(r"a\b")), r"'a\\b'");
    assert_eq!(value_to_mysql_literal(&Value::Bytes(vec![0x01, 0xab])), "X'01ab'");
}

#[test]
fn test_bind_params_in_order() {
    let sql = bind_params(
        "SELECT * FROM t WHERE a = ? AND b = ?",
        &[Value::Int64(1), Value::from("x")],
    );
    assert_eq!(sql, "SELECT * FROM t WHERE a = 1 AND b = 'x'");
}

#[test]
fn test_bind_params_skips_quoted_placeholders() {
    let sql = bind_params("SELECT '?', `a?` FROM t WHERE c = ?", &[Value::Int64(7)]);
    assert_eq!(sql, "SELECT '?', `a?` FROM t WHERE c = 7");
}

#[test]
fn test_bind_params_backslash_escaped_quote() {
    let sql = bind_params(r"SELECT 'it\'s ?' WHERE a = ?", &[Value::Int64(7)]);
    assert_eq!(sql, r"SELECT 'it\'s ?' WHERE a = 7");

    let sql = bind_params(r#"SELECT "a\"?" , 'b\\' WHERE c = ?"#, &[Value::Int64(1)]);
    assert_eq!(sql, r#"SELECT "a\"?" , 'b\\' WHERE c = 1"#);
}

#[test]
fn test_bind_params_backslash_in_identifier() {
    let sql = bind_params(r"SELECT `a\` WHERE c = ?", &[Value::Int64(3)]);
    assert_eq!(sql, r"SELECT `a\` WHERE c = 3");
}

#[test]
fn test_bind_params_value_containing_placeholder() {
    let sql = bind_params("VALUES (?, ?)", &[Value::from("?"), Value::Int64(2)]);
    assert_eq!(sql, "VALUES ('?', 2)");
}

#[test]
fn test_bind_params_without_params() {
    assert_eq!(bind_params("SELECT ?", &[]), "SELECT ?");
}

#[test]
fn test_bind_params_surplus_placeholders() {
    assert_eq!(bind_params("(?, ?)", &[Value::Null]), "(NULL, ?)");
}

#[test]
fn test_text_protocol_strings() {
    let value = mysql_value_to_value(
        mysql_async::Value::Bytes(b"utf8mb4_general_ci".to_vec()),
        ColumnType::MYSQL_TYPE_VAR_STRING,
    );
    assert_eq!(value, Value::from("utf8mb4_general_ci"));
}

#[test]
fn test_text_protocol_numbers() {
    assert_eq!(
        mysql_value_to_value(
            mysql_async::Value::Bytes(b"42".to_vec()),
            ColumnType::MYSQL_TYPE_LONGLONG
        ),
        Value::Int64(42)
    );
    assert_eq!(
        mysql_value_to_value(
            mysql_async::Value::Bytes(b"1.50".to_vec()),
            ColumnType::MYSQL_TYPE_NEWDECIMAL
        ),
        Value::Decimal("1.50".to_string())
    );
    assert_eq!(
        mysql_value_to_value(
            mysql_async::Value::Bytes(b"0.5".to_vec()),
            ColumnType::MYSQL_TYPE_DOUBLE
        ),
        Value::Float64(0.5)
    );
}

#[test]
fn test_invalid_utf8_stays_binary() {
    let value = mysql_value_to_value(
        mysql_async::Value::Bytes(vec![0xff, 0xfe]),
        ColumnType::MYSQL_TYPE_BLOB,
    );
    assert_eq!(value, Value::Bytes(vec![0xff, 0xfe]));
}

#[test]
fn test_null_and_unsigned() {
    assert_eq!(
        mysql_value_to_value(mysql_async::Value::NULL, ColumnType::MYSQL_TYPE_STRING),
        Value::Null
    );
    assert_eq!(
        mysql_value_to_value(mysql_async::Value::UInt(9), ColumnType::MYSQL_TYPE_LONGLONG),
        Value::Int64(9)
    );
    assert_eq!(
        mysql_value_to_value(
            mysql_async::Value::UInt(u64::MAX),
            ColumnType::MYSQL_TYPE_LONGLONG
        ),
        Value::Decimal(u64::MAX.to_string())
    );
}

#[test]
fn test_binary_protocol_dates() {
    let date = mysql_value_to_value(
        mysql_async::Value::Date(2024, 2, 29, 0, 0, 0, 0),
        ColumnType::MYSQL_TYPE_DATE,
    );
    assert_eq!(
        date,
        Value::Date(chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
    );

    let datetime = mysql_value_to_value(
        mysql_async::Value::Date(2024, 2, 29, 13, 5, 9, 0),
        ColumnType::MYSQL_TYPE_DATETIME,
    );
    assert!(matches!(datetime, Value::DateTime(_)));
}

#[test]
fn test_binary_protocol_time() {
    let value = mysql_value_to_value(
        mysql_async::Value::Time(true, 1, 2, 3, 4, 5),
        ColumnType::MYSQL_TYPE_TIME,
    );
    assert_eq!(value, Value::from("-26:03:04.000005"));
}
