use super::*;

#[test]
fn test_row_get_by_name() {
    let row = Row::from_pairs([("ROUTINE_NAME", "p1"), ("ROUTINE_COMMENT", "")]);

    assert_eq!(row.get_by_name("ROUTINE_NAME"), Some(&Value::from("p1")));
    assert_eq!(row.get_by_name("ROUTINE_COMMENT"), Some(&Value::from("")));
    assert!(row.get_by_name("SQL_MODE").is_none());
}

#[test]
fn test_row_get_by_index() {
    let row = Row::from_pairs([("a", Value::Int64(1)), ("b", Value::Null)]);

    assert_eq!(row.get(0), Some(&Value::Int64(1)));
    assert_eq!(row.get(1), Some(&Value::Null));
    assert!(row.get(2).is_none());
    assert_eq!(row.columns(), &["a".to_string(), "b".to_string()]);
}

#[test]
fn test_row_contains_null_column() {
    let row = Row::from_pairs([("COLLATION_CONNECTION", Value::Null)]);

    assert!(row.contains("COLLATION_CONNECTION"));
    assert!(!row.contains("ROUTINE_NAME"));
}

#[test]
fn test_value_to_text() {
    assert_eq!(Value::Null.to_text(), None);
    assert_eq!(Value::from("abc").to_text(), Some("abc".to_string()));
    assert_eq!(
        Value::Bytes(b"BEGIN END".to_vec()).to_text(),
        Some("BEGIN END".to_string())
    );
    assert_eq!(Value::Int64(7).to_text(), Some("7".to_string()));
}

#[test]
fn test_value_from_option() {
    assert_eq!(Value::from(None::<&str>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
}

#[test]
fn test_query_result_from_rows() {
    let result = QueryResult::from_rows(vec![
        Row::from_pairs([("Procedure", "p1"), ("Create Procedure", "CREATE ...")]),
        Row::from_pairs([("Procedure", "p2"), ("Create Procedure", "CREATE ...")]),
    ]);

    assert!(result.has_rows());
    assert_eq!(result.row_count(), 2);
    assert_eq!(result.columns.len(), 2);
    assert_eq!(result.columns[1].name, "Create Procedure");
    assert_eq!(result.columns[1].ordinal, 1);
    assert_eq!(
        result.first_row().and_then(|r| r.get_by_name("Procedure")),
        Some(&Value::from("p1"))
    );
}

#[test]
fn test_query_result_empty() {
    let result = QueryResult::from_rows(Vec::new());

    assert!(!result.has_rows());
    assert!(result.columns.is_empty());
    assert!(result.first_row().is_none());
}
