use super::*;
use std::io::Write;

#[test]
fn test_new_mysql_config() {
    let config = ConnectionConfig::new_mysql("localhost", 3306, "shop", "root");

    assert_eq!(config.driver, "mysql");
    assert_eq!(config.get_string("host").as_deref(), Some("localhost"));
    assert_eq!(config.get_string("database").as_deref(), Some("shop"));
    assert_eq!(config.get_string("username").as_deref(), Some("root"));
    assert!(config.get_string("password").is_none());
}

#[test]
fn test_params_override_fields() {
    let config = ConnectionConfig::new_mysql("localhost", 3306, "shop", "root")
        .with_param("host", "replica.internal")
        .with_param("connect_timeout", 5);

    assert_eq!(config.get_string("host").as_deref(), Some("replica.internal"));
    assert_eq!(config.get_string("connect_timeout").as_deref(), Some("5"));
}

#[test]
fn test_empty_host_is_unset() {
    let config = ConnectionConfig::new("mysql", "bare");
    assert!(config.get_string("host").is_none());
}

#[test]
fn test_port_or_default() {
    let mut config = ConnectionConfig::new("mysql", "MySQL");
    assert_eq!(config.port_or(3306), 3306);

    config.port = 3310;
    assert_eq!(config.port_or(3306), 3310);
}

#[test]
fn test_from_toml_minimal() {
    let config = ConnectionConfig::from_toml_str(r#"driver = "mysql""#).unwrap();

    assert_eq!(config.driver, "mysql");
    assert_eq!(config.port, 0);
    assert!(config.database.is_none());
    assert!(config.params.is_empty());
}

#[test]
fn test_from_toml_with_params() {
    let config = ConnectionConfig::from_toml_str(
        r#"
        driver = "mysql"
        host = "127.0.0.1"
        database = "inventory"
        password = "secret"

        [params]
        ssl_mode = "disabled"
        "#,
    )
    .unwrap();

    assert_eq!(config.get_string("password").as_deref(), Some("secret"));
    assert_eq!(config.get_string("ssl_mode").as_deref(), Some("disabled"));
}

#[test]
fn test_from_toml_rejects_empty_driver() {
    let err = ConnectionConfig::from_toml_str(r#"driver = "  ""#).unwrap_err();
    assert!(matches!(err, SchemaObjectError::Configuration(_)));
}

#[test]
fn test_from_toml_rejects_missing_driver() {
    let err = ConnectionConfig::from_toml_str(r#"host = "localhost""#).unwrap_err();
    assert!(matches!(err, SchemaObjectError::Toml(_)));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "driver = \"mysql\"\nport = 3307\ndatabase = \"app\"").unwrap();

    let config = ConnectionConfig::from_file(file.path()).unwrap();
    assert_eq!(config.port_or(3306), 3307);
    assert_eq!(config.database.as_deref(), Some("app"));
}

#[test]
fn test_from_missing_file() {
    let err = ConnectionConfig::from_file("/nonexistent/schemaobject.toml").unwrap_err();
    assert!(matches!(err, SchemaObjectError::Io(_)));
}
