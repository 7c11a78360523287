//! MySQL connection implementation

use async_trait::async_trait;
use mysql_async::{
    Conn, Opts, OptsBuilder, Pool, PoolConstraints, PoolOpts, Row as MySqlRow,
    consts::ColumnType, prelude::*,
};
use schemaobject_core::{
    ColumnMeta, Connection, QueryResult, Result, Row, SchemaObjectError, StatementResult, Value,
};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(test)]
mod tests;

/// Global Tokio runtime for MySQL operations.
///
/// mysql_async spawns its pool and networking tasks with `tokio::spawn`, so
/// every call is dispatched onto this runtime regardless of the caller's
/// executor.
fn get_mysql_runtime() -> &'static tokio::runtime::Runtime {
    static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("schemaobject-mysql-runtime")
            .build()
            .expect("Failed to create Tokio runtime for MySQL driver")
    })
}

/// MySQL connection wrapper
pub struct MySqlConnection {
    pool: Pool,
    closed: AtomicBool,
}

impl MySqlConnection {
    /// Connect to a MySQL database
    pub async fn connect(
        host: &str,
        port: u16,
        database: Option<&str>,
        user: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self> {
        tracing::info!(host = %host, port = %port, database = ?database, "connecting to MySQL database");

        let mut opts_builder = OptsBuilder::from_opts(Opts::default())
            .ip_or_hostname(host)
            .tcp_port(port);

        if let Some(db) = database {
            opts_builder = opts_builder.db_name(Some(db));
        }
        if let Some(u) = user {
            opts_builder = opts_builder.user(Some(u));
        }
        if let Some(p) = password {
            opts_builder = opts_builder.pass(Some(p));
        }

        let constraints = PoolConstraints::new(1, 1).ok_or_else(|| {
            SchemaObjectError::Connection(
                "Failed to configure MySQL pool constraints (min=1, max=1)".into(),
            )
        })?;

        let pool_opts = PoolOpts::default()
            .with_constraints(constraints)
            .with_reset_connection(false);
        opts_builder = opts_builder.pool_opts(pool_opts);

        let opts: Opts = opts_builder.into();

        let pool = get_mysql_runtime()
            .spawn(async move {
                let pool = Pool::new(opts);
                let _conn = pool.get_conn().await.map_err(|e| {
                    SchemaObjectError::Connection(format!("Failed to connect to MySQL: {}", e))
                })?;
                Ok::<Pool, SchemaObjectError>(pool)
            })
            .await
            .map_err(|e| {
                SchemaObjectError::Connection(format!("MySQL connection task failed: {}", e))
            })??;

        tracing::info!(host = %host, port = %port, database = ?database, "MySQL connection established");
        Ok(Self {
            pool,
            closed: AtomicBool::new(false),
        })
    }

    /// Get a connection from the pool, dispatched on the MySQL Tokio runtime
    async fn get_conn(&self) -> Result<Conn> {
        if self.is_closed() {
            return Err(SchemaObjectError::Connection(
                "MySQL connection is closed".into(),
            ));
        }
        let pool = self.pool.clone();
        get_mysql_runtime()
            .spawn(async move { pool.get_conn().await })
            .await
            .map_err(|e| {
                SchemaObjectError::Connection(format!("MySQL get_conn task failed: {}", e))
            })?
            .map_err(|e| {
                SchemaObjectError::Connection(format!("Failed to get MySQL connection: {}", e))
            })
    }
}

/// Escape a value for SQL literal inclusion
fn value_to_mysql_literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(v) => if *v { "TRUE" } else { "FALSE" }.to_string(),
        Value::Int64(v) => v.to_string(),
        Value::Float64(v) => v.to_string(),
        Value::Decimal(v) => v.to_string(),
        Value::String(v) => format!("'{}'", escape_string(v)),
        Value::Bytes(v) => {
            let hex: String = v.iter().map(|b| format!("{:02x}", b)).collect();
            format!("X'{}'", hex)
        }
        Value::Date(v) => format!("'{}'", v),
        Value::DateTime(v) => format!("'{}'", v.format("%Y-%m-%d %H:%M:%S")),
        Value::Json(v) => format!("'{}'", escape_string(&v.to_string())),
    }
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "''")
}

/// Substitute `?` placeholders with literal values, left to right.
///
/// Placeholders inside quoted strings are left alone, honouring backslash
/// escapes in string literals; surplus placeholders stay in the text.
fn bind_params(sql: &str, params: &[Value]) -> String {
    if params.is_empty() {
        return sql.to_string();
    }

    let mut out = String::with_capacity(sql.len());
    let mut params = params.iter();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for ch in sql.chars() {
        if escaped {
            escaped = false;
            out.push(ch);
            continue;
        }
        match (quote, ch) {
            // Backslash escapes apply inside string literals, not identifiers
            (Some('\'' | '"'), '\\') => {
                escaped = true;
                out.push(ch);
            }
            (Some(q), c) if c == q => {
                quote = None;
                out.push(c);
            }
            (Some(_), c) => out.push(c),
            (None, '\'' | '"' | '`') => {
                quote = Some(ch);
                out.push(ch);
            }
            (None, '?') => match params.next() {
                Some(value) => out.push_str(&value_to_mysql_literal(value)),
                None => out.push('?'),
            },
            (None, c) => out.push(c),
        }
    }

    out
}

/// Convert mysql_async Value to our Value type, using column type metadata
/// to interpret byte strings from the text protocol.
fn mysql_value_to_value(val: mysql_async::Value, col_type: ColumnType) -> Value {
    match val {
        mysql_async::Value::NULL => Value::Null,
        mysql_async::Value::Bytes(bytes) => match String::from_utf8(bytes) {
            Ok(s) => match col_type {
                ColumnType::MYSQL_TYPE_TINY
                | ColumnType::MYSQL_TYPE_SHORT
                | ColumnType::MYSQL_TYPE_LONG
                | ColumnType::MYSQL_TYPE_LONGLONG
                | ColumnType::MYSQL_TYPE_INT24
                | ColumnType::MYSQL_TYPE_YEAR => {
                    s.parse::<i64>().map(Value::Int64).unwrap_or(Value::String(s))
                }
                ColumnType::MYSQL_TYPE_FLOAT | ColumnType::MYSQL_TYPE_DOUBLE => {
                    s.parse::<f64>().map(Value::Float64).unwrap_or(Value::String(s))
                }
                ColumnType::MYSQL_TYPE_DECIMAL | ColumnType::MYSQL_TYPE_NEWDECIMAL => {
                    Value::Decimal(s)
                }
                _ => Value::String(s),
            },
            Err(e) => Value::Bytes(e.into_bytes()),
        },
        mysql_async::Value::Int(i) => Value::Int64(i),
        mysql_async::Value::UInt(u) => match i64::try_from(u) {
            Ok(v) => Value::Int64(v),
            Err(_) => Value::Decimal(u.to_string()),
        },
        mysql_async::Value::Float(f) => Value::Float64(f as f64),
        mysql_async::Value::Double(d) => Value::Float64(d),
        mysql_async::Value::Date(year, month, day, hour, min, sec, micro) => {
            let date = chrono::NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32);
            if hour == 0 && min == 0 && sec == 0 && micro == 0 {
                match date {
                    Some(date) => Value::Date(date),
                    None => Value::String(format!("{:04}-{:02}-{:02}", year, month, day)),
                }
            } else {
                match date.and_then(|d| d.and_hms_micro_opt(hour as u32, min as u32, sec as u32, micro))
                {
                    Some(dt) => Value::DateTime(dt),
                    None => Value::String(format!(
                        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                        year, month, day, hour, min, sec
                    )),
                }
            }
        }
        mysql_async::Value::Time(negative, days, hours, mins, secs, micros) => {
            let total_hours = days * 24 + (hours as u32);
            let sign = if negative { "-" } else { "" };
            Value::String(format!(
                "{}{:02}:{:02}:{:02}.{:06}",
                sign, total_hours, mins, secs, micros
            ))
        }
    }
}

#[async_trait]
impl Connection for MySqlConnection {
    fn driver_name(&self) -> &str {
        "mysql"
    }

    fn dialect_id(&self) -> Option<&'static str> {
        Some("mysql")
    }

    #[tracing::instrument(skip(self, sql, params), fields(sql_preview = %sql.chars().take(100).collect::<String>()))]
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<StatementResult> {
        let mut conn = self.get_conn().await?;
        let final_sql = bind_params(sql, params);

        let affected_rows = get_mysql_runtime()
            .spawn(async move {
                conn.query_drop(&final_sql).await.map_err(|e| {
                    SchemaObjectError::Query(format!("Failed to execute statement: {}", e))
                })?;
                Ok::<u64, SchemaObjectError>(conn.affected_rows())
            })
            .await
            .map_err(|e| SchemaObjectError::Query(format!("MySQL execute task failed: {}", e)))??;

        tracing::debug!(affected_rows = affected_rows, "statement executed");
        Ok(StatementResult { affected_rows })
    }

    #[tracing::instrument(skip(self, sql, params), fields(sql_preview = %sql.chars().take(100).collect::<String>()))]
    async fn query(&self, sql: &str, params: &[Value]) -> Result<QueryResult> {
        let start_time = std::time::Instant::now();

        let mut conn = self.get_conn().await?;
        let final_sql = bind_params(sql, params);

        let (columns, rows) = get_mysql_runtime()
            .spawn(async move {
                let mysql_rows: Vec<MySqlRow> = conn.query(&final_sql).await.map_err(|e| {
                    SchemaObjectError::Query(format!("Failed to execute query: {}", e))
                })?;

                let mut columns = Vec::new();
                let mut column_names = Vec::new();
                let mut column_types = Vec::new();

                if let Some(first_row) = mysql_rows.first() {
                    for (idx, col) in first_row.columns_ref().iter().enumerate() {
                        let name = col.name_str().to_string();
                        column_names.push(name.clone());
                        column_types.push(col.column_type());

                        columns.push(ColumnMeta {
                            name,
                            data_type: format!("{:?}", col.column_type()),
                            nullable: true,
                            ordinal: idx,
                        });
                    }
                }

                let mut rows = Vec::with_capacity(mysql_rows.len());
                for mysql_row in mysql_rows {
                    let values = column_types
                        .iter()
                        .enumerate()
                        .map(|(idx, col_type)| {
                            let mysql_val: mysql_async::Value =
                                mysql_row.get(idx).unwrap_or(mysql_async::Value::NULL);
                            mysql_value_to_value(mysql_val, *col_type)
                        })
                        .collect();
                    rows.push(Row::new(column_names.clone(), values));
                }

                Ok::<(Vec<ColumnMeta>, Vec<Row>), SchemaObjectError>((columns, rows))
            })
            .await
            .map_err(|e| SchemaObjectError::Query(format!("MySQL query task failed: {}", e)))??;

        let execution_time_ms = start_time.elapsed().as_millis() as u64;
        tracing::debug!(
            row_count = rows.len(),
            execution_time_ms = execution_time_ms,
            "query executed successfully"
        );

        Ok(QueryResult {
            id: uuid::Uuid::new_v4(),
            columns,
            rows,
            execution_time_ms,
        })
    }

    async fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        tracing::info!("closing MySQL connection pool");
        let pool = self.pool.clone();
        get_mysql_runtime()
            .spawn(async move { pool.disconnect().await })
            .await
            .map_err(|e| SchemaObjectError::Connection(format!("MySQL close task failed: {}", e)))?
            .map_err(|e| {
                SchemaObjectError::Connection(format!("Failed to close MySQL connection: {}", e))
            })?;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
