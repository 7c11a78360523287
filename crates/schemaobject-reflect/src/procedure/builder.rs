//! Loader building procedure descriptors from `information_schema`

use schemaobject_core::{Result, Row, SchemaObjectError, Value};
use std::sync::Arc;

use super::schema::{CHARSET, COMMENT, DEFINITION, ProcedureMap, ProcedureSchema};
use crate::database::DatabaseSchema;
use crate::option::SchemaOption;

/// Metadata query for the procedures of one database.
///
/// The name is interpolated as-is; callers are responsible for passing a
/// trusted database name.
pub fn procedures_query(database: &str) -> String {
    format!(
        "SELECT ROUTINE_NAME, ROUTINE_DEFINITION, ROUTINE_COMMENT, \
         SECURITY_TYPE, SQL_MODE, \
         CHARACTER_SET_CLIENT, COLLATION_CONNECTION, DATABASE_COLLATION \
         FROM information_schema.ROUTINES \
         WHERE ROUTINE_SCHEMA = '{}' AND ROUTINE_TYPE = 'procedure'",
        database
    )
}

/// Character set prefix of a collation name (`utf8_general_ci` -> `utf8`).
///
/// A name without `_` is returned whole.
pub fn derive_charset(collation: &str) -> &str {
    match collation.find('_') {
        Some(pos) => &collation[..pos],
        None => collation,
    }
}

/// Load all stored procedures of `database`, keyed by name in result order.
///
/// A name returned twice keeps its first position and the later row's values.
#[tracing::instrument(skip(database), fields(database = %database.name()))]
pub async fn procedure_schema_builder(database: &Arc<DatabaseSchema>) -> Result<ProcedureMap> {
    let sql = procedures_query(database.name());
    let result = database.connection().query(&sql, &[]).await?;

    let mut procedures = ProcedureMap::new();
    if !result.has_rows() {
        tracing::debug!("no stored procedures found");
        return Ok(procedures);
    }

    for row in &result.rows {
        let name = required_text(row, "ROUTINE_NAME")?.ok_or_else(|| {
            SchemaObjectError::Schema("ROUTINE_NAME must not be NULL".into())
        })?;
        let definition = required_text(row, "ROUTINE_DEFINITION")?;
        let comment = required_text(row, "ROUTINE_COMMENT")?;
        let charset = row
            .get_by_name("COLLATION_CONNECTION")
            .and_then(Value::to_text)
            .map(|collation| derive_charset(&collation).to_string());

        let mut procedure = ProcedureSchema::new(name.clone(), database);
        let options = procedure.options();
        options.insert(
            DEFINITION.to_string(),
            SchemaOption::new("DEFINITION", definition),
        );
        options.insert(CHARSET.to_string(), SchemaOption::new("COLLATE", charset));
        options.insert(COMMENT.to_string(), SchemaOption::new("COMMENT", comment));

        tracing::trace!(procedure = %name, "loaded procedure");
        procedures.insert(name, procedure);
    }

    tracing::debug!(count = procedures.len(), "loaded stored procedures");
    Ok(procedures)
}

/// Text of a column that must be present; SQL NULL yields `None`
fn required_text(row: &Row, field: &str) -> Result<Option<String>> {
    row.get_by_name(field)
        .map(Value::to_text)
        .ok_or_else(|| SchemaObjectError::missing_field(field))
}
