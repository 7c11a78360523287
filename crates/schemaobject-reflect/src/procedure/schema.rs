//! Stored procedure descriptor

use indexmap::IndexMap;
use regex::Regex;
use schemaobject_core::{Result, SchemaObjectError};
use std::sync::{Arc, LazyLock, Weak};

use crate::database::DatabaseSchema;
use crate::option::SchemaOption;

/// Option key holding the routine body
pub const DEFINITION: &str = "definition";
/// Option key holding the character set derived from the connection collation
pub const CHARSET: &str = "charset";
/// Option key holding the routine comment
pub const COMMENT: &str = "comment";

static MULTI_SPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\s+").expect("valid regex"));

/// Loaded procedures keyed by name, in the order the server returned them
pub type ProcedureMap = IndexMap<String, ProcedureSchema>;

/// In-memory description of one stored procedure
#[derive(Debug, Clone)]
pub struct ProcedureSchema {
    name: String,
    parent: Weak<DatabaseSchema>,
    options: Option<IndexMap<String, SchemaOption>>,
}

impl ProcedureSchema {
    pub fn new(name: impl Into<String>, parent: &Arc<DatabaseSchema>) -> Self {
        Self {
            name: name.into(),
            parent: Arc::downgrade(parent),
            options: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning database, `None` once it has been dropped
    pub fn parent(&self) -> Option<Arc<DatabaseSchema>> {
        self.parent.upgrade()
    }

    /// Options map, created empty on first access.
    ///
    /// The map is handed out as-is: writes through it change this descriptor.
    pub fn options(&mut self) -> &mut IndexMap<String, SchemaOption> {
        self.options.get_or_insert_with(IndexMap::new)
    }

    /// Look up one option without materializing the map
    pub fn option(&self, key: &str) -> Option<&SchemaOption> {
        self.options.as_ref().and_then(|options| options.get(key))
    }

    /// Whether the options map has been created yet
    pub fn has_options(&self) -> bool {
        self.options.is_some()
    }

    /// Fetch the server's `CREATE PROCEDURE` statement as a single line.
    #[tracing::instrument(skip(self), fields(procedure = %self.name))]
    pub async fn create(&self) -> Result<String> {
        let database = self.parent().ok_or_else(|| {
            SchemaObjectError::Schema(format!(
                "database of procedure '{}' is no longer available",
                self.name
            ))
        })?;

        let sql = format!(
            "SHOW CREATE PROCEDURE `{}`.`{}`",
            database.name(),
            self.name
        );
        let result = database.connection().query(&sql, &[]).await?;

        let row = result.first_row().ok_or_else(|| {
            SchemaObjectError::NotFound(format!(
                "procedure `{}`.`{}`",
                database.name(),
                self.name
            ))
        })?;
        let statement = row
            .get_by_name("Create Procedure")
            .ok_or_else(|| SchemaObjectError::missing_field("Create Procedure"))?
            .to_text()
            .unwrap_or_default();

        tracing::debug!(length = statement.len(), "fetched procedure DDL");
        Ok(normalize_create_statement(&statement))
    }

    /// `DROP PROCEDURE` statement for this procedure.
    ///
    /// Not qualified with the database name, unlike [`Self::create`].
    pub fn drop(&self) -> String {
        format!("DROP PROCEDURE `{}`", self.name)
    }
}

/// Terminate with `;`, remove line feeds and squeeze whitespace runs
pub fn normalize_create_statement(statement: &str) -> String {
    if statement.is_empty() {
        return String::new();
    }
    let sql = format!("{};", statement).replace('\n', "");
    MULTI_SPACE_REGEX.replace_all(&sql, " ").into_owned()
}

// Charset does not take part in equality.
impl PartialEq for ProcedureSchema {
    fn eq(&self, other: &Self) -> bool {
        self.option(COMMENT) == other.option(COMMENT)
            && self.option(DEFINITION) == other.option(DEFINITION)
            && self.name == other.name
    }
}
