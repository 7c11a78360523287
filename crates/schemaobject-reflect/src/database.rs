//! Database container that descriptors point back to

use schemaobject_core::Connection;
use std::fmt;
use std::sync::Arc;

use crate::procedure::{ProcedureMap, procedure_schema_builder};

/// A single database (MySQL schema) reachable through a connection
///
/// Always handled as `Arc<DatabaseSchema>`; descriptors loaded from it keep
/// only a weak handle, so the database must outlive the calls made on them.
pub struct DatabaseSchema {
    name: String,
    connection: Arc<dyn Connection>,
}

impl DatabaseSchema {
    pub fn new(name: impl Into<String>, connection: Arc<dyn Connection>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            connection,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connection(&self) -> &Arc<dyn Connection> {
        &self.connection
    }

    /// Load every stored procedure of this database.
    ///
    /// Runs a fresh metadata query on each call.
    pub async fn procedures(self: &Arc<Self>) -> schemaobject_core::Result<ProcedureMap> {
        procedure_schema_builder(self).await
    }
}

impl fmt::Debug for DatabaseSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSchema")
            .field("name", &self.name)
            .field("driver", &self.connection.driver_name())
            .finish()
    }
}
