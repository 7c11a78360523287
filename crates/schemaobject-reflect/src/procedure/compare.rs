//! Procedure comparison between two databases

use schemaobject_core::{Result, SchemaObjectError};
use serde::{Deserialize, Serialize};

use super::schema::{ProcedureMap, ProcedureSchema};

/// Names of procedures that differ between a source and a target database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureDiff {
    /// Procedures that exist only in the source, in source order
    pub added: Vec<String>,
    /// Procedures that exist only in the target, in target order
    pub removed: Vec<String>,
    /// Procedures present on both sides whose descriptors are not equal
    pub modified: Vec<String>,
}

impl ProcedureDiff {
    /// Returns true if there are no differences
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Returns the total number of changes
    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }

    /// Statements that bring `target` in line with `source`.
    ///
    /// Drops for removed procedures come first, then a drop and re-create
    /// for each modified one, then creates for added ones. `CREATE`
    /// statements are fetched from the source server.
    #[tracing::instrument(skip_all, fields(changes = self.change_count()))]
    pub async fn migration_statements(
        &self,
        source: &ProcedureMap,
        target: &ProcedureMap,
    ) -> Result<Vec<String>> {
        let mut statements = Vec::with_capacity(self.change_count() + self.modified.len());

        for name in &self.removed {
            statements.push(lookup(target, name)?.drop());
        }
        for name in &self.modified {
            statements.push(lookup(target, name)?.drop());
            statements.push(lookup(source, name)?.create().await?);
        }
        for name in &self.added {
            statements.push(lookup(source, name)?.create().await?);
        }

        Ok(statements)
    }
}

/// Compare the procedures of two databases by name and descriptor equality
pub fn compare_procedures(source: &ProcedureMap, target: &ProcedureMap) -> ProcedureDiff {
    let mut diff = ProcedureDiff::default();

    for (name, procedure) in source {
        match target.get(name) {
            None => diff.added.push(name.clone()),
            Some(existing) if existing != procedure => diff.modified.push(name.clone()),
            Some(_) => {}
        }
    }

    diff.removed = target
        .keys()
        .filter(|name| !source.contains_key(*name))
        .cloned()
        .collect();

    diff
}

fn lookup<'a>(procedures: &'a ProcedureMap, name: &str) -> Result<&'a ProcedureSchema> {
    procedures
        .get(name)
        .ok_or_else(|| SchemaObjectError::NotFound(format!("procedure '{}'", name)))
}
