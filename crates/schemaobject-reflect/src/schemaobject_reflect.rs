//! SchemaObject Reflect - in-memory descriptors of database objects
//!
//! This crate reads object metadata out of `information_schema` and turns
//! it into descriptors that can be compared against each other and
//! rendered back into DDL:
//! - `DatabaseSchema` - the database a descriptor belongs to
//! - `SchemaOption` - a named metadata value attached to a descriptor
//! - Stored procedures (`ProcedureSchema` and its loader)

pub mod database;
pub mod option;
pub mod procedure;

pub use database::*;
pub use option::*;
pub use procedure::*;
