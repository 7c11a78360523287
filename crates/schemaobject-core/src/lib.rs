//! SchemaObject Core - shared abstractions for schema reflection
//!
//! This crate provides the types every other SchemaObject crate builds on:
//!
//! - `DatabaseDriver` - Trait for database driver implementations
//! - `Connection` - Trait for database connections
//! - `ConnectionConfig` - Connection parameters, loadable from TOML
//! - Common types like `Value`, `Row`, `QueryResult`
//! - `SchemaObjectError` and the crate-wide `Result` alias

mod config;
mod connection;
mod driver;
mod error;
mod types;

pub use config::*;
pub use connection::*;
pub use driver::*;
pub use error::*;
pub use types::*;
