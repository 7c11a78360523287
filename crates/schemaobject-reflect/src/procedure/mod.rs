//! Stored procedure reflection
//!
//! Loads procedure descriptors from `information_schema.ROUTINES`, renders
//! their `CREATE`/`DROP` statements and compares them across databases.

mod builder;
mod compare;
mod schema;


pub use builder::*;
pub use compare::*;
pub use schema::*;
