//! Database layer for clvdb.
//!
//! Handles the SQLite connection, statement execution, and schema
//! synchronization.

mod connection;
pub mod exec;
pub mod schema;

pub use connection::Database;
pub use exec::Executor;
pub use schema::{SyncReport, TableDef, TableOutcome, TableStatus, TableSync};
