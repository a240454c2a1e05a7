//! # clvdb - command log viewer storage
//!
//! Maps projects, commands, groups, highlights and layers onto a single
//! SQLite file. Opening a database synchronizes nine fixed tables against
//! their expected definitions, recreating any that are missing or have
//! drifted.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;

pub use config::AppInfo;
pub use db::{Database, SyncReport, TableStatus, TableSync};
pub use error::{Error, Result};
pub use models::*;
