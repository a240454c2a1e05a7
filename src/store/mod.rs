//! Typed reads and writes on top of [`crate::Database`].
//!
//! Each submodule adds the operations for one group of tables. Values are
//! always bound as statement parameters. Multi-row writes run one
//! statement per row without a transaction, so a failure part way leaves
//! the rows already written in place.

pub mod command;
pub mod group;
pub mod layer;
pub mod project;

pub use group::HIGHLIGHT_COLOR;
pub use project::{DATE_FORMAT, current_date_string};
