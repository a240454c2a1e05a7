//! Command table.

use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{Command, CommandPlacement};
use rusqlite::params;

const INSERT_COMMAND: &str = "INSERT INTO command (name, decorated_name, scope, tag, file, data) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

const UPDATE_LAYER_GROUP: &str = "UPDATE command SET layer_name = ?1, group_name = ?2 WHERE id = ?3";

const SELECT_COMMAND: &str = "SELECT id, name, decorated_name, layer_name, group_name, scope, tag, file, data FROM command WHERE id = ?1";

const SELECT_PLACEMENTS: &str = "SELECT id, name, layer_name, group_name FROM command ORDER BY id";

impl Database {
    /// Insert a command and return its id. Layer and group start out NULL.
    pub fn write_command(
        &self,
        name: &str,
        decorated_name: &str,
        scope: &str,
        tag: &str,
        file: &str,
        data: &[u8],
    ) -> Result<i64> {
        let exec = self.executor()?;
        exec.execute(
            INSERT_COMMAND,
            params![name, decorated_name, scope, tag, file, data],
        )?;
        Ok(exec.last_insert_rowid())
    }

    /// Set layer and group on each command in `ids`, one statement per id.
    ///
    /// Every id is attempted. Returns the number of rows changed, or
    /// [`Error::PartialUpdate`] listing the ids whose statement failed;
    /// the remaining ids are updated either way.
    pub fn update_command(&self, layer: &str, group: &str, ids: &[i64]) -> Result<usize> {
        let exec = self.executor()?;
        let mut updated = 0;
        let mut failed = Vec::new();
        let mut first_error = None;

        for &id in ids {
            match exec.execute_raw(UPDATE_LAYER_GROUP, params![layer, group, id]) {
                Ok(n) => updated += n,
                Err(e) => {
                    failed.push(id);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(source) => Err(Error::PartialUpdate { failed, source }),
            None => Ok(updated),
        }
    }

    pub fn get_command(&self, id: i64) -> Result<Option<Command>> {
        self.executor()?
            .query_optional(SELECT_COMMAND, [id], Command::from_row)
    }

    /// Name, layer and group of every command, by id.
    pub fn list_command_placements(&self) -> Result<Vec<CommandPlacement>> {
        self.executor()?
            .query(SELECT_PLACEMENTS, [], CommandPlacement::from_row)
    }
}
