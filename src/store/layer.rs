//! Layers: named sets of groups.

use crate::db::Database;
use crate::error::Result;
use crate::models::LayerMember;
use rusqlite::params;

const INSERT_LAYER: &str = "INSERT INTO layer (name, group_name) VALUES (?1, ?2)";

const SELECT_LAYER: &str = "SELECT id, name, group_name FROM layer WHERE name = ?1 ORDER BY id";

impl Database {
    /// Add one layer row per group name.
    pub fn write_layer_definition(&self, layer_name: &str, groups: &[impl AsRef<str>]) -> Result<()> {
        let exec = self.executor()?;
        for group in groups {
            exec.execute(INSERT_LAYER, params![layer_name, group.as_ref()])?;
        }
        Ok(())
    }

    pub fn list_layer_members(&self, layer_name: &str) -> Result<Vec<LayerMember>> {
        self.executor()?
            .query(SELECT_LAYER, [layer_name], LayerMember::from_row)
    }

    /// Group names of a layer, in definition order.
    pub fn get_groups_of_layer(&self, layer_name: &str) -> Result<Vec<String>> {
        Ok(self
            .list_layer_members(layer_name)?
            .into_iter()
            .map(|m| m.group_name)
            .collect())
    }
}
