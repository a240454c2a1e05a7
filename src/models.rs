//! Row types for the clvdb tables.
//!
//! Apart from the integer keys every column is nullable. Text, blob and
//! integer columns read NULL as empty/zero; `layer_name` and `group_name`
//! of a command stay optional because NULL there means "not assigned".

use rusqlite::Row;
use rusqlite::types::FromSql;
use serde::{Deserialize, Serialize};

/// Read a nullable column, mapping NULL to the type's default.
fn or_default<T: FromSql + Default>(row: &Row, column: &str) -> rusqlite::Result<T> {
    Ok(row.get::<_, Option<T>>(column)?.unwrap_or_default())
}

/// One row of the append-only `project` log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub major_version: i64,
    pub minor_version: i64,
    pub product: String,
    pub create_date: String,
    pub update_date: String,
}

impl Project {
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            major_version: or_default(row, "major_version")?,
            minor_version: or_default(row, "minor_version")?,
            product: or_default(row, "product")?,
            create_date: or_default(row, "create_date")?,
            update_date: or_default(row, "update_date")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub id: i64,
    pub name: String,
    pub decorated_name: String,
    pub layer_name: Option<String>,
    pub group_name: Option<String>,
    pub scope: String,
    pub tag: String,
    pub file: String,
    pub data: Vec<u8>,
}

impl Command {
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: or_default(row, "name")?,
            decorated_name: or_default(row, "decorated_name")?,
            layer_name: row.get("layer_name")?,
            group_name: row.get("group_name")?,
            scope: or_default(row, "scope")?,
            tag: or_default(row, "tag")?,
            file: or_default(row, "file")?,
            data: or_default(row, "data")?,
        })
    }
}

/// Where a command sits in the layer/group hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandPlacement {
    pub id: i64,
    pub name: String,
    pub layer_name: Option<String>,
    pub group_name: Option<String>,
}

impl CommandPlacement {
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: or_default(row, "name")?,
            layer_name: row.get("layer_name")?,
            group_name: row.get("group_name")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    pub id: i64,
    pub name: String,
    pub command_id: i64,
}

impl GroupMember {
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: or_default(row, "name")?,
            command_id: or_default(row, "command_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: i64,
    pub group_name: String,
    pub regex: String,
    pub color: String,
}

impl Highlight {
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            group_name: or_default(row, "group_name")?,
            regex: or_default(row, "regex")?,
            color: or_default(row, "color")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerMember {
    pub id: i64,
    pub name: String,
    pub group_name: String,
}

impl LayerMember {
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: or_default(row, "name")?,
            group_name: or_default(row, "group_name")?,
        })
    }
}
