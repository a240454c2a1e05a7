//! Table definitions and schema synchronization.
//!
//! The stored `sql` text of each table in `sqlite_master` is compared
//! verbatim with the expected creation statement. A table that is missing
//! is created; one whose text differs, or any table when `initialize` is
//! set, is dropped and created again. Rows of a recreated table are lost.

use crate::db::exec::Executor;
use crate::error::Result;
use serde::Serialize;

/// Looks up the stored creation statement of a table.
const PROBE_SQL: &str = "SELECT sql FROM sqlite_master WHERE type='table' AND name=?1";

/// A fixed table: its name and the DDL that drops and creates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub drop_sql: &'static str,
    pub create_sql: &'static str,
}

pub const PROJECT: TableDef = TableDef {
    name: "project",
    drop_sql: "DROP TABLE project",
    create_sql: "CREATE TABLE project (major_version INT, minor_version INT, product TEXT, create_date TEXT, update_date TEXT)",
};

pub const COMMAND: TableDef = TableDef {
    name: "command",
    drop_sql: "DROP TABLE command",
    create_sql: "CREATE TABLE command (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT, decorated_name TEXT, layer_name TEXT, group_name TEXT, scope TEXT, tag TEXT, file TEXT, data BLOB)",
};

pub const COMMAND_GROUP: TableDef = TableDef {
    name: "command_group",
    drop_sql: "DROP TABLE command_group",
    create_sql: "CREATE TABLE command_group (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT, command_id INT)",
};

pub const HIGHLIGHT: TableDef = TableDef {
    name: "highlight",
    drop_sql: "DROP TABLE highlight",
    create_sql: "CREATE TABLE highlight (id INTEGER PRIMARY KEY AUTOINCREMENT, group_name TEXT, regex TEXT, color TEXT)",
};

pub const LAYER: TableDef = TableDef {
    name: "layer",
    drop_sql: "DROP TABLE layer",
    create_sql: "CREATE TABLE layer (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT, group_name TEXT)",
};

pub const SEARCH1: TableDef = TableDef {
    name: "search1",
    drop_sql: "DROP TABLE search1",
    create_sql: "CREATE TABLE search1 (id INTEGER PRIMARY KEY AUTOINCREMENT, keyword TEXT, open INTEGER)",
};

pub const SEARCH2: TableDef = TableDef {
    name: "search2",
    drop_sql: "DROP TABLE search2",
    create_sql: "CREATE TABLE search2 (search_id INTEGER , command_id INTEGER)",
};

pub const BOOKMARK: TableDef = TableDef {
    name: "bookmark",
    drop_sql: "DROP TABLE bookmark",
    create_sql: "CREATE TABLE bookmark (id INTEGER PRIMARY KEY AUTOINCREMENT, command_id INTEGER, line_number INTEGER)",
};

pub const MEMO: TableDef = TableDef {
    name: "memo",
    drop_sql: "DROP TABLE memo",
    create_sql: "CREATE TABLE memo (id INTEGER PRIMARY KEY AUTOINCREMENT, content TEXT, update_date TEXT)",
};

/// All tables, in synchronization order.
pub const TABLES: [TableDef; 9] = [
    PROJECT,
    COMMAND,
    COMMAND_GROUP,
    HIGHLIGHT,
    LAYER,
    SEARCH1,
    SEARCH2,
    BOOKMARK,
    MEMO,
];

/// What synchronization did to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableSync {
    /// The table did not exist.
    Created,
    /// Dropped and recreated because `initialize` was set.
    Reset,
    /// Dropped and recreated because its stored definition had drifted.
    Recreated,
    Unchanged,
}

impl TableSync {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableSync::Created => "created",
            TableSync::Reset => "reset",
            TableSync::Recreated => "recreated",
            TableSync::Unchanged => "unchanged",
        }
    }

    /// Whether existing rows were discarded.
    pub fn discarded_rows(&self) -> bool {
        matches!(self, TableSync::Reset | TableSync::Recreated)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOutcome {
    pub table: &'static str,
    pub sync: TableSync,
}

/// Per-table outcome of one synchronization pass, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub tables: Vec<TableOutcome>,
}

impl SyncReport {
    pub fn outcome(&self, table: &str) -> Option<TableSync> {
        self.tables
            .iter()
            .find(|o| o.table == table)
            .map(|o| o.sync)
    }

    /// True when nothing was created or dropped.
    pub fn is_noop(&self) -> bool {
        self.tables.iter().all(|o| o.sync == TableSync::Unchanged)
    }

    pub fn discarded_tables(&self) -> Vec<&'static str> {
        self.tables
            .iter()
            .filter(|o| o.sync.discarded_rows())
            .map(|o| o.table)
            .collect()
    }
}

/// Read-only view of one table's schema state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStatus {
    pub table: &'static str,
    pub exists: bool,
    pub matches: bool,
}

/// Stored creation statement of `table`, if the table exists.
pub fn stored_sql(exec: &Executor<'_>, table: &str) -> Result<Option<String>> {
    exec.query_optional(PROBE_SQL, [table], |row| row.get(0))
}

/// Bring one table in line with its definition.
pub fn sync_table(exec: &Executor<'_>, def: &TableDef, initialize: bool) -> Result<TableSync> {
    let Some(stored) = stored_sql(exec, def.name)? else {
        log::info!("Table '{}' does not exist, creating it", def.name);
        exec.execute(def.create_sql, [])?;
        return Ok(TableSync::Created);
    };

    let sync = if initialize {
        log::info!("Table '{}' exists, initializing: drop and recreate", def.name);
        TableSync::Reset
    } else if stored != def.create_sql {
        log::warn!("Table '{}' definition changed: drop and recreate", def.name);
        log::debug!("  stored:   {stored}");
        log::debug!("  expected: {}", def.create_sql);
        TableSync::Recreated
    } else {
        log::info!("Table '{}' exists, definition ok", def.name);
        return Ok(TableSync::Unchanged);
    };

    exec.execute(def.drop_sql, [])?;
    exec.execute(def.create_sql, [])?;
    Ok(sync)
}

/// Synchronize every table in order.
///
/// Stops at the first failing statement; tables already handled keep
/// their new state.
pub fn sync_schema(exec: &Executor<'_>, initialize: bool) -> Result<SyncReport> {
    let mut report = SyncReport::default();
    for def in &TABLES {
        let sync = sync_table(exec, def, initialize)?;
        report.tables.push(TableOutcome {
            table: def.name,
            sync,
        });
    }
    Ok(report)
}

pub fn table_status(exec: &Executor<'_>) -> Result<Vec<TableStatus>> {
    TABLES
        .iter()
        .map(|def| -> Result<TableStatus> {
            let stored = stored_sql(exec, def.name)?;
            Ok(TableStatus {
                table: def.name,
                exists: stored.is_some(),
                matches: stored.as_deref() == Some(def.create_sql),
            })
        })
        .collect()
}
