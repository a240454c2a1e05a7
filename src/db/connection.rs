//! Database handle and connection lifecycle.

use crate::config::AppInfo;
use crate::db::exec::Executor;
use crate::db::schema::{self, SyncReport, TableStatus};
use crate::error::{Error, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Handle to one database file.
///
/// Constructing a handle does not touch the file. [`Database::open`]
/// connects and synchronizes the schema; every read and write afterwards
/// goes through the same connection until [`Database::close`].
pub struct Database {
    path: PathBuf,
    info: AppInfo,
    conn: Option<Connection>,
}

impl Database {
    pub fn new<P: AsRef<Path>>(path: P, info: AppInfo) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            info,
            conn: None,
        }
    }

    /// Create a handle and open it right away.
    pub fn open_path<P: AsRef<Path>>(path: P, info: AppInfo, initialize: bool) -> Result<Self> {
        let mut db = Self::new(path, info);
        db.open(initialize)?;
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    /// Connect and synchronize all tables.
    ///
    /// With `initialize` set every table is dropped and recreated. If a
    /// schema statement fails the handle stays closed and tables handled
    /// before the failure keep their new state.
    pub fn open(&mut self, initialize: bool) -> Result<SyncReport> {
        if self.conn.is_some() {
            log::warn!("Database {} is already open", self.path.display());
            return Err(Error::AlreadyOpen(self.path.clone()));
        }

        let conn = Connection::open(&self.path).inspect_err(|e| {
            log::error!("Failed to open database {}: {e}", self.path.display())
        })?;
        log::info!("Opened database {}", self.path.display());

        let report = schema::sync_schema(&Executor::new(&conn, self.info.debug_sql), initialize)?;
        self.conn = Some(conn);
        Ok(report)
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    pub fn close(&mut self) -> Result<()> {
        match self.conn.take() {
            Some(conn) => {
                conn.close().map_err(|(_, e)| e)?;
                log::info!("Closed database {}", self.path.display());
                Ok(())
            }
            None => {
                log::warn!("Database {} is not open", self.path.display());
                Err(Error::NotOpen(self.path.clone()))
            }
        }
    }

    /// Executor over the live connection.
    pub fn executor(&self) -> Result<Executor<'_>> {
        self.conn
            .as_ref()
            .map(|conn| Executor::new(conn, self.info.debug_sql))
            .ok_or_else(|| Error::NotOpen(self.path.clone()))
    }

    /// Schema state of every table, without changing anything.
    pub fn table_status(&self) -> Result<Vec<TableStatus>> {
        schema::table_status(&self.executor()?)
    }
}
