//! Statement execution with diagnostic logging.

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension, Params, Row};

/// Runs statements against a borrowed connection.
///
/// Every statement is logged at debug level when `debug_sql` is set, and
/// every failure is logged with the statement text and driver message
/// before it is handed back to the caller.
#[derive(Clone, Copy)]
pub struct Executor<'conn> {
    conn: &'conn Connection,
    debug_sql: bool,
}

impl<'conn> Executor<'conn> {
    pub fn new(conn: &'conn Connection, debug_sql: bool) -> Self {
        Self { conn, debug_sql }
    }

    /// Execute a statement and return the number of rows affected.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        Ok(self.execute_raw(sql, params)?)
    }

    /// Same as [`Executor::execute`], keeping the driver error unwrapped.
    pub(crate) fn execute_raw<P: Params>(&self, sql: &str, params: P) -> rusqlite::Result<usize> {
        self.trace(sql);
        self.conn
            .execute(sql, params)
            .inspect_err(|e| report_failure(sql, e))
    }

    /// Query multiple rows.
    pub fn query<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.trace(sql);
        let rows = collect_rows(self.conn, sql, params, f).inspect_err(|e| report_failure(sql, e))?;
        Ok(rows)
    }

    /// Query at most one row.
    pub fn query_optional<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.trace(sql);
        let row = self
            .conn
            .query_row(sql, params, f)
            .optional()
            .inspect_err(|e| report_failure(sql, e))?;
        Ok(row)
    }

    /// Get the last inserted row id.
    pub fn last_insert_rowid(&self) -> i64 {
        self.conn.last_insert_rowid()
    }

    fn trace(&self, sql: &str) {
        if self.debug_sql {
            log::debug!("EXEC SQL: {sql}");
        }
    }
}

fn collect_rows<T, P, F>(conn: &Connection, sql: &str, params: P, f: F) -> rusqlite::Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, f)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn report_failure(sql: &str, err: &rusqlite::Error) {
    log::error!("SQL error: '{sql}': {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT, v TEXT)")
            .unwrap();
        conn
    }

    #[test]
    fn test_execute_returns_rows_affected() {
        let conn = memory_conn();
        let exec = Executor::new(&conn, true);

        assert_eq!(exec.execute("INSERT INTO t (v) VALUES (?1)", ["a"]).unwrap(), 1);
        assert_eq!(exec.execute("INSERT INTO t (v) VALUES (?1)", ["b"]).unwrap(), 1);
        assert_eq!(exec.last_insert_rowid(), 2);
        assert_eq!(exec.execute("UPDATE t SET v = 'c'", []).unwrap(), 2);
    }

    #[test]
    fn test_execute_propagates_failure() {
        let conn = memory_conn();
        let exec = Executor::new(&conn, false);

        let result = exec.execute("INSERT INTO missing (v) VALUES (?1)", ["a"]);
        assert!(matches!(result, Err(crate::Error::Db(_))));
    }

    #[test]
    fn test_query_and_optional() {
        let conn = memory_conn();
        let exec = Executor::new(&conn, false);
        exec.execute("INSERT INTO t (v) VALUES ('x'), ('y')", []).unwrap();

        let values: Vec<String> = exec
            .query("SELECT v FROM t ORDER BY id", [], |row| row.get(0))
            .unwrap();
        assert_eq!(values, vec!["x", "y"]);

        let none: Option<String> = exec
            .query_optional("SELECT v FROM t WHERE id = ?1", [99], |row| row.get(0))
            .unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_query_prepare_failure_is_error() {
        let conn = memory_conn();
        let exec = Executor::new(&conn, false);

        let result: Result<Vec<i64>> = exec.query("SELEC nonsense", [], |row| row.get(0));
        assert!(result.is_err());
    }
}
