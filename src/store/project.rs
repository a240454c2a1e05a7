//! Project information log.

use crate::db::Database;
use crate::error::Result;
use crate::models::Project;

const INSERT_PROJECT: &str = "INSERT INTO project (major_version, minor_version, product, create_date, update_date) VALUES (?1, ?2, ?3, ?4, ?5)";

const SELECT_PROJECTS: &str = "SELECT major_version, minor_version, product, create_date, update_date FROM project ORDER BY rowid";

/// Timestamp format of `create_date` and `update_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, formatted for the project table.
pub fn current_date_string() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

impl Database {
    /// Append a project row stamped with the configured version and the
    /// current time as both creation and update date.
    pub fn write_project_info(&self, product: &str) -> Result<()> {
        let exec = self.executor()?;
        let now = current_date_string();
        let info = self.info();

        exec.execute(
            INSERT_PROJECT,
            rusqlite::params![info.major_version, info.minor_version, product, now, now],
        )?;
        Ok(())
    }

    pub fn list_projects(&self) -> Result<Vec<Project>> {
        self.executor()?
            .query(SELECT_PROJECTS, [], Project::from_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppInfo;
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    fn open_db(info: AppInfo) -> (TempDir, Database) {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::open_path(temp_dir.path().join("clv.db"), info, false).unwrap();
        (temp_dir, db)
    }

    #[test]
    fn test_write_project_info() {
        let (_temp, db) = open_db(AppInfo::default().with_version(2, 7));
        db.write_project_info("viewer").unwrap();

        let projects = db.list_projects().unwrap();
        assert_eq!(projects.len(), 1);
        let project = &projects[0];
        assert_eq!(project.major_version, 2);
        assert_eq!(project.minor_version, 7);
        assert_eq!(project.product, "viewer");
        assert_eq!(project.create_date, project.update_date);
        assert!(NaiveDateTime::parse_from_str(&project.create_date, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_project_log_is_append_only() {
        let (_temp, db) = open_db(AppInfo::default());
        db.write_project_info("first").unwrap();
        db.write_project_info("second").unwrap();

        let products: Vec<String> = db
            .list_projects()
            .unwrap()
            .into_iter()
            .map(|p| p.product)
            .collect();
        assert_eq!(products, vec!["first", "second"]);
    }

    #[test]
    fn test_date_format_shape() {
        let now = current_date_string();
        assert_eq!(now.len(), 19);
        assert_eq!(&now[4..5], "-");
        assert_eq!(&now[10..11], " ");
        assert_eq!(&now[13..14], ":");
    }
}
