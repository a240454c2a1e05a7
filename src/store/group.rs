//! Command groups and their highlight rules.

use std::collections::HashSet;

use crate::db::Database;
use crate::error::Result;
use crate::models::{GroupMember, Highlight};
use rusqlite::params;

/// Color given to every highlight rule written by a group definition.
pub const HIGHLIGHT_COLOR: &str = "red";

const SELECT_IDS_BY_PATTERN: &str = "SELECT id FROM command WHERE name LIKE ?1 ORDER BY id";

const INSERT_MEMBER: &str = "INSERT INTO command_group (name, command_id) VALUES (?1, ?2)";

const SELECT_COMMAND_IDS: &str = "SELECT command_id FROM command_group WHERE name = ?1 ORDER BY id";

const SELECT_MEMBERS: &str = "SELECT id, name, command_id FROM command_group WHERE name = ?1 ORDER BY id";

const INSERT_HIGHLIGHT: &str = "INSERT INTO highlight (group_name, regex, color) VALUES (?1, ?2, ?3)";

const SELECT_HIGHLIGHTS: &str = "SELECT id, group_name, regex, color FROM highlight WHERE group_name = ?1 ORDER BY id";

impl Database {
    /// Ids of all commands registered under `group`, in registration order.
    pub fn get_id_list_from_group(&self, group: &str) -> Result<Vec<i64>> {
        self.executor()?
            .query(SELECT_COMMAND_IDS, [group], |row| {
                Ok(row.get::<_, Option<i64>>(0)?.unwrap_or_default())
            })
    }

    /// Register the commands matched by `patterns` under `group_name`, then
    /// attach one highlight rule per entry of `highlights`.
    ///
    /// Each pattern is a SQL `LIKE` pattern matched against command names.
    /// A command matched by several patterns is registered once, at the
    /// position of its first match. Returns the registered ids in order.
    pub fn write_group_definition(
        &self,
        group_name: &str,
        patterns: &[impl AsRef<str>],
        highlights: &[impl AsRef<str>],
    ) -> Result<Vec<i64>> {
        let exec = self.executor()?;

        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for pattern in patterns {
            let hits: Vec<i64> = exec.query(SELECT_IDS_BY_PATTERN, [pattern.as_ref()], |row| row.get(0))?;
            ids.extend(hits.into_iter().filter(|id| seen.insert(*id)));
        }

        for id in &ids {
            exec.execute(INSERT_MEMBER, params![group_name, id])?;
        }

        for regex in highlights {
            exec.execute(INSERT_HIGHLIGHT, params![group_name, regex.as_ref(), HIGHLIGHT_COLOR])?;
        }

        log::debug!(
            "Group '{group_name}': {} command(s), {} highlight(s)",
            ids.len(),
            highlights.len()
        );
        Ok(ids)
    }

    pub fn list_group_members(&self, group: &str) -> Result<Vec<GroupMember>> {
        self.executor()?
            .query(SELECT_MEMBERS, [group], GroupMember::from_row)
    }

    pub fn list_highlights(&self, group: &str) -> Result<Vec<Highlight>> {
        self.executor()?
            .query(SELECT_HIGHLIGHTS, [group], Highlight::from_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppInfo;
    use tempfile::TempDir;

    fn open_db() -> (TempDir, Database) {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::open_path(temp_dir.path().join("clv.db"), AppInfo::default(), false)
            .unwrap();
        (temp_dir, db)
    }

    const NO_HIGHLIGHTS: &[&str] = &[];

    fn add_commands(db: &Database, names: &[&str]) {
        for name in names {
            db.write_command(name, name, "", "", "", &[]).unwrap();
        }
    }

    #[test]
    fn test_group_definition_matches_like_pattern() {
        let (_temp, db) = open_db();
        add_commands(&db, &["abcd", "xyz"]);

        let ids = db
            .write_group_definition("G", &["abc%"], &["x.*"])
            .unwrap();
        assert_eq!(ids, vec![1]);

        let members = db.list_group_members("G").unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "G");
        assert_eq!(members[0].command_id, 1);

        let highlights = db.list_highlights("G").unwrap();
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].group_name, "G");
        assert_eq!(highlights[0].regex, "x.*");
        assert_eq!(highlights[0].color, "red");

        assert_eq!(db.get_id_list_from_group("G").unwrap(), vec![1]);
    }

    #[test]
    fn test_overlapping_patterns_are_deduplicated_in_first_seen_order() {
        let (_temp, db) = open_db();
        add_commands(&db, &["alpha", "beta", "alphabet", "gamma"]);

        let ids = db
            .write_group_definition("G", &["%bet%", "alpha%", "%a"], NO_HIGHLIGHTS)
            .unwrap();
        assert_eq!(ids, vec![2, 3, 1, 4]);
        assert_eq!(db.get_id_list_from_group("G").unwrap(), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_no_match_writes_only_highlights() {
        let (_temp, db) = open_db();
        add_commands(&db, &["abc"]);

        let ids = db
            .write_group_definition("G", &["zzz%"], &["a", "b"])
            .unwrap();
        assert!(ids.is_empty());
        assert!(db.get_id_list_from_group("G").unwrap().is_empty());
        assert_eq!(db.list_highlights("G").unwrap().len(), 2);
    }

    #[test]
    fn test_group_name_match_is_exact() {
        let (_temp, db) = open_db();
        add_commands(&db, &["a"]);
        db.write_group_definition("G", &["a"], NO_HIGHLIGHTS).unwrap();

        assert!(db.get_id_list_from_group("g").unwrap().is_empty());
        assert!(db.get_id_list_from_group("G%").unwrap().is_empty());
    }

    #[test]
    fn test_command_in_several_groups() {
        let (_temp, db) = open_db();
        add_commands(&db, &["a"]);
        db.write_group_definition("G1", &["a"], NO_HIGHLIGHTS).unwrap();
        db.write_group_definition("G2", &["a"], NO_HIGHLIGHTS).unwrap();

        assert_eq!(db.get_id_list_from_group("G1").unwrap(), vec![1]);
        assert_eq!(db.get_id_list_from_group("G2").unwrap(), vec![1]);
    }

    #[test]
    fn test_quoted_group_name_is_literal() {
        let (_temp, db) = open_db();
        add_commands(&db, &["a"]);
        let name = "x' OR '1'='1";
        db.write_group_definition(name, &["a"], NO_HIGHLIGHTS).unwrap();
        db.write_group_definition("other", &["a"], NO_HIGHLIGHTS).unwrap();

        assert_eq!(db.get_id_list_from_group(name).unwrap(), vec![1]);
        assert_eq!(db.list_group_members(name).unwrap().len(), 1);
    }
}
