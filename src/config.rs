//! Application information handed to the data-access layer.

use serde::{Deserialize, Serialize};

/// Environment variable that turns on statement logging.
const DEBUG_SQL_ENV: &str = "CLVDB_DEBUG_SQL";

/// Version numbers stamped into the project table, plus the statement
/// logging switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub major_version: i64,
    pub minor_version: i64,
    pub debug_sql: bool,
}

impl AppInfo {
    /// Defaults, with `debug_sql` taken from `CLVDB_DEBUG_SQL`.
    pub fn from_env() -> Self {
        let debug_sql = std::env::var(DEBUG_SQL_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Self::default().with_debug_sql(debug_sql)
    }

    pub fn with_version(mut self, major: i64, minor: i64) -> Self {
        self.major_version = major;
        self.minor_version = minor;
        self
    }

    pub fn with_debug_sql(mut self, debug_sql: bool) -> Self {
        self.debug_sql = debug_sql;
        self
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            major_version: env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0),
            minor_version: env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0),
            debug_sql: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_package_version() {
        let info = AppInfo::default();
        assert_eq!(info.major_version, 0);
        assert_eq!(info.minor_version, 1);
        assert!(!info.debug_sql);
    }

    #[test]
    fn test_builder() {
        let info = AppInfo::default().with_version(3, 14).with_debug_sql(true);
        assert_eq!(info.major_version, 3);
        assert_eq!(info.minor_version, 14);
        assert!(info.debug_sql);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" on "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("nope"));
    }
}
