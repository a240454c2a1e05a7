//! Output formatting for the CLI.

use crate::db::{SyncReport, TableStatus};
use crate::error::Result;
use crate::models::{CommandPlacement, Project};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Ids as `[1] [4] [9]`, the same bracketed form the command listing uses.
fn bracketed(ids: &[i64]) -> String {
    let mut out = String::new();
    for id in ids {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("[{id}]"));
    }
    out
}

fn status_label(status: &TableStatus) -> &'static str {
    match (status.exists, status.matches) {
        (false, _) => "missing",
        (true, true) => "ok",
        (true, false) => "drifted",
    }
}

pub fn print_sync_report(report: &SyncReport, json: bool) -> Result<()> {
    if json {
        return print_json(report);
    }
    for outcome in &report.tables {
        println!("  {:<14} {}", outcome.table, outcome.sync.as_str());
    }
    let discarded = report.discarded_tables();
    if !discarded.is_empty() {
        println!();
        println!("Rows discarded in: {}", discarded.join(", "));
    }
    Ok(())
}

pub fn print_table_status(status: &[TableStatus], json: bool) -> Result<()> {
    if json {
        return print_json(status);
    }
    for s in status {
        println!("  {:<14} {}", s.table, status_label(s));
    }
    Ok(())
}

pub fn print_projects(projects: &[Project], json: bool) -> Result<()> {
    if json {
        return print_json(projects);
    }
    if projects.is_empty() {
        println!("No project information recorded");
        return Ok(());
    }
    for p in projects {
        println!(
            "  v{}.{} {} (created {}, updated {})",
            p.major_version, p.minor_version, p.product, p.create_date, p.update_date
        );
    }
    Ok(())
}

pub fn print_group_definition(name: &str, ids: &[i64], highlights: usize, json: bool) -> Result<()> {
    if json {
        return print_json(ids);
    }
    if ids.is_empty() {
        println!("Group '{name}': no matching commands, {highlights} highlight(s)");
    } else {
        println!(
            "Group '{name}': {}, {highlights} highlight(s)",
            bracketed(ids)
        );
    }
    Ok(())
}

pub fn print_ids(ids: &[i64], json: bool) -> Result<()> {
    if json {
        return print_json(ids);
    }
    for id in ids {
        println!("{id}");
    }
    Ok(())
}

pub fn print_placements(placements: &[CommandPlacement], json: bool) -> Result<()> {
    if json {
        return print_json(placements);
    }
    for p in placements {
        println!(
            "  [{}] {} {}/{}",
            p.id,
            p.name,
            or_dash(p.layer_name.as_deref()),
            or_dash(p.group_name.as_deref())
        );
    }
    Ok(())
}
