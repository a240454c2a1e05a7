//! Maintenance CLI for clvdb databases.

pub mod output;

use crate::config::AppInfo;
use crate::db::Database;
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clvdb - inspect and edit command log viewer databases
#[derive(Parser, Debug)]
#[command(name = "clvdb")]
#[command(about = "Inspect and edit command log viewer databases", long_about = None)]
struct Cli {
    /// Database file
    #[arg(long, global = true, default_value = "clv.db")]
    db: PathBuf,

    /// Drop and recreate every table on open
    #[arg(long, global = true)]
    initialize: bool,

    /// Log every executed statement
    #[arg(long, global = true)]
    debug_sql: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the database and report what schema sync did
    Sync,

    /// Show the schema state of every table
    Status,

    /// Append a project information row
    Project {
        /// Product name
        product: String,
    },

    /// List project information rows
    Projects,

    /// Insert a command
    AddCommand {
        /// Command name
        name: String,
        /// Decorated name (defaults to the name)
        #[arg(long)]
        decorated_name: Option<String>,
        #[arg(long, default_value = "")]
        scope: String,
        #[arg(long, default_value = "")]
        tag: String,
        /// Source file of the command
        #[arg(long, default_value = "")]
        file: String,
        /// File whose bytes become the command's data
        #[arg(long)]
        data_file: Option<PathBuf>,
    },

    /// Set layer and group on commands
    Assign {
        #[arg(long)]
        layer: String,
        #[arg(long)]
        group: String,
        /// Command IDs
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Define a group from name patterns
    Group {
        /// Group name
        name: String,
        /// SQL LIKE pattern matched against command names
        #[arg(long = "pattern")]
        patterns: Vec<String>,
        /// Highlight expression attached to the group
        #[arg(long = "highlight")]
        highlights: Vec<String>,
    },

    /// List command IDs of a group
    Members {
        /// Group name
        group: String,
    },

    /// Define a layer from group names
    Layer {
        /// Layer name
        name: String,
        /// Group names
        groups: Vec<String>,
    },

    /// List commands with their layer and group
    Commands,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut info = AppInfo::from_env();
    if cli.debug_sql {
        info = info.with_debug_sql(true);
    }
    let mut db = Database::new(&cli.db, info);
    let report = db.open(cli.initialize)?;
    let json = cli.json;

    match cli.command {
        Command::Sync => output::print_sync_report(&report, json)?,

        Command::Status => {
            let status = db.table_status()?;
            output::print_table_status(&status, json)?;
        }

        Command::Project { product } => {
            db.write_project_info(&product)?;
            println!("Recorded project '{product}'");
        }

        Command::Projects => {
            let projects = db.list_projects()?;
            output::print_projects(&projects, json)?;
        }

        Command::AddCommand {
            name,
            decorated_name,
            scope,
            tag,
            file,
            data_file,
        } => {
            let data = match data_file {
                Some(path) => std::fs::read(path)?,
                None => Vec::new(),
            };
            let decorated_name = decorated_name.unwrap_or_else(|| name.clone());
            let id = db.write_command(&name, &decorated_name, &scope, &tag, &file, &data)?;
            println!("{id}");
        }

        Command::Assign { layer, group, ids } => {
            let updated = db.update_command(&layer, &group, &ids)?;
            println!("Updated {updated} command(s)");
        }

        Command::Group {
            name,
            patterns,
            highlights,
        } => {
            let ids = db.write_group_definition(&name, &patterns, &highlights)?;
            output::print_group_definition(&name, &ids, highlights.len(), json)?;
        }

        Command::Members { group } => {
            let ids = db.get_id_list_from_group(&group)?;
            output::print_ids(&ids, json)?;
        }

        Command::Layer { name, groups } => {
            db.write_layer_definition(&name, &groups)?;
            println!("Layer '{name}': {} group(s)", groups.len());
        }

        Command::Commands => {
            let placements = db.list_command_placements()?;
            output::print_placements(&placements, json)?;
        }
    }

    db.close()
}
