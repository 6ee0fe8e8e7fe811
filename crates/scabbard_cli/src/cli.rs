//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use scabbard_core::db::DEFAULT_DB_FILE_NAME;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scabbard")]
#[command(about = "Random team splitter and local memo store", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true, env = "SCABBARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "SCABBARD_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shuffle players and split them into 2, 3 or 4 groups
    Teams(TeamsArgs),
    /// Manage memos in the local database
    Memo {
        /// SQLite database file
        #[arg(long, env = "SCABBARD_DB", default_value = DEFAULT_DB_FILE_NAME)]
        db: PathBuf,

        #[command(subcommand)]
        command: MemoCommand,
    },
}

#[derive(Args, Debug)]
pub struct TeamsArgs {
    /// Full roster, separated by commas, semicolons or spaces [default: 1..9]
    #[arg(short, long)]
    pub players: Option<String>,

    /// Players to split; defaults to the whole roster
    #[arg(short, long)]
    pub select: Option<String>,

    /// Number of groups (2, 3, 4 or a label); anything else means 2
    #[arg(short, long, default_value = "2")]
    pub groups: String,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the allocation as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum MemoCommand {
    /// Add a memo
    Add {
        #[arg(short, long, default_value = "")]
        title: String,
        #[arg(short, long, default_value = "")]
        content: String,
    },
    /// List memos, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one memo
    Show { id: i64 },
    /// Replace title and content of a memo
    Update {
        id: i64,
        #[arg(short, long, default_value = "")]
        title: String,
        #[arg(short, long, default_value = "")]
        content: String,
    },
    /// Delete a memo
    Delete { id: i64 },
}
