//! `scabbard` command-line front end.
//!
//! # Responsibility
//! - Parse arguments, initialize optional file logging and dispatch.
//! - Render core results as text or JSON on the given writer.
//!
//! # Invariants
//! - `run` never panics on user input; failures map to a non-zero exit code
//!   with the message on the error writer.
//! - File logging starts only when a log directory is configured.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, MemoCommand, TeamsArgs};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scabbard_core::db::open_db;
use scabbard_core::{
    default_log_level, init_logging, parse_player_list, GroupCount, Memo, MemoService,
    SqliteMemoRepository, TeamBoard,
};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

const EXIT_FAILURE: i32 = 1;

/// Runs the CLI with `args` (program name first) and returns the exit code.
pub fn run<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(parse_error) => {
            let code = parse_error.exit_code();
            let target: &mut dyn Write = if parse_error.use_stderr() { err } else { out };
            let _ = write!(target, "{}", parse_error.render());
            return code;
        }
    };

    match execute(cli, out) {
        Ok(()) => 0,
        Err(failure) => {
            let _ = writeln!(err, "error: {failure:#}");
            EXIT_FAILURE
        }
    }
}

fn execute(cli: Cli, out: &mut dyn Write) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = absolute_dir(log_dir)?;
        init_logging(level, &log_dir).context("failed to initialize logging")?;
    }

    match cli.command {
        Commands::Teams(args) => run_teams(args, out),
        Commands::Memo { db, command } => run_memo(&db, command, out),
    }
}

fn run_teams(args: TeamsArgs, out: &mut dyn Write) -> Result<()> {
    let mut board = match args.players.as_deref() {
        Some(players) => TeamBoard::with_roster(parse_player_list(players)),
        None => TeamBoard::new(),
    };
    match args.select.as_deref() {
        Some(selection) => board.select(parse_player_list(selection))?,
        None => board.select_all(),
    }
    board.set_group_count(GroupCount::from_label(&args.groups));

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let allocation = board.allocate(&mut rng)?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(allocation)?)?;
    } else {
        for group in &allocation.groups {
            writeln!(out, "{group}")?;
        }
    }
    Ok(())
}

fn run_memo(db: &Path, command: MemoCommand, out: &mut dyn Write) -> Result<()> {
    let conn = open_db(db).with_context(|| format!("failed to open `{}`", db.display()))?;
    let service = MemoService::new(SqliteMemoRepository::try_new(&conn)?);
    info!("event=cli_memo module=cli status=start");

    match command {
        MemoCommand::Add { title, content } => {
            let memo = service.create_memo(&title, &content)?;
            writeln!(out, "{}", memo.id)?;
        }
        MemoCommand::List { json } => {
            let memos = service.list_memos()?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&memos)?)?;
            } else {
                for memo in &memos {
                    writeln!(out, "{}", summary_line(memo))?;
                }
            }
        }
        MemoCommand::Show { id } => {
            let memo = service
                .get_memo(id)?
                .with_context(|| format!("memo not found: {id}"))?;
            writeln!(out, "{}\n\n{}", memo.title, memo.content)?;
        }
        MemoCommand::Update { id, title, content } => {
            service.update_memo(id, &title, &content)?;
        }
        MemoCommand::Delete { id } => {
            service.delete_memo(id)?;
        }
    }
    Ok(())
}

fn summary_line(memo: &Memo) -> String {
    let updated = memo
        .formatted_update_time()
        .unwrap_or_else(|| "-".to_string());
    format!("{}\t{}\t{}", memo.id, updated, memo.title)
}

fn absolute_dir(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    Ok(cwd.join(path))
}
