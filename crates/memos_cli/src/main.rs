//! Command-line shell over `memos_core`.
//!
//! # Responsibility
//! - Resolve the runtime profile (environment, overridden by flags).
//! - Play the UI role: load the memo list, dispatch user intents into the
//!   service, and apply the optimistic store updates the service leaves to
//!   its callers.

use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use log::info;
use memos_core::config::{ENV_DATA, ENV_LOG_LEVEL, ENV_MODE, ENV_USER};
use memos_core::db::{open_db, DbError};
use memos_core::{
    daily_usage_stats, init_logging, ConfigError, LocalSession, LoggingError, Memo, MemoAction,
    MemoService, Profile, RepoError, ServiceError, SqliteMemoApi, SqliteUserRepository,
};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "memos")]
#[command(about = "Manage memos stored in the local memos database")]
#[command(version)]
struct Cli {
    #[clap(long, short, global = true, help = "Output in JSON format")]
    json: bool,

    #[clap(long, short = 'd', global = true, help = "Data directory (overrides MEMOS_DATA)")]
    data_dir: Option<PathBuf>,

    #[clap(long, global = true, help = "dev or release (overrides MEMOS_MODE)")]
    mode: Option<String>,

    #[clap(long, short, global = true, help = "Account name (overrides MEMOS_USER)")]
    user: Option<String>,

    #[clap(long, global = true, help = "Log level (overrides MEMOS_LOG_LEVEL)")]
    log_level: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[clap(about = "List active memos, newest first")]
    List,
    #[clap(about = "List hidden memos")]
    Archived,
    #[clap(about = "Create a memo")]
    Create { text: String },
    #[clap(about = "Replace a memo's text")]
    Edit { id: String, text: String },
    #[clap(about = "Hide (soft-delete) a memo")]
    Hide { id: String },
    #[clap(about = "Restore a hidden memo")]
    Restore { id: String },
    #[clap(about = "Permanently delete a memo")]
    Delete { id: String },
    #[clap(about = "List tags used across active memos")]
    Tags,
    #[clap(about = "List memos that mention the given memo id")]
    Linked { id: String },
    #[clap(about = "Show daily memo counts for the usage heat map")]
    Usage,
}

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Logging(LoggingError),
    Db(DbError),
    Repo(RepoError),
    Service(ServiceError),
    Output(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Service(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to encode output: {err}"),
        }
    }
}

impl Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ServiceError> for CliError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

type CliResult<T> = Result<T, CliError>;

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let profile = resolve_profile(&cli)?;
    init_logging(profile.log_level, profile.log_dir())?;
    info!(
        "event=cli_start module=cli status=ok mode={} db={}",
        profile.mode.as_str(),
        profile.db_path().display()
    );

    let conn = open_db(profile.db_path())?;
    let user = SqliteUserRepository::new(&conn).find_or_create_user(&profile.user_name)?;
    let api = SqliteMemoApi::new(&conn, &user);
    let mut service = MemoService::new(api, LocalSession::signed_in(user));
    service.fetch_all_memos()?;

    match cli.command {
        Command::List => print_memos(cli.json, &service.state().memos),
        Command::Archived => {
            let hidden = service.fetch_deleted_memos()?.unwrap_or_default();
            print_memos(cli.json, &hidden)
        }
        Command::Create { text } => {
            let memo = service.create_memo(&text)?;
            service.push_memo(memo.clone());
            print_memos(cli.json, std::slice::from_ref(&memo))
        }
        Command::Edit { id, text } => {
            let memo = service.update_memo(&id, &text)?;
            service.edit_memo(memo.clone());
            print_memos(cli.json, std::slice::from_ref(&memo))
        }
        Command::Hide { id } => {
            service.hide_memo_by_id(&id)?;
            print_done(cli.json, "hidden", &id)
        }
        Command::Restore { id } => {
            service.restore_memo_by_id(&id)?;
            print_done(cli.json, "restored", &id)
        }
        Command::Delete { id } => {
            service.delete_memo_by_id(&id)?;
            service
                .store_mut()
                .dispatch(MemoAction::DeleteMemoById { id: id.clone() });
            print_done(cli.json, "deleted", &id)
        }
        Command::Tags => {
            let tags = service.update_tags_state();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tags)?);
            } else {
                for tag in tags {
                    println!("#{tag}");
                }
            }
            Ok(())
        }
        Command::Linked { id } => print_memos(cli.json, &service.linked_memos(&id)),
        Command::Usage => {
            let today = Local::now().date_naive();
            let stats = daily_usage_stats(&service.state().memos, today, &Local);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                for stat in stats.iter().filter(|stat| stat.count > 0) {
                    println!("{}  {:>3}  {:?}", stat.date, stat.count, stat.level());
                }
            }
            Ok(())
        }
    }
}

fn resolve_profile(cli: &Cli) -> CliResult<Profile> {
    let data_dir = cli
        .data_dir
        .as_ref()
        .map(|path| path.to_string_lossy().into_owned());
    let profile = Profile::from_lookup(|key| {
        let flag = match key {
            ENV_DATA => data_dir.clone(),
            ENV_MODE => cli.mode.clone(),
            ENV_USER => cli.user.clone(),
            ENV_LOG_LEVEL => cli.log_level.clone(),
            _ => None,
        };
        flag.or_else(|| std::env::var(key).ok())
    })?;
    Ok(profile)
}

fn print_memos(json: bool, memos: &[Memo]) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(memos)?);
        return Ok(());
    }

    for memo in memos {
        let first_line = memo.content.lines().next().unwrap_or_default();
        println!("{}  {}  {}", memo.id, memo.created_at_display(), first_line);
    }
    Ok(())
}

#[derive(Serialize)]
struct DoneRow<'a> {
    status: &'static str,
    id: &'a str,
    at: String,
}

fn print_done(json: bool, status: &'static str, id: &str) -> CliResult<()> {
    let row = DoneRow {
        status,
        id,
        at: Utc::now().to_rfc3339(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&row)?);
    } else {
        println!("{} {}", row.status, row.id);
    }
    Ok(())
}
