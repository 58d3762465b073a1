//! Runtime profile resolved from the environment.
//!
//! | Variable          | Meaning                         | Default               |
//! |-------------------|---------------------------------|-----------------------|
//! | `MEMOS_MODE`      | `dev` or `release`              | `dev`                 |
//! | `MEMOS_DATA`      | data directory (must exist)     | current directory     |
//! | `MEMOS_LOG_LEVEL` | log level name                  | build-mode level      |
//! | `MEMOS_USER`      | local account name              | `memos`               |
//!
//! The database file is `<data>/memos_<mode>.db`; logs go to `<data>/logs`.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_MODE: &str = "MEMOS_MODE";
pub const ENV_DATA: &str = "MEMOS_DATA";
pub const ENV_LOG_LEVEL: &str = "MEMOS_LOG_LEVEL";
pub const ENV_USER: &str = "MEMOS_USER";
pub const DEFAULT_USER: &str = "memos";

/// Build profile selecting the database file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Dev,
    Release,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Release => "release",
        }
    }

    /// Unknown values fall back to `Dev`.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "release" => Self::Release,
            _ => Self::Dev,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    DataDirUnavailable { path: PathBuf, message: String },
    InvalidLogLevel(String),
    InvalidUser(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataDirUnavailable { path, message } => {
                write!(f, "unable to access data dir `{}`: {message}", path.display())
            }
            Self::InvalidLogLevel(level) => write!(f, "invalid log level `{level}`"),
            Self::InvalidUser(message) => write!(f, "invalid user: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub mode: Mode,
    /// Absolute data directory.
    pub data_dir: PathBuf,
    pub log_level: &'static str,
    pub user_name: String,
}

impl Profile {
    /// Reads the profile from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the profile through `lookup`, one call per variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mode = lookup(ENV_MODE)
            .map(|value| Mode::parse_or_default(&value))
            .unwrap_or_default();
        let data_dir = resolve_data_dir(lookup(ENV_DATA).as_deref().unwrap_or("."))?;
        let log_level = match lookup(ENV_LOG_LEVEL) {
            Some(value) => {
                normalize_level(&value).map_err(|_| ConfigError::InvalidLogLevel(value))?
            }
            None => default_log_level(),
        };
        let user_name = lookup(ENV_USER).unwrap_or_else(|| DEFAULT_USER.to_string());
        let user_name = user_name.trim().to_string();
        if user_name.is_empty() {
            return Err(ConfigError::InvalidUser("name cannot be empty".to_string()));
        }

        Ok(Self {
            mode,
            data_dir,
            log_level,
            user_name,
        })
    }

    /// SQLite file for the active mode.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("memos_{}.db", self.mode.as_str()))
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

/// Makes `value` absolute against the working directory and checks it exists.
pub fn resolve_data_dir(value: &str) -> Result<PathBuf, ConfigError> {
    let trimmed = value.trim();
    let raw = Path::new(if trimmed.is_empty() { "." } else { trimmed });
    let absolute = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|err| ConfigError::DataDirUnavailable {
                path: raw.to_path_buf(),
                message: err.to_string(),
            })?
            .join(raw)
    };

    match std::fs::metadata(&absolute) {
        Ok(meta) if meta.is_dir() => Ok(absolute),
        Ok(_) => Err(ConfigError::DataDirUnavailable {
            path: absolute,
            message: "not a directory".to_string(),
        }),
        Err(err) => Err(ConfigError::DataDirUnavailable {
            path: absolute,
            message: err.to_string(),
        }),
    }
}
