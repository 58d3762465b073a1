//! User rows backing the local session.
//!
//! # Invariants
//! - User names are trimmed and unique.

use crate::model::user::User;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{Connection, OptionalExtension};

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Finds one user by exact (trimmed) name.
    pub fn find_user_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        let name = normalize_user_name(name)?;
        let user = self
            .conn
            .query_row(
                "SELECT id, name FROM user WHERE name = ?1;",
                [name.as_str()],
                |row| Ok(User::new(row.get("id")?, row.get::<_, String>("name")?)),
            )
            .optional()?;
        Ok(user)
    }

    /// Inserts a new user and returns it.
    pub fn create_user(&self, name: &str) -> RepoResult<User> {
        let name = normalize_user_name(name)?;
        self.conn
            .execute("INSERT INTO user (name) VALUES (?1);", [name.as_str()])?;
        Ok(User::new(self.conn.last_insert_rowid(), name))
    }

    /// Returns the named user, creating it on first use.
    pub fn find_or_create_user(&self, name: &str) -> RepoResult<User> {
        match self.find_user_by_name(name)? {
            Some(user) => Ok(user),
            None => self.create_user(name),
        }
    }
}

fn normalize_user_name(name: &str) -> RepoResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RepoError::InvalidInput("user name cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}
