//! SQLite bootstrap for the shipped document store backend.
//!
//! # Responsibility
//! - Open and configure SQLite connections backing `SqliteDocumentStore`.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - No document is read or written before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure opening, migrating or querying the content database.
#[derive(Debug)]
pub enum DbError {
    /// The database could not be opened or configured.
    Open(rusqlite::Error),
    /// A schema step failed; the whole upgrade was rolled back.
    Migration { version: u32, source: rusqlite::Error },
    /// The file was written by a newer build.
    SchemaTooNew { found: u32, supported: u32 },
    Query(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(err) => write!(f, "cannot open content database: {err}"),
            Self::Migration { version, source } => {
                write!(f, "content schema step {version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "content database uses schema {found}; this build reads up to {supported}"
            ),
            Self::Query(err) => write!(f, "content query failed: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open(err) | Self::Query(err) | Self::Migration { source: err, .. } => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(value)
    }
}
