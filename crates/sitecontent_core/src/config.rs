//! Runtime configuration loaded from a JSON file.
//!
//! Every field is optional:
//!
//! ```json
//! {
//!   "db_path": "/var/lib/site/content.sqlite3",
//!   "log_level": "info",
//!   "log_dir": "/var/log/site",
//!   "concurrency_policy": "last_write_wins"
//! }
//! ```

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use crate::service::ConcurrencyPolicy;
use crate::store::{SqliteDocumentStore, StoreResult};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "malformed config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// SQLite database file; in-memory when absent.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute directory for log files; logging stays off when absent.
    pub log_dir: Option<PathBuf>,
    pub concurrency_policy: ConcurrencyPolicy,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
            concurrency_policy: ConcurrencyPolicy::default(),
        }
    }
}

impl CoreConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        if let Some(dir) = &self.log_dir {
            normalize_log_dir(dir).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        }
        Ok(())
    }

    /// Opens the configured SQLite store, or an in-memory one.
    pub fn open_store(&self) -> StoreResult<SqliteDocumentStore> {
        match &self.db_path {
            Some(path) => SqliteDocumentStore::open(path),
            None => SqliteDocumentStore::open_in_memory(),
        }
    }
}
