//! SQLite-backed document store.
//!
//! # Responsibility
//! - Persist one JSON body per document key with a monotonically increasing
//!   per-key revision.
//! - Deliver change events to every listener after each committed write.
//!
//! # Invariants
//! - `set_whole` commits before any listener sees the new value.
//! - Every session sharing one store instance observes every write.
//! - Document bodies are never logged.

use super::{
    ChangeEvent, ChangeListener, DocumentStore, ListenerRegistry, RemoteDocument, StoreError,
    StoreResult, Subscription,
};
use crate::db::{open_db, open_db_in_memory};
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

const UPSERT_SQL: &str = "INSERT INTO documents (key, body)
VALUES (?1, ?2)
ON CONFLICT(key) DO UPDATE SET
    body = excluded.body,
    revision = documents.revision + 1,
    updated_at = (strftime('%s', 'now') * 1000)
RETURNING revision;";

/// Document store over a single SQLite connection.
pub struct SqliteDocumentStore {
    conn: Mutex<Connection>,
    listeners: Arc<ListenerRegistry>,
}

impl SqliteDocumentStore {
    /// Wraps an already migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Opens (or creates) a store database at `path`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Opens a private in-memory store.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    /// Number of live subscriptions for `key`.
    pub fn subscriber_count(&self, key: &str) -> usize {
        self.listeners.listener_count(key)
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()))
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn get_once(&self, key: &str) -> StoreResult<Option<RemoteDocument>> {
        let row = self
            .conn()?
            .query_row(
                "SELECT body, revision FROM documents WHERE key = ?1;",
                [key],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)),
            )
            .optional()?;

        let Some((body, revision)) = row else {
            return Ok(None);
        };
        let value = serde_json::from_str(&body).map_err(|err| StoreError::InvalidDocument {
            key: key.to_string(),
            message: err.to_string(),
        })?;
        Ok(Some(RemoteDocument {
            value,
            revision: revision_from_db(revision),
        }))
    }

    fn subscribe(&self, key: &str, listener: ChangeListener) -> StoreResult<Subscription> {
        let subscription = self.listeners.register(key, listener);
        debug!(
            "event=doc_subscribe module=store status=ok key={key} listeners={}",
            self.listeners.listener_count(key)
        );
        Ok(subscription)
    }

    fn set_whole(&self, key: &str, value: &Value) -> StoreResult<u64> {
        let body = serde_json::to_string(value).map_err(|err| StoreError::InvalidDocument {
            key: key.to_string(),
            message: err.to_string(),
        })?;

        let committed = self
            .conn()?
            .query_row(UPSERT_SQL, params![key, body.as_str()], |row| {
                row.get::<_, i64>(0)
            });
        let revision = match committed {
            Ok(revision) => revision_from_db(revision),
            Err(err) => {
                error!("event=doc_write module=store status=error key={key} error={err}");
                return Err(err.into());
            }
        };
        debug!(
            "event=doc_write module=store status=ok key={key} revision={revision} bytes={}",
            body.len()
        );

        self.listeners.notify(&ChangeEvent::Snapshot {
            key: key.to_string(),
            document: Some(RemoteDocument {
                value: value.clone(),
                revision,
            }),
        });
        Ok(revision)
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        let exists: i64 = self.conn()?.query_row(
            "SELECT EXISTS(SELECT 1 FROM documents WHERE key = ?1);",
            [key],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

fn revision_from_db(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
