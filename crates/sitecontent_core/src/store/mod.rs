//! Document store contract.
//!
//! # Responsibility
//! - Define the three operations the content layer needs from a store:
//!   point read, whole-document write, per-key change subscription.
//! - Provide the listener bookkeeping shared by store backends.
//!
//! # Invariants
//! - Writes replace the whole document; there is no partial update.
//! - Every acknowledged write bumps the key's revision by at least one.
//! - Change events for one key carry the revision they were committed at, so
//!   receivers can discard events that arrive out of order.
//! - Dropping a [`Subscription`] stops delivery to its listener.

mod sqlite;

pub use sqlite::SqliteDocumentStore;

use crate::db::DbError;
use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store transport and persistence errors.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// The store cannot serve requests right now.
    Unavailable(String),
    /// A stored body could not be decoded, or a value could not be encoded.
    InvalidDocument { key: String, message: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "document store unavailable: {message}"),
            Self::InvalidDocument { key, message } => {
                write!(f, "invalid document `{key}`: {message}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Query(value))
    }
}

/// One stored document body and the revision it was committed at.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteDocument {
    pub value: Value,
    pub revision: u64,
}

/// Event delivered to a subscription listener.
#[derive(Debug)]
pub enum ChangeEvent {
    /// The document under `key` changed; `None` means it no longer exists.
    Snapshot {
        key: String,
        document: Option<RemoteDocument>,
    },
    /// The subscription hit an error. Delivery may or may not continue.
    Failed { key: String, error: StoreError },
}

impl ChangeEvent {
    pub fn key(&self) -> &str {
        match self {
            Self::Snapshot { key, .. } | Self::Failed { key, .. } => key,
        }
    }
}

/// Callback invoked for every change event of one key.
pub type ChangeListener = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Networked or local per-key document store.
pub trait DocumentStore: Send + Sync {
    /// Reads the current document under `key`, `None` when absent.
    fn get_once(&self, key: &str) -> StoreResult<Option<RemoteDocument>>;

    /// Registers `listener` for changes of `key` until the returned
    /// [`Subscription`] is dropped.
    fn subscribe(&self, key: &str, listener: ChangeListener) -> StoreResult<Subscription>;

    /// Replaces the whole document under `key` and returns the committed
    /// revision once the write is durable.
    fn set_whole(&self, key: &str, value: &Value) -> StoreResult<u64>;

    /// Whether a document is stored under `key`.
    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get_once(key)?.is_some())
    }
}

/// Live registration of a change listener.
///
/// Unsubscribes on drop.
pub struct Subscription {
    key: String,
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(key: impl Into<String>, cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            key: key.into(),
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stops delivery now instead of at drop.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Per-key listener table for store backends.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: AtomicU64,
    listeners: Mutex<HashMap<String, Vec<(u64, ChangeListener)>>>,
}

impl ListenerRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Adds `listener` under `key` and returns the guard that removes it.
    pub fn register(self: &Arc<Self>, key: &str, listener: ChangeListener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().entry(key.to_string()).or_default().push((id, listener));

        let registry: Weak<Self> = Arc::downgrade(self);
        let owned_key = key.to_string();
        Subscription::new(key, move || {
            if let Some(registry) = registry.upgrade() {
                registry.remove(&owned_key, id);
            }
        })
    }

    /// Number of live listeners for `key`.
    pub fn listener_count(&self, key: &str) -> usize {
        self.lock().get(key).map_or(0, Vec::len)
    }

    /// Delivers `event` to every listener of its key.
    ///
    /// Listeners run on the caller's thread, outside the registry lock, so a
    /// listener may subscribe, unsubscribe or read the store.
    pub fn notify(&self, event: &ChangeEvent) {
        let targets: Vec<ChangeListener> = self
            .lock()
            .get(event.key())
            .map(|entries| entries.iter().map(|(_, l)| Arc::clone(l)).collect())
            .unwrap_or_default();

        for listener in targets {
            listener(event);
        }
    }

    fn remove(&self, key: &str, id: u64) {
        let mut listeners = self.lock();
        if let Some(entries) = listeners.get_mut(key) {
            entries.retain(|(entry_id, _)| *entry_id != id);
            if entries.is_empty() {
                listeners.remove(key);
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<(u64, ChangeListener)>>> {
        // Listener panics never happen under this lock, so the table is
        // consistent even when poisoned.
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
