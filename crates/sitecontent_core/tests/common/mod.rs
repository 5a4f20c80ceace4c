#![allow(dead_code)]

use serde_json::Value;
use sitecontent_core::store::{
    ChangeEvent, ChangeListener, DocumentStore, ListenerRegistry, RemoteDocument,
    SqliteDocumentStore, StoreError, StoreResult, Subscription,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// SQLite-backed store with switchable failures and injectable events.
pub struct FlakyStore {
    inner: SqliteDocumentStore,
    injected: Arc<ListenerRegistry>,
    failing_reads: Mutex<HashSet<String>>,
    failing_writes: Mutex<HashSet<String>>,
    fail_subscribe: Mutex<bool>,
}

impl FlakyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: SqliteDocumentStore::open_in_memory().unwrap(),
            injected: ListenerRegistry::new(),
            failing_reads: Mutex::new(HashSet::new()),
            failing_writes: Mutex::new(HashSet::new()),
            fail_subscribe: Mutex::new(false),
        })
    }

    pub fn fail_reads(&self, key: &str) {
        self.failing_reads.lock().unwrap().insert(key.to_string());
    }

    pub fn heal_reads(&self) {
        self.failing_reads.lock().unwrap().clear();
    }

    pub fn fail_writes(&self, key: &str) {
        self.failing_writes.lock().unwrap().insert(key.to_string());
    }

    pub fn heal_writes(&self) {
        self.failing_writes.lock().unwrap().clear();
    }

    pub fn fail_subscriptions(&self) {
        *self.fail_subscribe.lock().unwrap() = true;
    }

    /// Delivers `event` to subscribers as if the store had emitted it.
    pub fn inject(&self, event: ChangeEvent) {
        self.injected.notify(&event);
    }

    pub fn inject_snapshot(&self, key: &str, value: Value, revision: u64) {
        self.inject(ChangeEvent::Snapshot {
            key: key.to_string(),
            document: Some(RemoteDocument { value, revision }),
        });
    }

    pub fn inject_failure(&self, key: &str, message: &str) {
        self.inject(ChangeEvent::Failed {
            key: key.to_string(),
            error: StoreError::Unavailable(message.to_string()),
        });
    }

    pub fn raw(&self, key: &str) -> Option<RemoteDocument> {
        self.inner.get_once(key).unwrap()
    }
}

impl DocumentStore for FlakyStore {
    fn get_once(&self, key: &str) -> StoreResult<Option<RemoteDocument>> {
        if self.failing_reads.lock().unwrap().contains(key) {
            return Err(StoreError::Unavailable(format!("read of {key} refused")));
        }
        self.inner.get_once(key)
    }

    fn subscribe(&self, key: &str, listener: ChangeListener) -> StoreResult<Subscription> {
        if *self.fail_subscribe.lock().unwrap() {
            return Err(StoreError::Unavailable("subscriptions refused".to_string()));
        }
        let live = self.inner.subscribe(key, Arc::clone(&listener))?;
        let injected = self.injected.register(key, listener);
        Ok(Subscription::new(key, move || {
            drop(live);
            drop(injected);
        }))
    }

    fn set_whole(&self, key: &str, value: &Value) -> StoreResult<u64> {
        if self.failing_writes.lock().unwrap().contains(key) {
            return Err(StoreError::Unavailable(format!("write of {key} refused")));
        }
        self.inner.set_whole(key, value)
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        self.inner.contains(key)
    }
}

pub fn sqlite_store() -> Arc<SqliteDocumentStore> {
    Arc::new(SqliteDocumentStore::open_in_memory().unwrap())
}
