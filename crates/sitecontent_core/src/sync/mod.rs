//! Live synchronizer: merged in-memory snapshots kept current from the store.
//!
//! # Responsibility
//! - Hold one merged snapshot per document key.
//! - Own exactly one store subscription per key and fan changes out to any
//!   number of in-process consumers.
//! - Degrade every read or subscription failure to the best known value.
//!
//! # Invariants
//! - A snapshot is always a complete document (template-backed), never empty.
//! - Within one key, an event with an older revision than the applied one is
//!   discarded, so snapshots follow store commit order.
//! - Consumers see every applied change, once, in the order changes were
//!   applied, and never under an internal lock. The last payload a consumer
//!   received always equals the current snapshot once delivery settles.
//! - Writes are never applied locally; only store echoes change snapshots.

mod consumer;

pub use consumer::{ConsumerHandle, ContentListener};

use crate::merge::merge_page;
use crate::model::{ContentDocument, DocumentKey, PageContent, SiteContent};
use crate::store::{ChangeEvent, DocumentStore, RemoteDocument, StoreError, Subscription};
use consumer::ConsumerRegistry;
use log::{debug, info, warn};
use std::collections::{HashMap, VecDeque};
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

#[derive(Debug, Default)]
struct SyncState {
    content: SiteContent,
    /// Revision of the applied snapshot; absent until one was applied.
    revisions: HashMap<DocumentKey, u64>,
    started: bool,
    loading: bool,
    last_error: Option<String>,
}

/// Applied snapshots waiting for consumer delivery, in apply order.
#[derive(Default)]
struct Delivery {
    pending: VecDeque<PageContent>,
    /// Set while one thread is delivering; other threads only enqueue.
    draining: bool,
}

struct SyncShared {
    state: RwLock<SyncState>,
    delivery: Mutex<Delivery>,
    consumers: Arc<ConsumerRegistry>,
}

/// Keeps merged snapshots of every page document in sync with a store.
///
/// Create one per session; instances sharing a store observe each other's
/// writes through the store's change events.
pub struct ContentSynchronizer {
    store: Arc<dyn DocumentStore>,
    shared: Arc<SyncShared>,
    subscriptions: Mutex<Vec<Subscription>>,
}

impl ContentSynchronizer {
    /// Creates a stopped synchronizer serving templates for every key.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let state = SyncState {
            loading: true,
            ..SyncState::default()
        };
        Self {
            store,
            shared: Arc::new(SyncShared {
                state: RwLock::new(state),
                delivery: Mutex::new(Delivery::default()),
                consumers: Arc::new(ConsumerRegistry::default()),
            }),
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Subscribes to every document key, then reads each one once.
    ///
    /// Never fails: a key whose read fails keeps its template and the error
    /// is recorded in [`last_error`](Self::last_error). Calling `start` on a
    /// running synchronizer does nothing.
    pub fn start(&self) {
        {
            let mut state = self.shared.write();
            if state.started {
                return;
            }
            state.started = true;
            state.loading = true;
        }
        info!("event=sync_start module=sync status=start keys={}", DocumentKey::ALL.len());

        let mut opened = Vec::with_capacity(DocumentKey::ALL.len());
        for key in DocumentKey::ALL {
            match self.open_subscription(key) {
                Ok(subscription) => opened.push(subscription),
                Err(err) => {
                    warn!("event=sync_subscribe module=sync status=error key={key} error={err}");
                    self.shared.record_error(format!("subscribe {key}: {err}"));
                }
            }
        }
        self.subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(opened);

        let failures = self.read_all();
        self.shared.write().loading = false;
        info!("event=sync_start module=sync status=ok read_failures={failures}");
    }

    /// Drops every store subscription. Snapshots keep their last values.
    pub fn stop(&self) {
        let dropped: Vec<Subscription> = self
            .subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        self.shared.write().started = false;
        info!("event=sync_stop module=sync status=ok subscriptions={}", dropped.len());
    }

    /// Re-reads every key once, applying the same failure rule as `start`.
    ///
    /// A refresh where every read succeeds clears [`last_error`](Self::last_error).
    pub fn refresh(&self) {
        if self.read_all() == 0 {
            self.shared.write().last_error = None;
        }
    }

    /// Copy of every current snapshot.
    pub fn content(&self) -> SiteContent {
        self.shared.read().content.clone()
    }

    /// Current snapshot of the document under `key`.
    pub fn page(&self, key: DocumentKey) -> PageContent {
        self.shared.read().content.page(key)
    }

    /// Current snapshot of document type `T`.
    pub fn document<T: ContentDocument>(&self) -> T {
        self.shared.read().content.get::<T>().clone()
    }

    /// Store revision of the applied snapshot; `0` when the document was
    /// absent or never read.
    pub fn revision(&self, key: DocumentKey) -> u64 {
        self.shared.read().revisions.get(&key).copied().unwrap_or(0)
    }

    /// True from construction until the first round of reads finished.
    pub fn is_loading(&self) -> bool {
        self.shared.read().loading
    }

    /// Most recent read, subscription or session write error message.
    ///
    /// Writes count when made through `ContentService`; a bare
    /// `ContentMutator` reports failures only to its caller.
    pub fn last_error(&self) -> Option<String> {
        self.shared.read().last_error.clone()
    }

    /// Records a failed write so observers polling `last_error` see it.
    pub(crate) fn record_write_error(&self, error: &dyn std::error::Error) {
        warn!("event=sync_write module=sync status=error error={error}");
        self.shared.record_error(format!("write: {error}"));
    }

    /// Number of open store subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Calls `listener` with every applied change of any document.
    pub fn subscribe(
        &self,
        listener: impl Fn(&PageContent) + Send + Sync + 'static,
    ) -> ConsumerHandle {
        self.shared.consumers.register(None, Arc::new(listener))
    }

    /// Calls `listener` with every applied change of the document under `key`.
    pub fn watch(
        &self,
        key: DocumentKey,
        listener: impl Fn(&PageContent) + Send + Sync + 'static,
    ) -> ConsumerHandle {
        self.shared.consumers.register(Some(key), Arc::new(listener))
    }

    /// Typed variant of [`watch`](Self::watch).
    pub fn watch_document<T: ContentDocument>(
        &self,
        listener: impl Fn(&T) + Send + Sync + 'static,
    ) -> ConsumerHandle {
        self.watch(T::KEY, move |page| {
            if let Some(document) = page.clone().downcast::<T>() {
                listener(&document);
            }
        })
    }

    /// Number of registered consumers.
    pub fn consumer_count(&self) -> usize {
        self.shared.consumers.len()
    }

    fn open_subscription(&self, key: DocumentKey) -> Result<Subscription, StoreError> {
        let shared = Arc::downgrade(&self.shared);
        self.store.subscribe(
            key.as_str(),
            Arc::new(move |event: &ChangeEvent| {
                if let Some(shared) = shared.upgrade() {
                    shared.on_change(key, event);
                }
            }),
        )
    }

    /// Reads every key once. Returns the number of failed reads.
    fn read_all(&self) -> usize {
        let mut failures = 0;
        for key in DocumentKey::ALL {
            match self.store.get_once(key.as_str()) {
                Ok(document) => self.shared.apply(key, document, "read"),
                Err(err) => {
                    failures += 1;
                    warn!("event=sync_read module=sync status=error key={key} error={err}");
                    self.shared.record_error(format!("read {key}: {err}"));
                    self.shared.reset_to_template(key);
                }
            }
        }
        failures
    }
}

impl SyncShared {
    fn read(&self) -> RwLockReadGuard<'_, SyncState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SyncState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn on_change(&self, key: DocumentKey, event: &ChangeEvent) {
        match event {
            ChangeEvent::Snapshot { document, .. } => {
                self.apply(key, document.clone(), "subscription");
            }
            ChangeEvent::Failed { error, .. } => {
                warn!("event=sync_subscription module=sync status=error key={key} error={error}");
                self.record_error(format!("subscription {key}: {error}"));
            }
        }
    }

    fn apply(&self, key: DocumentKey, document: Option<RemoteDocument>, source: &'static str) {
        let revision = document.as_ref().map_or(0, |doc| doc.revision);
        let page = merge_page(key, document.as_ref().map(|doc| &doc.value));
        {
            let mut state = self.write();
            if let Some(&applied) = state.revisions.get(&key) {
                // Documents are never deleted, so an absent document after an
                // applied revision is a read that raced a newer write.
                if revision < applied {
                    debug!(
                        "event=sync_apply module=sync status=stale key={key} source={source} revision={revision} applied={applied}"
                    );
                    return;
                }
            }
            state.content.apply(page.clone());
            state.revisions.insert(key, revision);
            self.enqueue(page);
        }
        debug!("event=sync_apply module=sync status=ok key={key} source={source} revision={revision}");
        self.deliver();
    }

    /// Serves the template for `key` and forgets its revision, so the next
    /// store event for the key is applied whatever its revision.
    fn reset_to_template(&self, key: DocumentKey) {
        let page = PageContent::template(key);
        {
            let mut state = self.write();
            state.content.apply(page.clone());
            state.revisions.remove(&key);
            self.enqueue(page);
        }
        self.deliver();
    }

    /// Queues `page` for consumers. Callers hold the state write lock, so
    /// queue order is apply order.
    fn enqueue(&self, page: PageContent) {
        self.delivery().pending.push_back(page);
    }

    /// Delivers queued snapshots unless another thread already is.
    ///
    /// A listener that writes to the store re-enters here on the same thread
    /// and only enqueues; the outer loop delivers its change next.
    fn deliver(&self) {
        {
            let mut delivery = self.delivery();
            if delivery.draining {
                return;
            }
            delivery.draining = true;
        }
        let _drain = DrainGuard(self);

        loop {
            let next = {
                let mut delivery = self.delivery();
                match delivery.pending.pop_front() {
                    Some(page) => page,
                    None => {
                        delivery.draining = false;
                        return;
                    }
                }
            };
            self.consumers.notify(&next);
        }
    }

    fn delivery(&self) -> MutexGuard<'_, Delivery> {
        self.delivery.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record_error(&self, message: String) {
        self.write().last_error = Some(message);
    }
}

/// Releases the drain role if a listener panics mid-delivery.
struct DrainGuard<'a>(&'a SyncShared);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.delivery().draining = false;
        }
    }
}
