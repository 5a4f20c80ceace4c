//! In-process consumers of synchronizer snapshots.

use crate::model::{DocumentKey, PageContent};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Callback receiving each applied snapshot.
pub type ContentListener = Arc<dyn Fn(&PageContent) + Send + Sync>;

struct Consumer {
    id: u64,
    /// `None` receives every key.
    key: Option<DocumentKey>,
    listener: ContentListener,
}

#[derive(Default)]
pub(crate) struct ConsumerRegistry {
    next_id: AtomicU64,
    consumers: Mutex<Vec<Consumer>>,
}

impl ConsumerRegistry {
    pub(crate) fn register(
        self: &Arc<Self>,
        key: Option<DocumentKey>,
        listener: ContentListener,
    ) -> ConsumerHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push(Consumer { id, key, listener });
        ConsumerHandle {
            id,
            registry: Arc::downgrade(self),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    pub(crate) fn notify(&self, page: &PageContent) {
        let key = page.key();
        let targets: Vec<ContentListener> = self
            .lock()
            .iter()
            .filter(|consumer| consumer.key.map_or(true, |wanted| wanted == key))
            .map(|consumer| Arc::clone(&consumer.listener))
            .collect();

        for listener in targets {
            listener(page);
        }
    }

    fn remove(&self, id: u64) {
        self.lock().retain(|consumer| consumer.id != id);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Consumer>> {
        self.consumers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Registration of one consumer. Dropping it stops notifications.
///
/// The store subscription is shared and stays open.
#[must_use = "dropping the handle unregisters the consumer"]
pub struct ConsumerHandle {
    id: u64,
    registry: Weak<ConsumerRegistry>,
}

impl ConsumerHandle {
    /// Unregisters now instead of at drop.
    pub fn unsubscribe(self) {}
}

impl Drop for ConsumerHandle {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}
