//! Session-level facade over synchronizer, mutator and initializer.
//!
//! # Responsibility
//! - Wire the three components to one shared store.
//! - Offer the admin-panel entry points: section updates against the
//!   current snapshot, whole-page updates, drafts and initialization.

use super::draft::Draft;
use super::initializer::{BulkInitializer, InitError, InitMode, InitReport};
use super::mutator::{ConcurrencyPolicy, ContentMutator, MutationResult};
use crate::model::homepage::{HomepageContent, HomepageSection};
use crate::model::ContentDocument;
use crate::store::DocumentStore;
use crate::sync::ContentSynchronizer;
use std::sync::Arc;

/// One content session bound to a store.
pub struct ContentService {
    synchronizer: ContentSynchronizer,
    mutator: ContentMutator,
    initializer: BulkInitializer,
}

impl ContentService {
    /// Builds a stopped session; call [`start`](Self::start) to go live.
    pub fn new(store: Arc<dyn DocumentStore>, policy: ConcurrencyPolicy) -> Self {
        let mutator = ContentMutator::new(Arc::clone(&store), policy);
        Self {
            synchronizer: ContentSynchronizer::new(Arc::clone(&store)),
            initializer: BulkInitializer::new(store, mutator.clone()),
            mutator,
        }
    }

    pub fn start(&self) {
        self.synchronizer.start();
    }

    pub fn stop(&self) {
        self.synchronizer.stop();
    }

    pub fn refresh(&self) {
        self.synchronizer.refresh();
    }

    pub fn synchronizer(&self) -> &ContentSynchronizer {
        &self.synchronizer
    }

    pub fn mutator(&self) -> &ContentMutator {
        &self.mutator
    }

    /// Replaces one homepage section, keeping the other six as currently
    /// synchronized.
    pub fn update_section(&self, section: HomepageSection) -> MutationResult<()> {
        let current = self.synchronizer.document::<HomepageContent>();
        let result = self.mutator.write_section(&current, section);
        self.track(result)
    }

    /// Overwrites document `T` entirely.
    pub fn update_page<T: ContentDocument>(&self, document: &T) -> MutationResult<()> {
        let result = self.mutator.write_document(document);
        self.track(result)
    }

    /// Saves `draft`; on failure it stays dirty and the error is recorded.
    pub fn save_draft<T: ContentDocument>(&self, draft: &mut Draft<T>) -> MutationResult<()> {
        let result = draft.save(&self.mutator);
        self.track(result)
    }

    /// Editable copy of the current snapshot of `T`.
    pub fn draft<T: ContentDocument>(&self) -> Draft<T> {
        Draft::from_synchronizer(&self.synchronizer)
    }

    /// Writes default templates according to `mode`.
    pub fn initialize_content(&self, mode: InitMode) -> Result<InitReport, InitError> {
        self.track(self.initializer.run(mode))
    }

    fn track<T, E: std::error::Error>(&self, result: Result<T, E>) -> Result<T, E> {
        if let Err(err) = &result {
            self.synchronizer.record_write_error(err);
        }
        result
    }
}
