//! Content synchronization core for the marketing site.
//!
//! Page content lives in a document store as six whole JSON documents. This
//! crate merges stored documents over built-in templates, keeps live merged
//! snapshots, writes whole-document edits back and seeds the store.

pub mod config;
pub mod db;
pub mod defaults;
pub mod logging;
pub mod merge;
pub mod model;
pub mod ordering;
pub mod service;
pub mod store;
pub mod sync;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use merge::{merge_document, merge_page, merge_shallow};
pub use model::homepage::{HomepageContent, HomepageSection};
pub use model::pages::{
    AboutPageContent, BlogPageContent, GlobalPresencePageContent, JoinPageContent,
    ServicesPageContent,
};
pub use model::{ContentDocument, DocumentKey, PageContent, SiteContent};
pub use service::{
    BulkInitializer, ConcurrencyPolicy, ContentMutator, ContentService, Draft, InitError,
    InitMode, InitReport, MutationError, MutationResult,
};
pub use store::{
    ChangeEvent, DocumentStore, RemoteDocument, SqliteDocumentStore, StoreError, StoreResult,
    Subscription,
};
pub use sync::{ConsumerHandle, ContentSynchronizer};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
