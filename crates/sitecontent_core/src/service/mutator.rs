//! Section/page mutator: whole-document overwrites.
//!
//! # Responsibility
//! - Write one complete document per call under the configured
//!   concurrency policy.
//! - Expand a homepage section edit into a whole homepage write.
//!
//! # Invariants
//! - Every write carries the complete document; no field-level patching.
//! - The mutator never touches synchronizer snapshots. Callers observe their
//!   write through the store echo.
//! - A failed write leaves the caller's value untouched.

use crate::model::homepage::{HomepageContent, HomepageSection};
use crate::model::{ContentDocument, DocumentKey, PageContent};
use crate::store::{DocumentStore, StoreError};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Instant;

pub type MutationResult<T> = Result<T, MutationError>;

/// How concurrent writers to the same document are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcurrencyPolicy {
    /// Unconditional overwrite; the last write the store acknowledges wins.
    #[default]
    LastWriteWins,
}

impl Display for ConcurrencyPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LastWriteWins => f.write_str("last_write_wins"),
        }
    }
}

/// Failure of a single document write.
#[derive(Debug)]
pub enum MutationError {
    /// The document could not be encoded as JSON.
    Encode { key: DocumentKey, message: String },
    /// The store rejected or failed the write.
    Store { key: DocumentKey, source: StoreError },
}

impl MutationError {
    pub fn key(&self) -> DocumentKey {
        match self {
            Self::Encode { key, .. } | Self::Store { key, .. } => *key,
        }
    }
}

impl Display for MutationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode { key, message } => write!(f, "failed to encode `{key}`: {message}"),
            Self::Store { key, source } => write!(f, "failed to write `{key}`: {source}"),
        }
    }
}

impl Error for MutationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store { source, .. } => Some(source),
            Self::Encode { .. } => None,
        }
    }
}

/// Writes whole documents to a store.
#[derive(Clone)]
pub struct ContentMutator {
    store: Arc<dyn DocumentStore>,
    policy: ConcurrencyPolicy,
}

impl ContentMutator {
    pub fn new(store: Arc<dyn DocumentStore>, policy: ConcurrencyPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> ConcurrencyPolicy {
        self.policy
    }

    /// Overwrites document `T` with `document`.
    pub fn write_document<T: ContentDocument>(&self, document: &T) -> MutationResult<()> {
        let value = encode(T::KEY, document)?;
        self.write_value(T::KEY, &value)
    }

    /// Overwrites the document `page` belongs to.
    pub fn write_page(&self, page: &PageContent) -> MutationResult<()> {
        let key = page.key();
        let value = page.to_value().map_err(|err| MutationError::Encode {
            key,
            message: err.to_string(),
        })?;
        self.write_value(key, &value)
    }

    /// Writes `current` with `section` swapped in as the whole homepage.
    ///
    /// `current` is the caller's latest homepage snapshot; every other
    /// section is re-sent unchanged.
    pub fn write_section(
        &self,
        current: &HomepageContent,
        section: HomepageSection,
    ) -> MutationResult<()> {
        let name = section.name();
        let next = section.apply_to(current);
        info!("event=section_write module=mutator status=start section={name}");
        self.write_document(&next)
    }

    fn write_value(&self, key: DocumentKey, value: &Value) -> MutationResult<()> {
        let started_at = Instant::now();
        let result = match self.policy {
            ConcurrencyPolicy::LastWriteWins => self.store.set_whole(key.as_str(), value),
        };

        match result {
            Ok(revision) => {
                info!(
                    "event=doc_mutate module=mutator status=ok key={key} policy={} revision={revision} duration_ms={}",
                    self.policy,
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(source) => {
                error!(
                    "event=doc_mutate module=mutator status=error key={key} policy={} duration_ms={} error={source}",
                    self.policy,
                    started_at.elapsed().as_millis()
                );
                Err(MutationError::Store { key, source })
            }
        }
    }
}

fn encode<T: ContentDocument>(key: DocumentKey, document: &T) -> MutationResult<Value> {
    serde_json::to_value(document).map_err(|err| MutationError::Encode {
        key,
        message: err.to_string(),
    })
}
