//! Bulk initializer: writes every document's template.
//!
//! # Invariants
//! - `InitMode::Overwrite` replaces every document, discarding edits.
//! - Per-key writes run concurrently; a failed key never rolls back others.
//! - The operation succeeds only when every attempted write succeeded.

use super::mutator::{ContentMutator, MutationError};
use crate::model::{DocumentKey, PageContent};
use crate::store::{DocumentStore, StoreError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::thread;

/// Which documents the initializer writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitMode {
    /// Write every template, replacing stored content.
    #[default]
    Overwrite,
    /// Write templates only for keys with no stored document.
    SeedIfAbsent,
}

/// Keys touched by a successful initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub written: Vec<DocumentKey>,
    /// Keys left alone because they were already stored.
    pub skipped: Vec<DocumentKey>,
}

/// At least one per-key write failed.
#[derive(Debug)]
pub struct InitError {
    /// Keys whose template was written before the failure was known.
    pub written: Vec<DocumentKey>,
    pub failures: Vec<MutationError>,
}

impl Display for InitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "content initialization failed for {} of {} documents",
            self.failures.len(),
            self.failures.len() + self.written.len()
        )?;
        for failure in &self.failures {
            write!(f, "; {failure}")?;
        }
        Ok(())
    }
}

impl Error for InitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.failures.first().map(|err| err as &(dyn Error + 'static))
    }
}

/// Seeds or resets every known document with its template.
pub struct BulkInitializer {
    store: Arc<dyn DocumentStore>,
    mutator: ContentMutator,
}

impl BulkInitializer {
    pub fn new(store: Arc<dyn DocumentStore>, mutator: ContentMutator) -> Self {
        Self { store, mutator }
    }

    /// Overwrites every document with its template.
    ///
    /// Destructive: stored edits are discarded.
    pub fn initialize_all(&self) -> Result<InitReport, InitError> {
        self.run(InitMode::Overwrite)
    }

    /// Writes templates only where no document is stored yet.
    ///
    /// Presence is checked before writing, so a document created by another
    /// writer between check and write is overwritten.
    pub fn seed_missing(&self) -> Result<InitReport, InitError> {
        self.run(InitMode::SeedIfAbsent)
    }

    pub fn run(&self, mode: InitMode) -> Result<InitReport, InitError> {
        info!("event=content_init module=initializer status=start mode={mode:?}");
        let mut report = InitReport::default();
        let mut failures = Vec::new();

        let targets = match mode {
            InitMode::Overwrite => DocumentKey::ALL.to_vec(),
            InitMode::SeedIfAbsent => {
                let mut missing = Vec::new();
                for key in DocumentKey::ALL {
                    match self.store.contains(key.as_str()) {
                        Ok(true) => report.skipped.push(key),
                        Ok(false) => missing.push(key),
                        Err(source) => {
                            warn!("event=content_init module=initializer status=error key={key} error={source}");
                            failures.push(MutationError::Store { key, source });
                        }
                    }
                }
                missing
            }
        };

        let outcomes: Vec<(DocumentKey, Result<(), MutationError>)> = thread::scope(|scope| {
            let handles: Vec<_> = targets
                .iter()
                .map(|&key| (key, scope.spawn(move || self.write_template(key))))
                .collect();
            handles
                .into_iter()
                .map(|(key, handle)| {
                    let outcome = handle.join().unwrap_or_else(|_| {
                        Err(MutationError::Store {
                            key,
                            source: StoreError::Unavailable(
                                "template writer panicked".to_string(),
                            ),
                        })
                    });
                    (key, outcome)
                })
                .collect()
        });

        for (key, outcome) in outcomes {
            match outcome {
                Ok(()) => report.written.push(key),
                Err(err) => failures.push(err),
            }
        }

        if failures.is_empty() {
            info!(
                "event=content_init module=initializer status=ok written={} skipped={}",
                report.written.len(),
                report.skipped.len()
            );
            Ok(report)
        } else {
            error!(
                "event=content_init module=initializer status=error written={} failed={}",
                report.written.len(),
                failures.len()
            );
            Err(InitError {
                written: report.written,
                failures,
            })
        }
    }

    fn write_template(&self, key: DocumentKey) -> Result<(), MutationError> {
        self.mutator.write_page(&PageContent::template(key))
    }
}
