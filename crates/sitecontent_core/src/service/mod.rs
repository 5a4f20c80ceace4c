//! Write-side services and the session facade.
//!
//! # Responsibility
//! - Turn edits into whole-document store writes.
//! - Seed or reset stored content from default templates.

pub mod content_service;
pub mod draft;
pub mod initializer;
pub mod mutator;

pub use content_service::ContentService;
pub use draft::Draft;
pub use initializer::{BulkInitializer, InitError, InitMode, InitReport};
pub use mutator::{ConcurrencyPolicy, ContentMutator, MutationError, MutationResult};
