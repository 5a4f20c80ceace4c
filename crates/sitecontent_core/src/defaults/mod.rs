//! Default template registry.
//!
//! Each document type's `Default` impl is its template: the complete value
//! served when the store has nothing, and the backfill source for any field
//! the store lacks. Templates never reject extra fields.

mod homepage;
mod pages;

use crate::model::{DocumentKey, PageContent};
use serde_json::Value;

/// The template for `key` as the JSON value that would be stored.
pub fn template_value(key: DocumentKey) -> Value {
    // Plain structs of strings, numbers and lists always serialize.
    PageContent::template(key)
        .to_value()
        .unwrap_or(Value::Null)
}
