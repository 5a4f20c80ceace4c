//! Local edit buffer for one full document.
//!
//! # Invariants
//! - A draft always holds a complete document; saving sends all of it.
//! - A failed save leaves the draft and its dirty flag untouched.
//! - Removing an entity never renumbers the remaining orders.

use super::mutator::{ContentMutator, MutationResult};
use crate::model::entity::{new_entity_id, FaqColumn, FaqItem, Ordered, SubEntity};
use crate::model::ContentDocument;
use crate::ordering::{next_order, next_order_in_column, position_of};
use crate::sync::ContentSynchronizer;

/// Editable copy of a document, detached from live updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft<T: ContentDocument> {
    value: T,
    dirty: bool,
}

impl<T: ContentDocument> Draft<T> {
    pub fn new(value: T) -> Self {
        Self { value, dirty: false }
    }

    /// Starts from the synchronizer's current snapshot of `T`.
    pub fn from_synchronizer(synchronizer: &ContentSynchronizer) -> Self {
        Self::new(synchronizer.document::<T>())
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Applies `edit` to the buffered document and marks it dirty.
    pub fn edit<R>(&mut self, edit: impl FnOnce(&mut T) -> R) -> R {
        self.dirty = true;
        edit(&mut self.value)
    }

    /// Writes the whole buffered document.
    ///
    /// On success the draft is clean; on failure it keeps every edit so the
    /// save can be retried.
    pub fn save(&mut self, mutator: &ContentMutator) -> MutationResult<()> {
        mutator.write_document(&self.value)?;
        self.dirty = false;
        Ok(())
    }

    /// Replaces the buffer with `latest`, dropping local edits.
    pub fn discard(&mut self, latest: T) {
        self.value = latest;
        self.dirty = false;
    }
}

/// Appends `item` with a fresh id and the next order; returns the id.
pub fn add_ordered<E: Ordered>(items: &mut Vec<E>, mut item: E) -> String {
    let id = new_entity_id();
    item.set_id(id.clone());
    item.set_order(next_order(items));
    items.push(item);
    id
}

/// Appends a FAQ item ordered last within its own column; returns the id.
pub fn add_faq_item(
    items: &mut Vec<FaqItem>,
    question: String,
    answer: String,
    column: FaqColumn,
) -> String {
    let id = new_entity_id();
    let order = next_order_in_column(items, column);
    items.push(FaqItem {
        id: id.clone(),
        question,
        answer,
        column,
        order,
    });
    id
}

/// Removes the entity with `id`; returns it when it existed.
pub fn remove_by_id<E: SubEntity>(items: &mut Vec<E>, id: &str) -> Option<E> {
    position_of(items, id).map(|index| items.remove(index))
}

/// Applies `update` to the entity with `id`; returns false when none matched.
pub fn update_by_id<E: SubEntity>(
    items: &mut [E],
    id: &str,
    update: impl FnOnce(&mut E),
) -> bool {
    match position_of(items, id) {
        Some(index) => {
            update(&mut items[index]);
            true
        }
        None => false,
    }
}
