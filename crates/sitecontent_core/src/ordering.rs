//! Ordered collection helpers for sub-entity lists.
//!
//! # Invariants
//! - Sorting is stable: equal `order` values keep their source positions.
//! - Partitioning never drops, duplicates or rewrites an item.

use crate::model::entity::{FaqColumn, FaqItem, Ordered, SubEntity};

/// Returns `items` sorted ascending by `order`.
pub fn order_by<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(T::order);
    sorted
}

/// Two display groups split from one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    pub left: Vec<T>,
    pub right: Vec<T>,
}

/// Splits `items` by `is_left`, ordering each group independently.
pub fn partition_by<T, F>(items: &[T], is_left: F) -> Partition<T>
where
    T: Ordered + Clone,
    F: Fn(&T) -> bool,
{
    let (left, right): (Vec<T>, Vec<T>) = items.iter().cloned().partition(|item| is_left(item));
    Partition {
        left: order_by(&left),
        right: order_by(&right),
    }
}

/// Splits FAQ items into their left and right display columns.
pub fn partition_by_column(items: &[FaqItem]) -> Partition<FaqItem> {
    partition_by(items, |item| item.column == FaqColumn::Left)
}

/// Order value for an item appended to `items`.
pub fn next_order<T>(items: &[T]) -> i64 {
    i64::try_from(items.len()).map_or(i64::MAX, |len| len.saturating_add(1))
}

/// Order value for a FAQ item appended to `column`.
pub fn next_order_in_column(items: &[FaqItem], column: FaqColumn) -> i64 {
    let in_column = items.iter().filter(|item| item.column == column).count();
    i64::try_from(in_column).map_or(i64::MAX, |len| len.saturating_add(1))
}

/// Source-list index of the item with `id`.
///
/// Display order and storage order differ; edits made against a sorted view
/// map back to storage through the item id.
pub fn position_of<T: SubEntity>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::{next_order, next_order_in_column, order_by, partition_by_column, position_of};
    use crate::model::entity::{FaqColumn, FaqItem, StatCard};

    fn stat(id: &str, order: i64) -> StatCard {
        StatCard {
            id: id.to_string(),
            order,
            ..StatCard::default()
        }
    }

    fn faq(id: &str, column: FaqColumn, order: i64) -> FaqItem {
        FaqItem {
            id: id.to_string(),
            column,
            order,
            ..FaqItem::default()
        }
    }

    fn ids<T: crate::model::entity::SubEntity>(items: &[T]) -> Vec<&str> {
        items.iter().map(|item| item.id()).collect()
    }

    #[test]
    fn order_by_is_stable_for_equal_orders() {
        let items = vec![stat("a", 2), stat("b", 1), stat("c", 2), stat("d", 1)];
        assert_eq!(ids(&order_by(&items)), ["b", "d", "a", "c"]);
    }

    #[test]
    fn order_by_is_idempotent() {
        let items = vec![stat("a", 3), stat("b", -1), stat("c", 3), stat("d", 0)];
        let once = order_by(&items);
        assert_eq!(order_by(&once), once);
    }

    #[test]
    fn partition_orders_each_column_independently() {
        let items = vec![
            faq("r2", FaqColumn::Right, 2),
            faq("l2", FaqColumn::Left, 2),
            faq("r1", FaqColumn::Right, 1),
            faq("l1", FaqColumn::Left, 1),
        ];
        let split = partition_by_column(&items);
        assert_eq!(ids(&split.left), ["l1", "l2"]);
        assert_eq!(ids(&split.right), ["r1", "r2"]);
    }

    #[test]
    fn next_order_counts_only_the_target_column() {
        let items = vec![
            faq("1", FaqColumn::Left, 1),
            faq("2", FaqColumn::Right, 1),
            faq("3", FaqColumn::Right, 2),
        ];
        assert_eq!(next_order(&items), 4);
        assert_eq!(next_order_in_column(&items, FaqColumn::Left), 2);
        assert_eq!(next_order_in_column(&items, FaqColumn::Right), 3);
    }

    #[test]
    fn position_of_maps_id_back_to_source_index() {
        let items = vec![stat("a", 3), stat("b", 1)];
        let sorted = order_by(&items);
        assert_eq!(position_of(&items, sorted[0].id.as_str()), Some(1));
        assert_eq!(position_of(&items, "missing"), None);
    }
}
