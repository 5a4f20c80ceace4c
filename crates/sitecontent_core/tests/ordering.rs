use sitecontent_core::model::entity::{FaqColumn, FaqItem, SubEntity, Testimonial};
use sitecontent_core::ordering::{order_by, partition_by, partition_by_column, position_of};
use sitecontent_core::HomepageContent;

fn faq(id: &str, column: FaqColumn, order: i64) -> FaqItem {
    FaqItem {
        id: id.to_string(),
        question: format!("question {id}"),
        answer: String::new(),
        column,
        order,
    }
}

fn ids<T: SubEntity>(items: &[T]) -> Vec<&str> {
    items.iter().map(SubEntity::id).collect()
}

#[test]
fn new_left_item_with_highest_order_sorts_last_in_left_column() {
    let mut items = vec![
        faq("l2", FaqColumn::Left, 2),
        faq("r1", FaqColumn::Right, 1),
        faq("l1", FaqColumn::Left, 1),
        faq("r2", FaqColumn::Right, 2),
        faq("l3", FaqColumn::Left, 3),
    ];
    let before = partition_by_column(&items);

    items.push(faq("new", FaqColumn::Left, 9));
    let after = partition_by_column(&items);

    assert_eq!(ids(&after.left), vec!["l1", "l2", "l3", "new"]);
    assert_eq!(after.right, before.right);
}

#[test]
fn partition_places_every_item_exactly_once() {
    let items = HomepageContent::default().faq.items;
    let split = partition_by_column(&items);

    assert_eq!(split.left.len() + split.right.len(), items.len());
    for item in &items {
        let hits = split
            .left
            .iter()
            .chain(split.right.iter())
            .filter(|candidate| candidate.id == item.id)
            .count();
        assert_eq!(hits, 1, "item {} appears {hits} times", item.id);
    }
    assert!(split.left.iter().all(|item| item.column == FaqColumn::Left));
    assert!(split.right.iter().all(|item| item.column == FaqColumn::Right));
}

#[test]
fn generic_partition_sorts_each_side() {
    let quotes: Vec<Testimonial> = [("a", 3), ("b", 1), ("c", 2), ("d", 4)]
        .into_iter()
        .map(|(id, order)| Testimonial {
            id: id.to_string(),
            order,
            ..Testimonial::default()
        })
        .collect();

    let split = partition_by(&quotes, |quote| quote.order % 2 == 0);
    assert_eq!(ids(&split.left), vec!["c", "d"]);
    assert_eq!(ids(&split.right), vec!["b", "a"]);
}

#[test]
fn sorted_view_edits_map_back_by_id() {
    let items = vec![
        faq("x", FaqColumn::Left, 5),
        faq("y", FaqColumn::Left, 1),
    ];
    let view = order_by(&items);
    assert_eq!(ids(&view), vec!["y", "x"]);
    assert_eq!(position_of(&items, &view[0].id), Some(1));
    assert_eq!(position_of(&items, "missing"), None);
}

#[test]
fn order_by_keeps_source_order_for_duplicates_and_is_idempotent() {
    let items = vec![
        faq("first", FaqColumn::Right, 2),
        faq("second", FaqColumn::Right, 2),
        faq("zero", FaqColumn::Right, 0),
    ];
    let once = order_by(&items);
    assert_eq!(ids(&once), vec!["zero", "first", "second"]);
    assert_eq!(order_by(&once), once);
}
