use super::items::{DraftItem, PositionedItem};
use crate::types::SidebarItem;
use std::cmp::Ordering;

/// Items with a position come first, in ascending order.
fn compare_positions(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort every sibling list by `(position, source)` and drop both keys.
///
/// Ordering is local to one folder: a position never moves an item out of
/// its own sibling list. The sort is stable, so items with identical keys
/// keep their generation order.
pub(crate) fn sort_items(items: Vec<PositionedItem>) -> Vec<SidebarItem> {
    let mut keyed: Vec<(Option<f64>, String, SidebarItem)> = items
        .into_iter()
        .map(|positioned| {
            let item = match positioned.item {
                DraftItem::Doc(doc) => SidebarItem::Doc(doc),
                DraftItem::Category(category) => {
                    SidebarItem::Category(category.map_items(sort_items))
                }
            };
            (positioned.position, positioned.source, item)
        })
        .collect();

    keyed.sort_by(|(pos_a, source_a, _), (pos_b, source_b, _)| {
        compare_positions(*pos_a, *pos_b).then_with(|| source_a.cmp(source_b))
    });

    keyed.into_iter().map(|(_, _, item)| item).collect()
}
