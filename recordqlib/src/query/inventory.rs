//! Inventory queries over a slice of [`Item`]s.
//!
//! Every function is total: an empty slice, or one where nothing matches,
//! yields `0`, an empty `Vec`, or an empty `String`.

use crate::data::item::Item;

use super::group::GroupTotals;

/// Count items whose durability is strictly below `threshold`.
pub fn count_damaged_items(items: &[Item], threshold: i32) -> usize {
    items.iter().filter(|i| i.durability < threshold).count()
}

/// Names of items with durability below `min_durability`, most worn first.
///
/// Items of equal durability keep their input order.
pub fn names_of_items_to_repair(items: &[Item], min_durability: i32) -> Vec<String> {
    let mut worn: Vec<&Item> = items
        .iter()
        .filter(|i| i.durability < min_durability)
        .collect();

    // sort_by_key is stable
    worn.sort_by_key(|i| i.durability);

    worn.into_iter().map(|i| i.name.clone()).collect()
}

/// Sum of durability over items of exactly `item_type` (case-sensitive).
pub fn total_durability_by_type(items: &[Item], item_type: &str) -> i64 {
    items
        .iter()
        .filter(|i| i.item_type == item_type)
        .map(|i| i64::from(i.durability))
        .sum()
}

/// The item type with the lowest combined durability.
///
/// On a tie the type seen first in `items` wins. Returns an empty string for
/// an empty inventory.
pub fn type_with_lowest_total_durability(items: &[Item]) -> String {
    let groups = GroupTotals::collect(items, |i| i.item_type.as_str(), |i| {
        i64::from(i.durability)
    });
    groups.min_key().unwrap_or_default().to_string()
}
