//! First-seen grouping.
//!
//! Both "lowest total" and "highest total" queries group records by a string
//! key and sum an integer per group. Groups are kept in the order their key
//! first appears in the input, so selecting the minimum or maximum can break
//! ties deterministically: the earliest group wins.

use std::collections::HashMap;

/// Per-key totals in first-seen key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTotals {
    /// Groups in the order their key first appeared
    totals: Vec<(String, i64)>,
    /// Key -> position in `totals`
    index: HashMap<String, usize>,
}

impl GroupTotals {
    /// Group `records` by `key` and sum `value` for each group.
    pub fn collect<'a, T, K, V>(records: &'a [T], key: K, value: V) -> Self
    where
        K: Fn(&'a T) -> &'a str,
        V: Fn(&T) -> i64,
    {
        let mut groups = Self::default();
        for record in records {
            let k = key(record);
            match groups.index.get(k) {
                Some(&pos) => groups.totals[pos].1 += value(record),
                None => {
                    groups.index.insert(k.to_string(), groups.totals.len());
                    groups.totals.push((k.to_string(), value(record)));
                }
            }
        }
        groups
    }

    /// Number of distinct groups.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Total for one group, if present.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.index.get(key).map(|&pos| self.totals[pos].1)
    }

    /// Iterate groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Key of the first group with the smallest total.
    pub fn min_key(&self) -> Option<&str> {
        let mut best: Option<(&str, i64)> = None;
        for (key, total) in self.iter() {
            // Strict comparison keeps the earlier group on ties.
            if best.map_or(true, |(_, b)| total < b) {
                best = Some((key, total));
            }
        }
        best.map(|(key, _)| key)
    }

    /// Key of the first group with the largest total.
    pub fn max_key(&self) -> Option<&str> {
        let mut best: Option<(&str, i64)> = None;
        for (key, total) in self.iter() {
            if best.map_or(true, |(_, b)| total > b) {
                best = Some((key, total));
            }
        }
        best.map(|(key, _)| key)
    }
}
