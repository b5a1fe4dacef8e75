//! Query output: the result of running a named query.
//!
//! A `QueryOutput` sits between the raw query functions and the final table.
//! It records which shape of answer a query produced so the presentation
//! layer can format it without knowing which query ran.
//!
//! Unordered results (the id lookup and the route set) are stored in sorted
//! containers here so that rendered and serialized output is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::data::item::Item;
use crate::data::request::Request;

use super::inventory;
use super::options::{InventoryQuery, TrafficQuery};
use super::traffic::{self, RouteQueue, RouteStack};

/// One query answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QueryOutput {
    /// Number of matching records
    Count(usize),
    /// Summed field
    Total(i64),
    /// Mean of a field (0.0 when nothing matched)
    Average(f64),
    /// A single group key (empty when there were no records)
    Label(String),
    /// Item names in result order
    Names(Vec<String>),
    /// Request ids in result order
    Ids(Vec<i32>),
    /// Requests keyed by id
    Lookup(BTreeMap<i32, Request>),
    /// Distinct route names
    Routes(BTreeSet<String>),
    /// Routes bottom-to-top; the last element pops first
    Stack(RouteStack),
    /// Routes front-to-back; the first element dequeues first
    Queue(RouteQueue),
}

impl QueryOutput {
    /// Number of rows this output renders as.
    pub fn len(&self) -> usize {
        match self {
            QueryOutput::Count(_)
            | QueryOutput::Total(_)
            | QueryOutput::Average(_)
            | QueryOutput::Label(_) => 1,
            QueryOutput::Names(v) => v.len(),
            QueryOutput::Ids(v) => v.len(),
            QueryOutput::Lookup(m) => m.len(),
            QueryOutput::Routes(s) => s.len(),
            QueryOutput::Stack(s) => s.len(),
            QueryOutput::Queue(q) => q.len(),
        }
    }

    /// True for a collection output with no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl InventoryQuery {
    /// Run this query against `items`.
    pub fn run(&self, items: &[Item]) -> QueryOutput {
        tracing::debug!(query = ?self, items = items.len(), "running inventory query");
        match self {
            InventoryQuery::Damaged { threshold } => {
                QueryOutput::Count(inventory::count_damaged_items(items, *threshold))
            }
            InventoryQuery::Repair { min_durability } => {
                QueryOutput::Names(inventory::names_of_items_to_repair(items, *min_durability))
            }
            InventoryQuery::TotalByType { item_type } => {
                QueryOutput::Total(inventory::total_durability_by_type(items, item_type))
            }
            InventoryQuery::LowestType => {
                QueryOutput::Label(inventory::type_with_lowest_total_durability(items))
            }
        }
    }
}

impl TrafficQuery {
    /// Run this query against `requests`.
    pub fn run(&self, requests: &[Request]) -> QueryOutput {
        tracing::debug!(query = ?self, requests = requests.len(), "running traffic query");
        match self {
            TrafficQuery::HighSeverity { severity } => {
                QueryOutput::Count(traffic::count_high_severity_requests(requests, *severity))
            }
            TrafficQuery::OldestLow { threshold } => QueryOutput::Ids(
                traffic::oldest_low_priority_request_ids(requests, *threshold),
            ),
            TrafficQuery::AverageByRoute { route } => {
                QueryOutput::Average(traffic::average_severity_by_route(requests, route))
            }
            TrafficQuery::HighestRoute => {
                QueryOutput::Label(traffic::route_with_highest_total_severity(requests))
            }
            TrafficQuery::Lookup => {
                QueryOutput::Lookup(traffic::request_lookup(requests).into_iter().collect())
            }
            TrafficQuery::Routes => {
                QueryOutput::Routes(traffic::unique_route_names(requests).into_iter().collect())
            }
            TrafficQuery::Stack { min_severity } => {
                QueryOutput::Stack(traffic::debugging_stack(requests, *min_severity))
            }
            TrafficQuery::Queue { max_severity } => {
                QueryOutput::Queue(traffic::processing_queue(requests, *max_severity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::dataset::Dataset;

    #[test]
    fn test_inventory_dispatch() {
        let data = Dataset::sample();
        assert_eq!(
            InventoryQuery::Damaged { threshold: 90 }.run(&data.items),
            QueryOutput::Count(3)
        );
        assert_eq!(
            InventoryQuery::TotalByType {
                item_type: "Weapon".to_string()
            }
            .run(&data.items),
            QueryOutput::Total(270)
        );
        assert_eq!(
            InventoryQuery::LowestType.run(&data.items),
            QueryOutput::Label("Armor".to_string())
        );
    }

    #[test]
    fn test_traffic_dispatch() {
        let data = Dataset::sample();
        assert_eq!(
            TrafficQuery::OldestLow { threshold: 2 }.run(&data.requests),
            QueryOutput::Ids(vec![101, 104, 106])
        );
        assert_eq!(
            TrafficQuery::HighestRoute.run(&data.requests),
            QueryOutput::Label("/data".to_string())
        );

        match TrafficQuery::Lookup.run(&data.requests) {
            QueryOutput::Lookup(map) => {
                let ids: Vec<i32> = map.keys().copied().collect();
                assert_eq!(ids, vec![101, 102, 103, 104, 105, 106]);
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_routes_are_sorted() {
        let data = Dataset::sample();
        let out = TrafficQuery::Routes.run(&data.requests);
        match out {
            QueryOutput::Routes(set) => {
                let routes: Vec<&str> = set.iter().map(|s| s.as_str()).collect();
                assert_eq!(routes, vec!["/data", "/home", "/status"]);
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_len() {
        assert_eq!(QueryOutput::Label(String::new()).len(), 1);
        assert!(QueryOutput::Ids(vec![]).is_empty());
        assert_eq!(QueryOutput::Stack(vec!["/a".into(), "/b".into()]).len(), 2);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(QueryOutput::Count(3)).unwrap();
        assert_eq!(json["kind"], "count");
        assert_eq!(json["value"], 3);
    }
}
