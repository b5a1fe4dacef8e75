//! Table-ready data for query answers and loaded records.
//!
//! `QueryTable` holds every cell already converted to a string, plus which
//! columns hold numbers. Templates decide how a table looks; nothing here
//! pads, aligns or styles.

use serde::{Deserialize, Serialize};

use crate::data::item::Item;
use crate::data::request::Request;
use crate::query::queryset::QueryOutput;

/// Table-ready output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTable {
    /// Title line (the query name, or the record kind)
    pub title: String,
    /// Column headers
    pub headers: Vec<String>,
    /// Whether each column holds numbers (and should be right-aligned)
    pub numeric: Vec<bool>,
    /// Data rows, one cell per header
    pub rows: Vec<Vec<String>>,
}

impl QueryTable {
    /// Format a query output under the given title.
    ///
    /// Stack rows are listed in pop order and queue rows in dequeue order, so
    /// the first row is always the next element retrieved.
    pub fn from_output(title: impl Into<String>, output: &QueryOutput) -> Self {
        let (columns, rows): (Vec<(&str, bool)>, Vec<Vec<String>>) = match output {
            QueryOutput::Count(n) => (vec![("Count", true)], vec![vec![n.to_string()]]),
            QueryOutput::Total(n) => (vec![("Total", true)], vec![vec![n.to_string()]]),
            QueryOutput::Average(v) => (vec![("Average", true)], vec![vec![format!("{:.4}", v)]]),
            QueryOutput::Label(s) => (vec![("Result", false)], vec![vec![s.clone()]]),
            QueryOutput::Names(names) => (vec![("#", true), ("Name", false)], numbered(names.iter())),
            QueryOutput::Ids(ids) => (vec![("#", true), ("Id", true)], numbered(ids.iter())),
            QueryOutput::Lookup(map) => (
                REQUEST_COLUMNS.to_vec(),
                map.values().map(request_row).collect(),
            ),
            QueryOutput::Routes(routes) => (
                vec![("Route", false)],
                routes.iter().map(|r| vec![r.clone()]).collect(),
            ),
            QueryOutput::Stack(stack) => (
                vec![("Pop", true), ("Route", false)],
                numbered(stack.iter().rev()),
            ),
            QueryOutput::Queue(queue) => (
                vec![("Dequeue", true), ("Route", false)],
                numbered(queue.iter()),
            ),
        };

        Self::build(title, &columns, rows)
    }

    /// One row per item, in input order.
    pub fn from_items(items: &[Item]) -> Self {
        let columns = [("Name", false), ("Durability", true), ("Type", false)];
        let rows = items
            .iter()
            .map(|i| vec![i.name.clone(), i.durability.to_string(), i.item_type.clone()])
            .collect();
        Self::build(format!("Items ({})", items.len()), &columns, rows)
    }

    /// One row per request, in input order.
    pub fn from_requests(requests: &[Request]) -> Self {
        let rows = requests.iter().map(request_row).collect();
        Self::build(
            format!("Requests ({})", requests.len()),
            &REQUEST_COLUMNS,
            rows,
        )
    }

    fn build(title: impl Into<String>, columns: &[(&str, bool)], rows: Vec<Vec<String>>) -> Self {
        QueryTable {
            title: title.into(),
            headers: columns.iter().map(|(h, _)| h.to_string()).collect(),
            numeric: columns.iter().map(|(_, n)| *n).collect(),
            rows,
        }
    }
}

const REQUEST_COLUMNS: [(&str, bool); 4] = [
    ("Id", true),
    ("Route", false),
    ("Severity", true),
    ("Timestamp", false),
];

fn request_row(r: &Request) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.route.clone(),
        r.severity.to_string(),
        r.timestamp.to_string(),
    ]
}

fn numbered<T: ToString>(values: impl Iterator<Item = T>) -> Vec<Vec<String>> {
    values
        .enumerate()
        .map(|(n, v)| vec![(n + 1).to_string(), v.to_string()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::dataset::Dataset;
    use std::collections::VecDeque;

    #[test]
    fn test_scalar_table() {
        let table = QueryTable::from_output("damaged", &QueryOutput::Count(3));
        assert_eq!(table.headers, vec!["Count"]);
        assert_eq!(table.numeric, vec![true]);
        assert_eq!(table.rows, vec![vec!["3".to_string()]]);
    }

    #[test]
    fn test_average_formatting() {
        let table = QueryTable::from_output("avg", &QueryOutput::Average(14.0 / 3.0));
        assert_eq!(table.rows[0][0], "4.6667");
    }

    #[test]
    fn test_number_like_labels_are_not_numeric_columns() {
        for label in ["inf", "NaN", "1e3", "42"] {
            let table = QueryTable::from_output("lowest-type", &QueryOutput::Label(label.into()));
            assert_eq!(table.numeric, vec![false]);
        }

        let routes = ["inf", "1e3"].iter().map(|s| s.to_string()).collect();
        let table = QueryTable::from_output("routes", &QueryOutput::Routes(routes));
        assert_eq!(table.numeric, vec![false]);
    }

    #[test]
    fn test_stack_rows_in_pop_order() {
        let stack = vec!["/first".to_string(), "/second".to_string(), "/third".to_string()];
        let table = QueryTable::from_output("stack", &QueryOutput::Stack(stack));
        let routes: Vec<&str> = table.rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(routes, vec!["/third", "/second", "/first"]);
        assert_eq!(table.rows[0][0], "1");
        assert_eq!(table.numeric, vec![true, false]);
    }

    #[test]
    fn test_queue_rows_in_dequeue_order() {
        let queue: VecDeque<String> = ["/a", "/b"].iter().map(|s| s.to_string()).collect();
        let table = QueryTable::from_output("queue", &QueryOutput::Queue(queue));
        let routes: Vec<&str> = table.rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(routes, vec!["/a", "/b"]);
    }

    #[test]
    fn test_empty_output_has_headers_and_no_rows() {
        let table = QueryTable::from_output("oldest", &QueryOutput::Ids(vec![]));
        assert_eq!(table.headers, vec!["#", "Id"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_record_tables() {
        let data = Dataset::sample();

        let items = QueryTable::from_items(&data.items);
        assert_eq!(items.title, "Items (5)");
        assert_eq!(items.rows[4], vec!["Leather Boots", "10", "Armor"]);

        let requests = QueryTable::from_requests(&data.requests);
        assert_eq!(requests.title, "Requests (6)");
        assert_eq!(requests.headers, vec!["Id", "Route", "Severity", "Timestamp"]);
        assert_eq!(
            requests.rows[0],
            vec!["101", "/status", "1", "2025-01-01 10:00:00"]
        );
    }
}
