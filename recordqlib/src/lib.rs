//! # recordqlib
//!
//! Filtering, grouping, sorting and aggregation queries over two in-memory
//! record collections: inventory items and service requests.
//!
//! ## Overview
//!
//! Every query is a pure function over a borrowed slice. Nothing is mutated,
//! nothing is cached, and an empty slice is a normal input: it yields `0`,
//! `0.0`, an empty string or an empty collection rather than an error.
//!
//! Two details matter wherever results are ordered or selected:
//!
//! - **Stable sorting**: records that compare equal on the sort key keep their
//!   input order
//! - **First-seen tie-break**: when groups tie on a total, the group whose key
//!   appears first in the input wins
//!
//! ## Pipeline
//!
//! - **source**: load a [`Dataset`] from JSON or use the built-in sample
//! - **query**: the inventory and traffic queries, plus named query dispatch
//! - **output**: format a [`QueryOutput`] as a [`QueryTable`]
//!
//! ## Example
//!
//! ```rust
//! use recordqlib::query::{inventory, traffic};
//! use recordqlib::{Dataset, Item};
//!
//! let data = Dataset::sample();
//! assert_eq!(inventory::type_with_lowest_total_durability(&data.items), "Armor");
//! assert_eq!(traffic::oldest_low_priority_request_ids(&data.requests, 2), vec![101, 104, 106]);
//!
//! let mut stack = traffic::debugging_stack(&data.requests, 4);
//! assert_eq!(stack.pop().as_deref(), Some("/data"));
//!
//! let items = vec![Item::new("A1", 10, "TypeA"), Item::new("B1", 10, "TypeB")];
//! assert_eq!(inventory::type_with_lowest_total_durability(&items), "TypeA");
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{Item, Request};
pub use error::RecordqError;
pub use output::QueryTable;
pub use query::{
    InventoryQuery, InventoryQueryKind, QueryOutput, QueryParams, TrafficQuery, TrafficQueryKind,
};
pub use source::Dataset;

/// Result type for recordqlib operations
pub type Result<T> = std::result::Result<T, RecordqError>;
