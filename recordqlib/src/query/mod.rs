//! Query processing: filter, group, sort and aggregate records.
//!
//! - **inventory**: queries over [`Item`](crate::data::Item) slices
//! - **traffic**: queries over [`Request`](crate::data::Request) slices
//! - **group**: first-seen grouping shared by the "lowest/highest total" queries
//! - **options**: named, parameterised queries (`InventoryQuery`, `TrafficQuery`)
//! - **queryset**: `QueryOutput`, the shape-tagged result of running a query
//!
//! ## Example
//!
//! ```rust
//! use recordqlib::query::{traffic, TrafficQuery, QueryOutput};
//! use recordqlib::Dataset;
//!
//! let data = Dataset::sample();
//! assert_eq!(traffic::route_with_highest_total_severity(&data.requests), "/data");
//!
//! let out = TrafficQuery::HighSeverity { severity: 4 }.run(&data.requests);
//! assert_eq!(out, QueryOutput::Count(3));
//! ```

pub mod group;
pub mod inventory;
pub mod options;
pub mod queryset;
pub mod traffic;

pub use group::GroupTotals;
pub use options::{InventoryQuery, InventoryQueryKind, QueryParams, TrafficQuery, TrafficQueryKind};
pub use queryset::QueryOutput;
pub use traffic::{RouteQueue, RouteStack};
