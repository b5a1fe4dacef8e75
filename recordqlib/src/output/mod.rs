//! Output formatting: present query results as tables.
//!
//! This module handles the last stage of the pipeline - turning a
//! [`QueryOutput`](crate::query::QueryOutput), or a dataset's records, into a
//! `QueryTable`: a title, headers and string rows that a template can lay out
//! or that can be serialized to JSON as-is.
//!
//! ## Example
//!
//! ```rust
//! use recordqlib::output::QueryTable;
//! use recordqlib::query::QueryOutput;
//!
//! let table = QueryTable::from_output("damaged", &QueryOutput::Count(3));
//! assert_eq!(table.headers, vec!["Count"]);
//! assert_eq!(table.rows, vec![vec!["3".to_string()]]);
//! ```

pub mod table;

pub use table::QueryTable;
