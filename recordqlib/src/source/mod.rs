//! Source loading: get records into memory.
//!
//! This module handles the first stage of the pipeline - producing the
//! collections queries run against, either from a JSON file or from the
//! built-in sample data.
//!
//! ## Example
//!
//! ```rust
//! use recordqlib::source::Dataset;
//!
//! let data = Dataset::from_json_str(r#"{"items": [], "requests": []}"#).unwrap();
//! assert!(data.items.is_empty());
//!
//! let sample = Dataset::sample();
//! assert_eq!(sample.requests.len(), 6);
//! ```

pub mod dataset;

pub use dataset::Dataset;
