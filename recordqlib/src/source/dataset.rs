//! Dataset loading.
//!
//! A dataset is a JSON document with two required arrays:
//!
//! ```json
//! {
//!   "items": [{ "name": "Bow", "durability": 90, "type": "Weapon" }],
//!   "requests": [{ "id": 101, "route": "/status", "severity": 1, "timestamp": "2025-01-01T10:00:00" }]
//! }
//! ```
//!
//! Either array may be empty, but neither may be missing or `null`: an absent
//! collection is malformed input, not an empty one.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::item::Item;
use crate::data::request::Request;
use crate::error::RecordqError;
use crate::Result;

/// The two record collections queries run against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    /// Inventory items, in input order
    pub items: Vec<Item>,
    /// Service requests, in input order
    pub requests: Vec<Request>,
}

impl Dataset {
    /// Create a dataset from owned collections.
    pub fn new(items: Vec<Item>, requests: Vec<Request>) -> Self {
        Self { items, requests }
    }

    /// The built-in sample collections.
    ///
    /// Five items across two types (Weapon totals 270, Armor totals 40) and six
    /// requests with ids 101–106 logged five minutes apart.
    pub fn sample() -> Self {
        let items = vec![
            Item::new("Iron Sword", 100, "Weapon"),
            Item::new("Iron Axe", 80, "Weapon"),
            Item::new("Bow", 90, "Weapon"),
            Item::new("Wooden Shield", 30, "Armor"),
            Item::new("Leather Boots", 10, "Armor"),
        ];

        let requests = [
            (101, "/status", 1),
            (102, "/data", 5),
            (103, "/data", 4),
            (104, "/status", 2),
            (105, "/data", 5),
            (106, "/home", 1),
        ]
        .into_iter()
        .enumerate()
        .map(|(n, (id, route, severity))| {
            Request::new(id, route, severity, sample_start() + Duration::minutes(5 * n as i64))
        })
        .collect();

        Self { items, requests }
    }

    /// Parse a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        tracing::debug!(
            items = dataset.items.len(),
            requests = dataset.requests.len(),
            "parsed dataset"
        );
        Ok(dataset)
    }

    /// Read and parse a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RecordqError::PathNotFound(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), "loading dataset");
        let contents = std::fs::read_to_string(path).map_err(|source| RecordqError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Serialize as pretty-printed JSON (the format `from_json_str` reads).
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 2025-01-01 10:00:00, the first sample request.
fn sample_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .unwrap_or_default()
}
