//! Service request record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A logged service request.
///
/// `severity` runs from 1 (low) to 5 (critical) by convention; the range is
/// not enforced. `id` is expected to be unique within a collection and is the
/// key used by [`request_lookup`](crate::query::traffic::request_lookup).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Request {
    /// Request identifier
    pub id: i32,
    /// Endpoint the request was made against (e.g. "/status")
    pub route: String,
    /// Severity of the request or its alert
    pub severity: i32,
    /// When the request was logged
    pub timestamp: NaiveDateTime,
}

impl Request {
    /// Create a new request.
    pub fn new(id: i32, route: impl Into<String>, severity: i32, timestamp: NaiveDateTime) -> Self {
        Self {
            id,
            route: route.into(),
            severity,
            timestamp,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ID:{}] {} (Severity: {})",
            self.id, self.route, self.severity
        )
    }
}
