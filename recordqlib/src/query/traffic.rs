//! Service request queries over a slice of [`Request`]s.
//!
//! Besides scalar aggregates, this module builds the collection shapes a
//! request handler typically needs: an id lookup, the set of routes, a LIFO
//! stack for inspecting the most recent alerts first, and a FIFO queue for
//! processing in arrival order.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::data::request::Request;

use super::group::GroupTotals;

/// Routes in LIFO order: [`Vec::pop`] returns the most recent entry.
pub type RouteStack = Vec<String>;

/// Routes in FIFO order: [`VecDeque::pop_front`] returns the oldest entry.
pub type RouteQueue = VecDeque<String>;

/// Count requests with severity at or above `severity`.
pub fn count_high_severity_requests(requests: &[Request], severity: i32) -> usize {
    requests.iter().filter(|r| r.severity >= severity).count()
}

/// Ids of requests with severity at or below `threshold`, oldest first.
///
/// Requests logged at the same instant keep their input order.
pub fn oldest_low_priority_request_ids(requests: &[Request], threshold: i32) -> Vec<i32> {
    let mut low: Vec<&Request> = requests
        .iter()
        .filter(|r| r.severity <= threshold)
        .collect();
    low.sort_by_key(|r| r.timestamp);
    low.into_iter().map(|r| r.id).collect()
}

/// Mean severity of requests on `route`, or `0.0` when there are none.
pub fn average_severity_by_route(requests: &[Request], route: &str) -> f64 {
    let (sum, count) = requests
        .iter()
        .filter(|r| r.route == route)
        .fold((0i64, 0usize), |(sum, count), r| {
            (sum + i64::from(r.severity), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// The route with the highest combined severity.
///
/// On a tie the route seen first wins. Returns an empty string when there are
/// no requests.
pub fn route_with_highest_total_severity(requests: &[Request]) -> String {
    let groups = GroupTotals::collect(requests, |r| r.route.as_str(), |r| {
        i64::from(r.severity)
    });
    groups.max_key().unwrap_or_default().to_string()
}

/// Index requests by id. A repeated id keeps the last request with that id.
pub fn request_lookup(requests: &[Request]) -> HashMap<i32, Request> {
    requests.iter().map(|r| (r.id, r.clone())).collect()
}

/// The distinct route names.
pub fn unique_route_names(requests: &[Request]) -> HashSet<String> {
    requests.iter().map(|r| r.route.clone()).collect()
}

/// Routes of requests at or above `min_severity`, stacked so the last one in
/// input order pops first.
pub fn debugging_stack(requests: &[Request], min_severity: i32) -> RouteStack {
    requests
        .iter()
        .filter(|r| r.severity >= min_severity)
        .map(|r| r.route.clone())
        .collect()
}

/// Routes of requests at or below `max_severity`, queued in input order.
pub fn processing_queue(requests: &[Request], max_severity: i32) -> RouteQueue {
    requests
        .iter()
        .filter(|r| r.severity <= max_severity)
        .map(|r| r.route.clone())
        .collect()
}
