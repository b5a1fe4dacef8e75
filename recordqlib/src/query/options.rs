//! Query selection: which query to run and with what parameter.
//!
//! Each query module has a kind enum naming its operations (parsed from the
//! command line with [`FromStr`]) and a query enum carrying the parameter the
//! operation needs. [`QueryParams`] holds whatever the caller supplied; a kind
//! turns it into a query or reports the missing parameter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RecordqError;

/// Raw parameters supplied alongside a query name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Numeric threshold or severity
    pub value: Option<i32>,
    /// Item type or route name
    pub text: Option<String>,
}

impl QueryParams {
    /// Create with no parameters set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the numeric parameter
    pub fn value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }

    /// Builder: set the text parameter
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    fn require_value(&self, query: impl fmt::Display) -> Result<i32, RecordqError> {
        self.value.ok_or_else(|| RecordqError::MissingParameter {
            query: query.to_string(),
            parameter: "value",
        })
    }

    fn require_text(
        &self,
        query: impl fmt::Display,
        parameter: &'static str,
    ) -> Result<String, RecordqError> {
        self.text
            .clone()
            .ok_or_else(|| RecordqError::MissingParameter {
                query: query.to_string(),
                parameter,
            })
    }
}

/// Inventory operations by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryQueryKind {
    /// Count items below a durability threshold
    Damaged,
    /// Names of items to repair, most worn first
    Repair,
    /// Total durability of one item type
    TotalByType,
    /// Item type with the lowest total durability
    LowestType,
}

impl InventoryQueryKind {
    /// All kinds, in the order they are listed in help output.
    pub const ALL: [InventoryQueryKind; 4] = [
        InventoryQueryKind::Damaged,
        InventoryQueryKind::Repair,
        InventoryQueryKind::TotalByType,
        InventoryQueryKind::LowestType,
    ];

    /// Canonical command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            InventoryQueryKind::Damaged => "damaged",
            InventoryQueryKind::Repair => "repair",
            InventoryQueryKind::TotalByType => "total-by-type",
            InventoryQueryKind::LowestType => "lowest-type",
        }
    }

    /// Attach parameters, failing if a required one is missing.
    pub fn with_params(self, params: &QueryParams) -> Result<InventoryQuery, RecordqError> {
        Ok(match self {
            InventoryQueryKind::Damaged => InventoryQuery::Damaged {
                threshold: params.require_value(self)?,
            },
            InventoryQueryKind::Repair => InventoryQuery::Repair {
                min_durability: params.require_value(self)?,
            },
            InventoryQueryKind::TotalByType => InventoryQuery::TotalByType {
                item_type: params.require_text(self, "type")?,
            },
            InventoryQueryKind::LowestType => InventoryQuery::LowestType,
        })
    }
}

impl fmt::Display for InventoryQueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InventoryQueryKind {
    type Err = RecordqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "damaged" | "count-damaged" => Ok(InventoryQueryKind::Damaged),
            "repair" | "to-repair" => Ok(InventoryQueryKind::Repair),
            "total-by-type" | "total" => Ok(InventoryQueryKind::TotalByType),
            "lowest-type" | "lowest" => Ok(InventoryQueryKind::LowestType),
            _ => Err(RecordqError::UnknownQuery {
                kind: "inventory",
                name: s.to_string(),
            }),
        }
    }
}

/// A fully parameterised inventory query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryQuery {
    Damaged { threshold: i32 },
    Repair { min_durability: i32 },
    TotalByType { item_type: String },
    LowestType,
}

/// Service request operations by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficQueryKind {
    /// Count requests at or above a severity
    HighSeverity,
    /// Ids of low-severity requests, oldest first
    OldestLow,
    /// Average severity on one route
    AverageByRoute,
    /// Route with the highest total severity
    HighestRoute,
    /// Requests indexed by id
    Lookup,
    /// Distinct route names
    Routes,
    /// LIFO stack of high-severity routes
    Stack,
    /// FIFO queue of low-severity routes
    Queue,
}

impl TrafficQueryKind {
    /// All kinds, in the order they are listed in help output.
    pub const ALL: [TrafficQueryKind; 8] = [
        TrafficQueryKind::HighSeverity,
        TrafficQueryKind::OldestLow,
        TrafficQueryKind::AverageByRoute,
        TrafficQueryKind::HighestRoute,
        TrafficQueryKind::Lookup,
        TrafficQueryKind::Routes,
        TrafficQueryKind::Stack,
        TrafficQueryKind::Queue,
    ];

    /// Canonical command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            TrafficQueryKind::HighSeverity => "high-severity",
            TrafficQueryKind::OldestLow => "oldest-low",
            TrafficQueryKind::AverageByRoute => "average-by-route",
            TrafficQueryKind::HighestRoute => "highest-route",
            TrafficQueryKind::Lookup => "lookup",
            TrafficQueryKind::Routes => "routes",
            TrafficQueryKind::Stack => "stack",
            TrafficQueryKind::Queue => "queue",
        }
    }

    /// Attach parameters, failing if a required one is missing.
    pub fn with_params(self, params: &QueryParams) -> Result<TrafficQuery, RecordqError> {
        Ok(match self {
            TrafficQueryKind::HighSeverity => TrafficQuery::HighSeverity {
                severity: params.require_value(self)?,
            },
            TrafficQueryKind::OldestLow => TrafficQuery::OldestLow {
                threshold: params.require_value(self)?,
            },
            TrafficQueryKind::AverageByRoute => TrafficQuery::AverageByRoute {
                route: params.require_text(self, "route")?,
            },
            TrafficQueryKind::HighestRoute => TrafficQuery::HighestRoute,
            TrafficQueryKind::Lookup => TrafficQuery::Lookup,
            TrafficQueryKind::Routes => TrafficQuery::Routes,
            TrafficQueryKind::Stack => TrafficQuery::Stack {
                min_severity: params.require_value(self)?,
            },
            TrafficQueryKind::Queue => TrafficQuery::Queue {
                max_severity: params.require_value(self)?,
            },
        })
    }
}

impl fmt::Display for TrafficQueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrafficQueryKind {
    type Err = RecordqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high-severity" | "high" => Ok(TrafficQueryKind::HighSeverity),
            "oldest-low" | "oldest" => Ok(TrafficQueryKind::OldestLow),
            "average-by-route" | "average" | "avg" => Ok(TrafficQueryKind::AverageByRoute),
            "highest-route" | "highest" => Ok(TrafficQueryKind::HighestRoute),
            "lookup" => Ok(TrafficQueryKind::Lookup),
            "routes" | "unique-routes" => Ok(TrafficQueryKind::Routes),
            "stack" | "debugging-stack" => Ok(TrafficQueryKind::Stack),
            "queue" | "processing-queue" => Ok(TrafficQueryKind::Queue),
            _ => Err(RecordqError::UnknownQuery {
                kind: "traffic",
                name: s.to_string(),
            }),
        }
    }
}

/// A fully parameterised service request query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficQuery {
    HighSeverity { severity: i32 },
    OldestLow { threshold: i32 },
    AverageByRoute { route: String },
    HighestRoute,
    Lookup,
    Routes,
    Stack { min_severity: i32 },
    Queue { max_severity: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_kind_from_str() {
        assert_eq!(
            InventoryQueryKind::from_str("damaged").unwrap(),
            InventoryQueryKind::Damaged
        );
        assert_eq!(
            InventoryQueryKind::from_str("LOWEST").unwrap(),
            InventoryQueryKind::LowestType
        );
        assert!(InventoryQueryKind::from_str("stack").is_err());
    }

    #[test]
    fn test_traffic_kind_from_str() {
        assert_eq!(
            TrafficQueryKind::from_str("avg").unwrap(),
            TrafficQueryKind::AverageByRoute
        );
        assert_eq!(
            TrafficQueryKind::from_str("processing-queue").unwrap(),
            TrafficQueryKind::Queue
        );
        assert!(TrafficQueryKind::from_str("repair").is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for kind in InventoryQueryKind::ALL {
            assert_eq!(InventoryQueryKind::from_str(kind.name()).unwrap(), kind);
        }
        for kind in TrafficQueryKind::ALL {
            assert_eq!(TrafficQueryKind::from_str(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn test_with_params() {
        let params = QueryParams::new().value(50);
        assert_eq!(
            InventoryQueryKind::Damaged.with_params(&params).unwrap(),
            InventoryQuery::Damaged { threshold: 50 }
        );

        let params = QueryParams::new().text("/data");
        assert_eq!(
            TrafficQueryKind::AverageByRoute.with_params(&params).unwrap(),
            TrafficQuery::AverageByRoute {
                route: "/data".to_string()
            }
        );
    }

    #[test]
    fn test_with_params_missing() {
        let err = TrafficQueryKind::Stack
            .with_params(&QueryParams::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "query 'stack' requires --value");

        let err = InventoryQueryKind::TotalByType
            .with_params(&QueryParams::new().value(3))
            .unwrap_err();
        assert_eq!(err.to_string(), "query 'total-by-type' requires --type");
    }

    #[test]
    fn test_parameterless_queries_ignore_params() {
        assert_eq!(
            InventoryQueryKind::LowestType
                .with_params(&QueryParams::new())
                .unwrap(),
            InventoryQuery::LowestType
        );
        assert_eq!(
            TrafficQueryKind::Routes
                .with_params(&QueryParams::new().value(1))
                .unwrap(),
            TrafficQuery::Routes
        );
    }
}
