//! Query descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A route query, tagged explicitly by kind.
///
/// The kind is never inferred from the size of a bound; a stop-count bound
/// and a distance bound are distinct variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    /// Total distance along a fixed sequence of towns.
    Distance { route: Vec<String> },

    /// Length of the shortest route between two towns.
    ShortestPath { from: String, to: String },

    /// Number of trips using at most `max_stops` stops.
    MaxStops {
        from: String,
        to: String,
        max_stops: u32,
    },

    /// Number of trips using exactly `stops` stops.
    ExactStops { from: String, to: String, stops: u32 },

    /// Number of routes shorter than `max_distance`.
    MaxDistance {
        from: String,
        to: String,
        max_distance: u64,
    },
}

impl Query {
    /// Distance query from the dashed textual form, e.g. `A-B-C`.
    pub fn distance(route: &str) -> Self {
        Query::Distance {
            route: parse_route(route),
        }
    }

    pub fn shortest_path(from: &str, to: &str) -> Self {
        Query::ShortestPath {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn max_stops(from: &str, to: &str, max_stops: u32) -> Self {
        Query::MaxStops {
            from: from.to_string(),
            to: to.to_string(),
            max_stops,
        }
    }

    pub fn exact_stops(from: &str, to: &str, stops: u32) -> Self {
        Query::ExactStops {
            from: from.to_string(),
            to: to.to_string(),
            stops,
        }
    }

    pub fn max_distance(from: &str, to: &str, max_distance: u64) -> Self {
        Query::MaxDistance {
            from: from.to_string(),
            to: to.to_string(),
            max_distance,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Distance { route } => write!(f, "distance of route {}", route.join("-")),
            Query::ShortestPath { from, to } => write!(f, "shortest route from {from} to {to}"),
            Query::MaxStops {
                from,
                to,
                max_stops,
            } => write!(f, "trips from {from} to {to} with at most {max_stops} stops"),
            Query::ExactStops { from, to, stops } => {
                write!(f, "trips from {from} to {to} with exactly {stops} stops")
            }
            Query::MaxDistance {
                from,
                to,
                max_distance,
            } => write!(
                f,
                "routes from {from} to {to} shorter than {max_distance}"
            ),
        }
    }
}

/// Split a dashed route such as `A-B-C` into town names.
///
/// Whitespace around each name is trimmed. The empty string is a single
/// (empty) name, which makes a zero-hop route.
pub fn parse_route(route: &str) -> Vec<String> {
    route.split('-').map(|s| s.trim().to_string()).collect()
}

/// The ten standard questions asked of every graph.
pub fn standard_queries() -> Vec<Query> {
    vec![
        Query::distance("A-B-C"),
        Query::distance("A-D"),
        Query::distance("A-D-C"),
        Query::distance("A-E-B-C-D"),
        Query::distance("A-E-D"),
        Query::max_stops("C", "C", 3),
        Query::exact_stops("A", "C", 4),
        Query::shortest_path("A", "C"),
        Query::shortest_path("B", "B"),
        Query::max_distance("C", "C", 30),
    ]
}
