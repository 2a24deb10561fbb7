//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::planner::{Query, QueryOutcome};
use crate::report::format_value;

/// Request to run queries.
#[derive(Debug, Default, Deserialize)]
pub struct QueryGraphRequest {
    /// Free-form edge list; the startup graph is used when absent
    pub edges: Option<String>,

    /// Queries to run; the standard set is used when absent
    pub queries: Option<Vec<Query>>,
}

/// Summary of a graph.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GraphSummary {
    /// Town names in insertion order
    pub towns: Vec<String>,

    /// Number of directed edges
    pub edges: usize,
}

impl GraphSummary {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            towns: graph.towns().map(|t| t.to_string()).collect(),
            edges: graph.edge_count(),
        }
    }
}

/// The answer to one query.
#[derive(Debug, Serialize)]
pub struct QueryResult {
    /// The query as received
    pub query: Query,

    /// Human-readable description of the query
    pub description: String,

    /// Raw value; -1 means no such route
    pub value: i64,

    /// Display form of the value
    pub output: String,
}

impl QueryResult {
    pub fn from_outcome(outcome: QueryOutcome) -> Self {
        Self {
            description: outcome.query.to_string(),
            output: format_value(outcome.value),
            value: outcome.value,
            query: outcome.query,
        }
    }
}

/// Response for a query run.
#[derive(Debug, Serialize)]
pub struct QueryGraphResponse {
    /// The graph the queries ran against
    pub graph: GraphSummary,

    /// One result per query, in request order
    pub results: Vec<QueryResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
