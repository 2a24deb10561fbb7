//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::GraphCache;
use crate::graph::Graph;
use crate::planner::QueryLimits;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Graph loaded at startup
    pub graph: Arc<Graph>,

    /// Graphs built from request edge lists
    pub cache: Arc<GraphCache>,

    /// Bounds accepted on walk-counting queries
    pub limits: Arc<QueryLimits>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: Graph, cache: GraphCache, limits: QueryLimits) -> Self {
        Self {
            graph: Arc::new(graph),
            cache: Arc::new(cache),
            limits: Arc::new(limits),
        }
    }
}
