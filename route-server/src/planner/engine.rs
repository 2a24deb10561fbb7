//! Query dispatch and fixed-route distance.

use tracing::trace;

use super::budget::{Meter, Unmetered, VisitBudget};
use super::config::LimitError;
use super::query::Query;
use crate::graph::{Graph, VertexId};

/// Result returned when no route satisfies a query or an endpoint is unknown.
pub const NO_ROUTE: i64 = -1;

/// A query and the raw value it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub query: Query,
    pub value: i64,
}

/// Answers read-only queries against a built graph.
///
/// The engine only borrows the graph, so any number of engines may query the
/// same graph at once.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    pub(super) graph: &'a Graph,
}

impl<'a> QueryEngine<'a> {
    /// Create an engine over `graph`.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// The graph being queried.
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Answer a single query.
    pub fn answer(&self, query: &Query) -> i64 {
        let Ok(value) = self.answer_metered(query, &mut Unmetered);
        value
    }

    /// Answer a single query, spending from `budget` on every search step.
    ///
    /// Fails with [`LimitError::TooMuchWork`] once the budget is spent. The
    /// budget is not refunded, so passing the same one to several queries
    /// caps their combined work.
    pub fn try_answer(&self, query: &Query, budget: &mut VisitBudget) -> Result<i64, LimitError> {
        self.answer_metered(query, budget)
    }

    fn answer_metered<M: Meter>(&self, query: &Query, meter: &mut M) -> Result<i64, M::Error> {
        let value = match query {
            Query::Distance { route } => self.distance(route),
            Query::ShortestPath { from, to } => self.shortest_distance(from, to),
            Query::MaxStops {
                from,
                to,
                max_stops,
            } => self.metered_trips_with_max_stops(from, to, *max_stops, meter)?,
            Query::ExactStops { from, to, stops } => {
                self.metered_trips_with_exact_stops(from, to, *stops, meter)?
            }
            Query::MaxDistance {
                from,
                to,
                max_distance,
            } => self.metered_routes_with_max_distance(from, to, *max_distance, meter)?,
        };
        trace!(%query, value, "Answered query");
        Ok(value)
    }

    /// Answer each query in order.
    pub fn answer_all(&self, queries: &[Query]) -> Vec<QueryOutcome> {
        queries
            .iter()
            .map(|query| QueryOutcome {
                query: query.clone(),
                value: self.answer(query),
            })
            .collect()
    }

    /// Total weight along a fixed route of town names.
    ///
    /// Returns [`NO_ROUTE`] as soon as a name is unknown or two consecutive
    /// towns are not joined by an edge. A route with fewer than two names has
    /// no hops and a distance of 0.
    pub fn distance<S: AsRef<str>>(&self, route: &[S]) -> i64 {
        let mut total = 0i64;
        for pair in route.windows(2) {
            let hop = self
                .graph
                .lookup(pair[0].as_ref())
                .zip(self.graph.lookup(pair[1].as_ref()))
                .and_then(|(from, to)| self.graph.weight(from, to));

            match hop {
                Some(weight) => total += i64::from(weight),
                None => return NO_ROUTE,
            }
        }
        total
    }

    /// Resolve both endpoints of a query.
    pub(super) fn endpoints(&self, from: &str, to: &str) -> Option<(VertexId, VertexId)> {
        Some((self.graph.lookup(from)?, self.graph.lookup(to)?))
    }
}
