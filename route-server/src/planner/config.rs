//! Limits on query bounds accepted from untrusted callers.

use super::budget::VisitBudget;
use super::query::Query;

/// Error returned when a query's bound is outside the configured limits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitError {
    /// Stop bound above the configured maximum
    #[error("stop bound {requested} exceeds the limit of {limit}")]
    TooManyStops { requested: u32, limit: u32 },

    /// Distance bound above the configured maximum
    #[error("distance bound {requested} exceeds the limit of {limit}")]
    DistanceTooLarge { requested: u64, limit: u64 },

    /// Distance bound of zero
    #[error("distance bound must be positive")]
    ZeroDistance,

    /// Walk enumeration took more steps than allowed
    #[error("query needs more than {limit} search steps")]
    TooMuchWork { limit: u64 },
}

/// Ceilings on walk-counting queries.
///
/// Walk enumeration is exponential in the bound on graphs with cycles, so a
/// server checks incoming queries against the bound ceilings before running
/// them. The bounds alone do not cap the work on a dense graph, so the
/// queries of one request also share a [`VisitBudget`] of `max_visits`
/// search steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLimits {
    /// Largest accepted stop bound (maximum or exact).
    pub max_stops: u32,

    /// Largest accepted distance bound.
    pub max_distance: u64,

    /// Search steps one request may spend across all its queries.
    pub max_visits: u64,
}

impl QueryLimits {
    /// Create limits with the given ceilings.
    pub fn new(max_stops: u32, max_distance: u64, max_visits: u64) -> Self {
        Self {
            max_stops,
            max_distance,
            max_visits,
        }
    }

    /// A fresh step budget for one request.
    pub fn budget(&self) -> VisitBudget {
        VisitBudget::new(self.max_visits)
    }

    /// Check a query against the limits.
    pub fn check(&self, query: &Query) -> Result<(), LimitError> {
        match query {
            Query::MaxStops { max_stops: n, .. } | Query::ExactStops { stops: n, .. } => {
                if *n > self.max_stops {
                    return Err(LimitError::TooManyStops {
                        requested: *n,
                        limit: self.max_stops,
                    });
                }
            }
            Query::MaxDistance { max_distance, .. } => {
                if *max_distance == 0 {
                    return Err(LimitError::ZeroDistance);
                }
                if *max_distance > self.max_distance {
                    return Err(LimitError::DistanceTooLarge {
                        requested: *max_distance,
                        limit: self.max_distance,
                    });
                }
            }
            Query::Distance { .. } | Query::ShortestPath { .. } => {}
        }
        Ok(())
    }
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_stops: 12,
            max_distance: 200,
            max_visits: 1_000_000,
        }
    }
}
