//! Route query engine.
//!
//! This module answers questions about a fixed graph of towns: the distance
//! along a given route, the shortest route between two towns, and how many
//! walks fit within a stop-count or distance bound.
//!
//! Every query returns a raw integer. [`NO_ROUTE`] (-1) marks "no such
//! route" or an unknown town, except for maximum-stop counts, which report an
//! unknown town as 0.
//!
//! Walk counting is exponential on dense graphs. [`QueryEngine::try_answer`]
//! runs a query against a [`VisitBudget`] and gives up once it is spent.

mod budget;
mod config;
mod engine;
mod query;
mod shortest;
mod walks;


pub use budget::{Meter, Unmetered, VisitBudget};
pub use config::{LimitError, QueryLimits};
pub use engine::{NO_ROUTE, QueryEngine, QueryOutcome};
pub use query::{Query, parse_route, standard_queries};
