//! Domain types for the route query service.
//!
//! This module contains the validated building blocks of a route graph.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod edge;
mod town;

pub use edge::{EdgeToken, InvalidEdgeToken, extract_edge_tokens};
pub use town::{InvalidTown, Town};
