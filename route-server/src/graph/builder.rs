//! Graph construction from edge tokens.

use tracing::debug;

use super::Graph;
use crate::domain::{EdgeToken, InvalidEdgeToken};

/// Builder that owns a graph while edges are being added.
///
/// The finished [`Graph`] has no public mutators, so once [`build`] returns
/// the graph is fixed.
///
/// [`build`]: GraphBuilder::build
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Create a builder for an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `token` strictly and add the edge it describes.
    pub fn add_edge(&mut self, token: &str) -> Result<&mut Self, InvalidEdgeToken> {
        let edge = EdgeToken::parse(token)?;
        Ok(self.add(edge))
    }

    /// Add an already-parsed edge.
    ///
    /// Both endpoints are created on first sight. Re-adding an edge between
    /// the same ordered pair overwrites the previous weight.
    pub fn add(&mut self, edge: EdgeToken) -> &mut Self {
        let from = self.graph.get_or_insert(edge.from);
        let to = self.graph.get_or_insert(edge.to);
        self.graph.set_edge(from, to, edge.weight);
        self
    }

    /// Finish building.
    pub fn build(self) -> Graph {
        debug!(
            towns = self.graph.len(),
            edges = self.graph.edge_count(),
            "Graph built"
        );
        self.graph
    }
}

/// Build a graph from a sequence of edge tokens.
///
/// Every token must be a valid [`EdgeToken`]; the first malformed token fails
/// the whole build. Use [`Graph::from_text`] for permissive extraction from
/// free-form text.
pub fn build_graph<I, S>(tokens: I) -> Result<Graph, InvalidEdgeToken>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GraphBuilder::new();
    for token in tokens {
        builder.add_edge(token.as_ref())?;
    }
    Ok(builder.build())
}
