//! Weighted directed graph of towns.
//!
//! Vertices live in an arena and refer to each other by [`VertexId`], so
//! cycles between towns never involve owning pointers. A graph is built once
//! through [`GraphBuilder`] and is read-only afterwards.

mod builder;

use std::collections::HashMap;

use crate::domain::{Town, extract_edge_tokens};

pub use builder::{GraphBuilder, build_graph};

/// Stable index of a vertex within its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A town and its outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    town: Town,
    /// Outgoing edges in first-insertion order of the destination.
    adjacency: Vec<(VertexId, u32)>,
}

impl Vertex {
    fn new(town: Town) -> Self {
        Self {
            town,
            adjacency: Vec::new(),
        }
    }

    /// The town this vertex represents.
    pub fn town(&self) -> Town {
        self.town
    }

    /// Outgoing edges as `(destination, weight)` pairs.
    pub fn edges(&self) -> &[(VertexId, u32)] {
        &self.adjacency
    }

    /// Weight of the edge to `to`, if there is one.
    pub fn weight_to(&self, to: VertexId) -> Option<u32> {
        self.adjacency
            .iter()
            .find(|(dest, _)| *dest == to)
            .map(|(_, weight)| *weight)
    }
}

/// A mapping from town to vertex, plus the vertex arena.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<Town, VertexId>,
}

impl Graph {
    /// Build a graph from free-form text, ignoring anything that is not an
    /// edge token.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::graph::Graph;
    ///
    /// let graph = Graph::from_text("AB5, BC4, junk, AA3");
    /// assert_eq!(graph.len(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_text(text: &str) -> Self {
        let mut builder = GraphBuilder::new();
        for edge in extract_edge_tokens(text) {
            builder.add(edge);
        }
        builder.build()
    }

    /// Number of towns.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no towns.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.adjacency.len()).sum()
    }

    /// Look up a town by name. Unknown or malformed names yield `None`.
    pub fn lookup(&self, name: &str) -> Option<VertexId> {
        let town = Town::parse(name).ok()?;
        self.index.get(&town).copied()
    }

    /// Look up a vertex id by town.
    pub fn id_of(&self, town: Town) -> Option<VertexId> {
        self.index.get(&town).copied()
    }

    /// Access a vertex by id.
    ///
    /// Ids are only handed out by this graph, so they are always in range.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    /// Outgoing edges of `id` as `(destination, weight)` pairs.
    pub fn neighbours(&self, id: VertexId) -> &[(VertexId, u32)] {
        self.vertex(id).edges()
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<u32> {
        self.vertex(from).weight_to(to)
    }

    /// All vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    /// All towns in insertion order.
    pub fn towns(&self) -> impl Iterator<Item = Town> + '_ {
        self.vertices.iter().map(|v| v.town)
    }

    /// Find or create the vertex for `town`.
    fn get_or_insert(&mut self, town: Town) -> VertexId {
        if let Some(&id) = self.index.get(&town) {
            return id;
        }
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(town));
        self.index.insert(town, id);
        id
    }

    /// Set the weight of `from -> to`, overwriting any existing weight in
    /// place.
    fn set_edge(&mut self, from: VertexId, to: VertexId, weight: u32) {
        let adjacency = &mut self.vertices[from.0].adjacency;
        match adjacency.iter_mut().find(|(dest, _)| *dest == to) {
            Some(entry) => entry.1 = weight,
            None => adjacency.push((to, weight)),
        }
    }
}
