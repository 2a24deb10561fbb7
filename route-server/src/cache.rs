//! Caching layer for graphs built from request text.
//!
//! Callers of the HTTP API may send their own edge list with every request.
//! Graphs are cached by their canonical edge list (the extracted tokens in
//! order, comma-separated), so formatting differences in the request text do
//! not defeat the cache.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{EdgeToken, extract_edge_tokens};
use crate::graph::{Graph, GraphBuilder};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached graphs.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 100,
        }
    }
}

/// Cache of built graphs keyed by canonical edge list.
pub struct GraphCache {
    graphs: MokaCache<String, Arc<Graph>>,
}

impl GraphCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let graphs = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { graphs }
    }

    /// Get the graph for `text`, building it on a miss.
    pub async fn get_or_build(&self, text: &str) -> Arc<Graph> {
        let edges = extract_edge_tokens(text);
        let key = canonical_key(&edges);

        self.graphs
            .get_with(key, async move {
                debug!(edges = edges.len(), "Graph cache miss");
                let mut builder = GraphBuilder::new();
                for edge in edges {
                    builder.add(edge);
                }
                Arc::new(builder.build())
            })
            .await
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.graphs.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.graphs.invalidate_all();
    }
}

/// Canonical text of an edge list.
fn canonical_key(edges: &[EdgeToken]) -> String {
    edges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
