//! Where edge-list text comes from.

use std::path::PathBuf;

use tracing::info;

use crate::graph::Graph;

/// Edge list used when no other data is supplied.
pub const DEFAULT_EDGES: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

/// Errors from reading edge-list text.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The data file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A source of raw edge-list text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The built-in [`DEFAULT_EDGES`].
    Default,
    /// A text file on disk.
    File(PathBuf),
    /// Text typed in by the user. Empty input falls back to the default.
    Inline(String),
}

impl DataSource {
    /// Read the raw edge-list text.
    pub async fn read(&self) -> Result<String, SourceError> {
        match self {
            DataSource::Default => Ok(DEFAULT_EDGES.to_string()),
            DataSource::Inline(text) if text.is_empty() => Ok(DEFAULT_EDGES.to_string()),
            DataSource::Inline(text) => Ok(text.clone()),
            DataSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| SourceError::Read {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }

    /// Read the text and build a graph from every edge token found in it.
    pub async fn load_graph(&self) -> Result<Graph, SourceError> {
        let text = self.read().await?;
        let graph = Graph::from_text(&text);
        info!(
            source = ?self,
            towns = graph.len(),
            edges = graph.edge_count(),
            "Loaded route graph"
        );
        Ok(graph)
    }
}

/// A choice from the console's data menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: use the built-in edge list.
    Default,
    /// `2`: read a file.
    File,
    /// `3`: type the edge list in.
    Manual,
}

impl MenuChoice {
    /// Parse a menu line. Anything other than `1`, `2` or `3` is `None`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(MenuChoice::Default),
            "2" => Some(MenuChoice::File),
            "3" => Some(MenuChoice::Manual),
            _ => None,
        }
    }
}
