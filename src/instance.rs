//! Street-network instance records.
//!
//! Instances are produced by the map extraction tooling as JSON:
//!
//! ```json
//! {
//!   "nodes": [{ "id": 0, "lat": -13.01, "lon": -38.51 }],
//!   "edges": [{ "source": 0, "target": 1, "weight": 42.5, "name": "Rua A" }],
//!   "metadata": { "name": "Ondina", "source": "OpenStreetMap" }
//! }
//! ```
//!
//! Only node ids and edge endpoints matter for coverage. Coordinates,
//! lengths and street names are kept for statistics.

use crate::error::{CoverageError, Result};
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// An intersection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: VertexId,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
}

/// Street name of a segment; merged OSM ways carry several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreetName {
    Single(String),
    Many(Vec<String>),
}

impl StreetName {
    /// Non-empty names, in order.
    pub fn names(&self) -> Vec<&str> {
        let names: Vec<&str> = match self {
            StreetName::Single(name) => vec![name.as_str()],
            StreetName::Many(names) => names.iter().map(String::as_str).collect(),
        };
        names.into_iter().filter(|n| !n.is_empty()).collect()
    }
}

/// A street segment between two intersections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: VertexId,
    pub target: VertexId,
    /// Segment length in metres.
    #[serde(default)]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<StreetName>,
}

/// Descriptive instance metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
}

/// A complete street-network instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Instance {
    /// Parses an instance from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses an instance file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let instance = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        log::info!(
            "loaded instance {}: {} nodes, {} edges",
            path.display(),
            instance.nodes.len(),
            instance.edges.len()
        );
        Ok(instance)
    }

    /// Builds the coverage graph: every node, then every edge.
    ///
    /// Parallel segments collapse into one edge. Segments that start and
    /// end at the same intersection carry no adjacency and are skipped.
    ///
    /// # Errors
    /// [`CoverageError::NotFound`] if an edge endpoint is not a node.
    pub fn to_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        for node in &self.nodes {
            graph.add_vertex(node.id);
        }
        let mut loops = 0usize;
        for edge in &self.edges {
            match graph.add_edge(edge.source, edge.target) {
                Ok(()) => {}
                Err(CoverageError::InvalidArgument(_)) => loops += 1,
                Err(e) => return Err(e),
            }
        }
        if loops > 0 {
            log::debug!("skipped {loops} self-loop segments");
        }
        Ok(graph)
    }

    /// Total street length in metres.
    pub fn total_length(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// The `k` street names with the most segments, most frequent first.
    ///
    /// Ties are ordered by name.
    pub fn top_streets(&self, k: usize) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for name in self.edges.iter().filter_map(|e| e.name.as_ref()) {
            for n in name.names() {
                *counts.entry(n).or_insert(0) += 1;
            }
        }
        let mut ranked: Vec<(String, usize)> =
            counts.into_iter().map(|(n, c)| (n.to_string(), c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked
    }
}
