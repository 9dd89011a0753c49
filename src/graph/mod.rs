//! Undirected street-network graph.
//!
//! [`Graph`] is the mutable model built from an instance. Before a solve it
//! is frozen into an [`AdjacencyIndex`], which assigns dense positions in
//! ascending id order and precomputes every closed neighborhood once. All
//! solver iterations read from the index; nothing recomputes neighbor sets
//! per candidate evaluation.
//!
//! # Key Types
//!
//! - [`Graph`]: vertices, undirected edges, neighbor lookup
//! - [`AdjacencyIndex`]: read-only dense adjacency shared by solvers
//! - [`GraphStats`]: component count, density and degree summary

mod adjacency;
mod stats;

pub use adjacency::AdjacencyIndex;
pub use stats::GraphStats;

use crate::error::{CoverageError, Result};
use std::collections::{BTreeSet, HashMap};

/// Vertex identifier.
pub type VertexId = u64;

/// An undirected, unweighted graph with integer vertex ids.
///
/// Ids need not be dense. Neighbor lookup is a hash probe followed by a
/// slot access, so it is O(1) amortized.
///
/// # Examples
///
/// ```
/// use u_coverage::graph::Graph;
///
/// let mut g = Graph::new();
/// for v in 0..3 {
///     g.add_vertex(v);
/// }
/// g.add_edge(0, 1).unwrap();
/// g.add_edge(1, 2).unwrap();
/// g.add_edge(2, 1).unwrap(); // already present
///
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.neighbors(1).unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    slots: HashMap<VertexId, usize>,
    ids: Vec<VertexId>,
    adjacency: Vec<BTreeSet<VertexId>>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a vertex list and an edge list.
    pub fn from_edges(
        vertices: impl IntoIterator<Item = VertexId>,
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v);
        }
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds a vertex. Re-adding an existing id has no effect.
    pub fn add_vertex(&mut self, id: VertexId) {
        if self.slots.contains_key(&id) {
            return;
        }
        self.slots.insert(id, self.ids.len());
        self.ids.push(id);
        self.adjacency.push(BTreeSet::new());
    }

    /// Adds the undirected edge `{u, v}`. Re-adding has no effect.
    ///
    /// # Errors
    /// - [`CoverageError::InvalidArgument`] if `u == v`
    /// - [`CoverageError::NotFound`] if either endpoint is absent
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        if u == v {
            return Err(CoverageError::invalid(format!(
                "self loop on vertex {u} is not a valid edge"
            )));
        }
        let su = self.slot(u)?;
        let sv = self.slot(v)?;
        if self.adjacency[su].insert(v) {
            self.adjacency[sv].insert(u);
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Returns the neighbors of `v` (excluding `v` itself).
    pub fn neighbors(&self, v: VertexId) -> Result<&BTreeSet<VertexId>> {
        let slot = self.slot(v)?;
        Ok(&self.adjacency[slot])
    }

    /// Whether `v` is a vertex of this graph.
    pub fn contains(&self, v: VertexId) -> bool {
        self.slots.contains_key(&v)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Vertex ids in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.ids.iter().copied()
    }

    /// Each undirected edge once, as `(smaller, larger)`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.ids
            .iter()
            .zip(self.adjacency.iter())
            .flat_map(|(&u, nbrs)| nbrs.iter().filter(move |&&v| u < v).map(move |&v| (u, v)))
    }

    /// Degree of `v`.
    pub fn degree(&self, v: VertexId) -> Result<usize> {
        self.neighbors(v).map(BTreeSet::len)
    }

    fn slot(&self, v: VertexId) -> Result<usize> {
        self.slots.get(&v).copied().ok_or(CoverageError::NotFound(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: u64) -> Graph {
        Graph::from_edges(0..n, (1..n).map(|v| (v - 1, v))).unwrap()
    }

    #[test]
    fn test_add_edge_idempotent() {
        let mut g = path(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 0).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(0).unwrap().iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut g = path(3);
        g.add_vertex(1);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.degree(1).unwrap(), 2);
    }

    #[test]
    fn test_neighbors_missing_vertex() {
        let g = path(3);
        assert!(matches!(g.neighbors(9), Err(CoverageError::NotFound(9))));
    }

    #[test]
    fn test_edge_to_missing_vertex() {
        let mut g = path(2);
        assert!(matches!(g.add_edge(0, 5), Err(CoverageError::NotFound(5))));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut g = path(2);
        assert!(matches!(
            g.add_edge(1, 1),
            Err(CoverageError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sparse_ids() {
        let g = Graph::from_edges([100, 7, 42], [(100, 7), (7, 42)]).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert!(g.contains(42));
        assert!(!g.contains(0));
        let mut edges: Vec<_> = g.edges().collect();
        edges.sort();
        assert_eq!(edges, vec![(7, 42), (7, 100)]);
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.edges().count(), 0);
    }
}
