//! Dense, read-only adjacency index.

use super::{Graph, VertexId};
use crate::error::{CoverageError, Result};
use std::collections::HashMap;

/// Closed neighborhoods over dense positions `[0, n)`.
///
/// Positions are assigned in ascending vertex-id order, which fixes the
/// deterministic scan order of the greedy solver and the gene order of the
/// genetic solver. The index is immutable once built and is `Sync`, so one
/// instance can back several concurrent solver runs.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    ids: Vec<VertexId>,
    positions: HashMap<VertexId, usize>,
    /// `closed[p]` holds `p` and the positions of its neighbors, sorted.
    closed: Vec<Vec<usize>>,
}

impl AdjacencyIndex {
    /// Freezes `graph` into an index.
    pub fn new(graph: &Graph) -> Self {
        let mut ids: Vec<VertexId> = graph.vertices().collect();
        ids.sort_unstable();

        let positions: HashMap<VertexId, usize> =
            ids.iter().enumerate().map(|(p, &id)| (id, p)).collect();

        let closed = ids
            .iter()
            .enumerate()
            .map(|(p, &id)| {
                let mut hood = Vec::with_capacity(1 + graph.degree(id).unwrap_or(0));
                hood.push(p);
                if let Ok(nbrs) = graph.neighbors(id) {
                    hood.extend(nbrs.iter().filter_map(|v| positions.get(v).copied()));
                }
                hood.sort_unstable();
                hood
            })
            .collect();

        Self {
            ids,
            positions,
            closed,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the index has no vertices.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Vertex id at dense position `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= self.len()`.
    pub fn id(&self, pos: usize) -> VertexId {
        self.ids[pos]
    }

    /// All vertex ids in ascending order.
    pub fn ids(&self) -> &[VertexId] {
        &self.ids
    }

    /// Dense position of vertex `id`.
    pub fn position(&self, id: VertexId) -> Result<usize> {
        self.positions
            .get(&id)
            .copied()
            .ok_or(CoverageError::NotFound(id))
    }

    /// Closed neighborhood of position `pos`: itself plus its neighbors.
    pub fn closed(&self, pos: usize) -> &[usize] {
        &self.closed[pos]
    }

    /// Open neighborhood of position `pos`.
    pub fn neighbors(&self, pos: usize) -> impl Iterator<Item = usize> + '_ {
        self.closed[pos].iter().copied().filter(move |&q| q != pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_ascending_ids() {
        let g = Graph::from_edges([30, 10, 20], [(30, 10), (10, 20)]).unwrap();
        let index = AdjacencyIndex::new(&g);

        assert_eq!(index.ids(), &[10, 20, 30]);
        assert_eq!(index.position(30).unwrap(), 2);
        assert_eq!(index.id(1), 20);
        assert!(matches!(index.position(5), Err(CoverageError::NotFound(5))));
    }

    #[test]
    fn test_closed_neighborhood_contains_self() {
        let g = Graph::from_edges(0..4, [(0, 1), (0, 2), (0, 3)]).unwrap();
        let index = AdjacencyIndex::new(&g);

        assert_eq!(index.closed(0), &[0, 1, 2, 3]);
        assert_eq!(index.closed(2), &[0, 2]);
        assert_eq!(index.neighbors(0).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_isolated_vertex() {
        let g = Graph::from_edges([5], []).unwrap();
        let index = AdjacencyIndex::new(&g);
        assert_eq!(index.closed(0), &[0]);
        assert_eq!(index.neighbors(0).count(), 0);
    }
}
