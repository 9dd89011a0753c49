//! Structural statistics of a street graph.

use super::{AdjacencyIndex, Graph};
use serde::{Deserialize, Serialize};

/// Summary figures for an instance graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of vertices (intersections).
    pub vertex_count: usize,
    /// Number of undirected edges (street segments).
    pub edge_count: usize,
    /// Number of connected components. Isolated vertices count as one each.
    pub components: usize,
    /// `2m / (n (n - 1))`, or 0 for fewer than two vertices.
    pub density: f64,
    /// `2m / n`, or 0 for an empty graph.
    pub average_degree: f64,
}

impl GraphStats {
    /// Computes the statistics of `graph`.
    pub fn of(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let m = graph.edge_count();
        let index = AdjacencyIndex::new(graph);

        let density = if n < 2 {
            0.0
        } else {
            (2 * m) as f64 / (n * (n - 1)) as f64
        };
        let average_degree = if n == 0 { 0.0 } else { (2 * m) as f64 / n as f64 };

        Self {
            vertex_count: n,
            edge_count: m,
            components: count_components(&index),
            density,
            average_degree,
        }
    }
}

/// Iterative DFS component count.
fn count_components(index: &AdjacencyIndex) -> usize {
    let n = index.len();
    let mut seen = vec![false; n];
    let mut stack = Vec::new();
    let mut components = 0;

    for start in 0..n {
        if seen[start] {
            continue;
        }
        components += 1;
        seen[start] = true;
        stack.push(start);
        while let Some(p) = stack.pop() {
            for q in index.neighbors(p) {
                if !seen[q] {
                    seen[q] = true;
                    stack.push(q);
                }
            }
        }
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_triangles() {
        let g = Graph::from_edges(0..6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]).unwrap();
        let stats = GraphStats::of(&g);

        assert_eq!(stats.vertex_count, 6);
        assert_eq!(stats.edge_count, 6);
        assert_eq!(stats.components, 2);
        assert!((stats.density - 12.0 / 30.0).abs() < 1e-12);
        assert!((stats.average_degree - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_and_single() {
        let stats = GraphStats::of(&Graph::new());
        assert_eq!(stats.components, 0);
        assert_eq!(stats.density, 0.0);
        assert_eq!(stats.average_degree, 0.0);

        let stats = GraphStats::of(&Graph::from_edges([3], []).unwrap());
        assert_eq!(stats.components, 1);
        assert_eq!(stats.density, 0.0);
    }
}
