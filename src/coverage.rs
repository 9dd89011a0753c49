//! Selections and closed-neighborhood coverage.
//!
//! A camera placed on vertex `v` covers `v` and every vertex adjacent to
//! it. For a selection `S`:
//!
//! ```text
//! cover(S) = S ∪ ⋃_{v ∈ S} neighbors(v)
//! ```
//!
//! `cover(∅) = ∅` and `cover` is monotone under set inclusion. Both solver
//! families evaluate coverage through this module, either on id sets
//! ([`cover`]) or on dense binary masks over an [`AdjacencyIndex`]
//! ([`covered_count`], [`uncovered_count`], [`CoverageState`]).

use crate::error::{CoverageError, Result};
use crate::graph::{AdjacencyIndex, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of selected facility ("camera") vertices.
///
/// Iterates in ascending id order. Interconvertible with a binary mask over
/// the positions of an [`AdjacencyIndex`] via [`to_mask`](Self::to_mask)
/// and [`from_mask`](Self::from_mask).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: BTreeSet<VertexId>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id`. Returns `false` if it was already selected.
    pub fn insert(&mut self, id: VertexId) -> bool {
        self.ids.insert(id)
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: VertexId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of selected vertices.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.ids.iter().copied()
    }

    /// Whether every vertex of `self` is also in `other`.
    pub fn is_subset(&self, other: &Selection) -> bool {
        self.ids.is_subset(&other.ids)
    }

    /// Converts to a binary mask indexed by dense position.
    ///
    /// # Errors
    /// [`CoverageError::NotFound`] if a selected id is not in `index`.
    pub fn to_mask(&self, index: &AdjacencyIndex) -> Result<Vec<bool>> {
        let mut mask = vec![false; index.len()];
        for id in self.iter() {
            mask[index.position(id)?] = true;
        }
        Ok(mask)
    }

    /// Builds a selection from a binary mask indexed by dense position.
    ///
    /// # Errors
    /// [`CoverageError::InvalidArgument`] if the mask length differs from
    /// the vertex count.
    pub fn from_mask(index: &AdjacencyIndex, mask: &[bool]) -> Result<Self> {
        if mask.len() != index.len() {
            return Err(CoverageError::invalid(format!(
                "mask has {} genes but the graph has {} vertices",
                mask.len(),
                index.len()
            )));
        }
        Ok(mask
            .iter()
            .enumerate()
            .filter(|(_, &on)| on)
            .map(|(p, _)| index.id(p))
            .collect())
    }
}

impl FromIterator<VertexId> for Selection {
    fn from_iter<T: IntoIterator<Item = VertexId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<VertexId> for Selection {
    fn extend<T: IntoIterator<Item = VertexId>>(&mut self, iter: T) {
        self.ids.extend(iter);
    }
}

/// Closed coverage of `selection` in `graph`.
///
/// # Errors
/// [`CoverageError::NotFound`] if a selected vertex is absent from `graph`.
pub fn cover(graph: &Graph, selection: &Selection) -> Result<BTreeSet<VertexId>> {
    let mut covered = BTreeSet::new();
    for v in selection.iter() {
        covered.extend(graph.neighbors(v)?.iter().copied());
        covered.insert(v);
    }
    Ok(covered)
}

/// Marks every position covered by the selected positions of `mask`.
pub fn covered_mask(index: &AdjacencyIndex, mask: &[bool]) -> Vec<bool> {
    let mut covered = vec![false; index.len()];
    for p in mask.iter().enumerate().filter(|(_, &on)| on).map(|(p, _)| p) {
        for &q in index.closed(p) {
            covered[q] = true;
        }
    }
    covered
}

/// `|cover(mask)|`.
pub fn covered_count(index: &AdjacencyIndex, mask: &[bool]) -> usize {
    covered_mask(index, mask).iter().filter(|&&c| c).count()
}

/// Number of vertices with no selected vertex in their closed neighborhood.
pub fn uncovered_count(index: &AdjacencyIndex, mask: &[bool]) -> usize {
    (0..index.len())
        .filter(|&p| !index.closed(p).iter().any(|&q| mask[q]))
        .count()
}

/// Running covered-set state for incremental (greedy) selection.
#[derive(Debug, Clone)]
pub struct CoverageState<'a> {
    index: &'a AdjacencyIndex,
    covered: Vec<bool>,
    covered_count: usize,
}

impl<'a> CoverageState<'a> {
    /// Starts with nothing covered.
    pub fn new(index: &'a AdjacencyIndex) -> Self {
        Self {
            index,
            covered: vec![false; index.len()],
            covered_count: 0,
        }
    }

    /// Number of vertices of `cover({pos})` not yet covered.
    pub fn gain(&self, pos: usize) -> usize {
        self.index
            .closed(pos)
            .iter()
            .filter(|&&q| !self.covered[q])
            .count()
    }

    /// Covers the closed neighborhood of `pos`. Returns the gain realised.
    pub fn apply(&mut self, pos: usize) -> usize {
        let mut gained = 0;
        for &q in self.index.closed(pos) {
            if !self.covered[q] {
                self.covered[q] = true;
                gained += 1;
            }
        }
        self.covered_count += gained;
        gained
    }

    /// Whether position `pos` is covered.
    pub fn is_covered(&self, pos: usize) -> bool {
        self.covered[pos]
    }

    /// Number of covered vertices.
    pub fn covered_count(&self) -> usize {
        self.covered_count
    }

    /// Number of vertices still uncovered.
    pub fn uncovered_count(&self) -> usize {
        self.index.len() - self.covered_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Graph {
        Graph::from_edges(0..6, (1..6).map(|v| (0, v))).unwrap()
    }

    #[test]
    fn test_cover_empty_selection() {
        let g = star();
        assert!(cover(&g, &Selection::new()).unwrap().is_empty());
    }

    #[test]
    fn test_cover_center_of_star() {
        let g = star();
        let sel: Selection = [0].into_iter().collect();
        assert_eq!(cover(&g, &sel).unwrap().len(), 6);

        let leaf: Selection = [3].into_iter().collect();
        assert_eq!(cover(&g, &leaf).unwrap().into_iter().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn test_cover_missing_vertex() {
        let g = star();
        let sel: Selection = [42].into_iter().collect();
        assert!(matches!(cover(&g, &sel), Err(CoverageError::NotFound(42))));
    }

    #[test]
    fn test_mask_roundtrip_sparse_ids() {
        let g = Graph::from_edges([10, 20, 30], [(10, 20)]).unwrap();
        let index = AdjacencyIndex::new(&g);
        let sel: Selection = [30, 10].into_iter().collect();

        let mask = sel.to_mask(&index).unwrap();
        assert_eq!(mask, vec![true, false, true]);
        assert_eq!(Selection::from_mask(&index, &mask).unwrap(), sel);
    }

    #[test]
    fn test_from_mask_wrong_length() {
        let index = AdjacencyIndex::new(&star());
        assert!(matches!(
            Selection::from_mask(&index, &[true]),
            Err(CoverageError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_mask_counts() {
        let g = Graph::from_edges(0..5, [(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let index = AdjacencyIndex::new(&g);
        let mask = vec![false, false, true, false, false];

        assert_eq!(covered_count(&index, &mask), 3);
        assert_eq!(uncovered_count(&index, &mask), 2);
        assert_eq!(uncovered_count(&index, &[false; 5]), 5);
    }

    #[test]
    fn test_state_gain_and_apply() {
        let g = Graph::from_edges(0..5, [(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let index = AdjacencyIndex::new(&g);
        let mut state = CoverageState::new(&index);

        assert_eq!(state.gain(2), 3);
        assert_eq!(state.apply(2), 3);
        assert_eq!(state.gain(3), 1);
        assert_eq!(state.gain(0), 1);
        assert!(state.is_covered(1));
        assert_eq!(state.covered_count(), 3);
        assert_eq!(state.uncovered_count(), 2);
    }
}
