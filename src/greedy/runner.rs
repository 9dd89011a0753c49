//! Greedy selection loop.

use crate::coverage::{CoverageState, Selection};
use crate::error::{CoverageError, Result};
use crate::graph::{AdjacencyIndex, Graph};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Deterministic greedy coverage solver.
///
/// The adjacency index is built once in [`new`](Self::new) and shared by
/// every step of every solve.
///
/// # Usage
///
/// ```
/// use u_coverage::graph::Graph;
/// use u_coverage::greedy::GreedySolver;
///
/// let graph = Graph::from_edges(0..6, (1..6).map(|v| (0, v))).unwrap();
/// let solver = GreedySolver::new(&graph);
///
/// let full = solver.solve_full_cover();
/// assert_eq!(full.iter().collect::<Vec<_>>(), vec![0]);
/// ```
#[derive(Debug, Clone)]
pub struct GreedySolver<'g> {
    graph: &'g Graph,
    index: AdjacencyIndex,
}

impl<'g> GreedySolver<'g> {
    /// Creates a solver over `graph`.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            index: AdjacencyIndex::new(graph),
        }
    }

    /// The graph this solver was built from.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The precomputed adjacency index.
    pub fn index(&self) -> &AdjacencyIndex {
        &self.index
    }

    /// Greedy cover of every reachable vertex.
    ///
    /// Each step picks the unselected vertex whose closed neighborhood
    /// holds the most uncovered vertices, ties going to the smallest id.
    /// Stops when everything is covered or no candidate gains anything.
    pub fn solve_full_cover(&self) -> Selection {
        self.solve_full_cover_with_cancel(None)
    }

    /// [`solve_full_cover`](Self::solve_full_cover) with a cancellation
    /// flag checked before every step. A cancelled solve returns the
    /// selection built so far.
    pub fn solve_full_cover_with_cancel(&self, cancel: Option<Arc<AtomicBool>>) -> Selection {
        log::info!(
            "greedy full cover: {} vertices, {} edges",
            self.index.len(),
            self.graph.edge_count()
        );
        self.run(self.index.len(), cancel.as_deref())
    }

    /// Greedy maximum coverage with at most `budget` cameras.
    ///
    /// Each step picks the unselected vertex covering the most vertices not
    /// yet covered. Stops after `budget` steps or when no candidate gains
    /// anything.
    ///
    /// # Errors
    /// [`CoverageError::InvalidArgument`] if `budget` is negative.
    pub fn solve_budgeted_cover(&self, budget: i64) -> Result<Selection> {
        self.solve_budgeted_cover_with_cancel(budget, None)
    }

    /// [`solve_budgeted_cover`](Self::solve_budgeted_cover) with a
    /// cancellation flag checked before every step.
    pub fn solve_budgeted_cover_with_cancel(
        &self,
        budget: i64,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Selection> {
        let budget = usize::try_from(budget).map_err(|_| {
            CoverageError::invalid(format!("budget must be non-negative, got {budget}"))
        })?;
        log::info!(
            "greedy budgeted cover: budget {}, {} vertices",
            budget,
            self.index.len()
        );
        Ok(self.run(budget.min(self.index.len()), cancel.as_deref()))
    }

    fn run(&self, max_steps: usize, cancel: Option<&AtomicBool>) -> Selection {
        let n = self.index.len();
        let mut state = CoverageState::new(&self.index);
        let mut chosen = vec![false; n];
        let mut selection = Selection::new();

        for step in 0..max_steps {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                log::warn!("greedy solve cancelled after {step} steps");
                break;
            }
            if state.uncovered_count() == 0 {
                break;
            }

            let Some((best, gain)) = best_candidate(&state, &chosen) else {
                break;
            };

            chosen[best] = true;
            state.apply(best);
            selection.insert(self.index.id(best));

            log::debug!(
                "greedy step {}: vertex {} covers {} new, {} uncovered remain",
                step + 1,
                self.index.id(best),
                gain,
                state.uncovered_count()
            );
        }

        log::info!(
            "greedy finished: {} cameras cover {}/{} vertices",
            selection.len(),
            state.covered_count(),
            n
        );
        selection
    }
}

/// Unselected position with the strictly largest positive gain.
///
/// Scans positions in ascending order, so the smallest id wins ties.
fn best_candidate(state: &CoverageState<'_>, chosen: &[bool]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for (pos, _) in chosen.iter().enumerate().filter(|(_, &c)| !c) {
        let gain = state.gain(pos);
        if gain > best.map_or(0, |(_, g)| g) {
            best = Some((pos, gain));
        }
    }
    best
}
