//! Greedy coverage heuristics.
//!
//! Both modes share one loop: at every step select the not-yet-selected
//! vertex whose closed neighborhood contains the most uncovered vertices,
//! scanning in ascending id order so the smallest id wins ties.
//!
//! - [`GreedySolver::solve_full_cover`]: repeat until every reachable
//!   vertex is covered (minimum-cardinality full cover heuristic)
//! - [`GreedySolver::solve_budgeted_cover`]: at most `budget` steps
//!   (maximum coverage under a cardinality budget)
//!
//! Neither guarantees optimality. For full cover the classical greedy
//! bound is `H(Δ + 1)` times the optimum, `Δ` being the maximum degree.
//!
//! # References
//!
//! - Johnson (1974), "Approximation Algorithms for Combinatorial Problems"
//! - Nemhauser, Wolsey & Fisher (1978), "An analysis of approximations for
//!   maximizing submodular set functions"

mod runner;

pub use runner::GreedySolver;
