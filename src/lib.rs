//! Facility placement on street-network graphs.
//!
//! Selects a subset of graph vertices ("cameras") so that each camera
//! covers itself and its direct neighbors, under two objectives:
//!
//! - **Full cover**: cover every vertex with as few cameras as possible
//! - **Budgeted max coverage**: cover as many vertices as possible with a
//!   fixed number of cameras
//!
//! Two solver families produce selections of the same shape:
//!
//! - **Greedy** ([`greedy`]): deterministic marginal-gain selection with
//!   smallest-id tie-breaking
//! - **Genetic** ([`genetic`]): population-based search over binary
//!   placement vectors, with a penalized full-cover mode and a
//!   budget-constrained mode with repair
//!
//! Both are heuristics; neither guarantees an optimal placement.
//!
//! # Pipeline
//!
//! ```
//! use u_coverage::greedy::GreedySolver;
//! use u_coverage::instance::Instance;
//! use u_coverage::report::Solution;
//!
//! let json = r#"{
//!     "nodes": [{"id": 0, "lat": 0.0, "lon": 0.0},
//!               {"id": 1, "lat": 0.0, "lon": 0.1},
//!               {"id": 2, "lat": 0.1, "lon": 0.0}],
//!     "edges": [{"source": 0, "target": 1, "weight": 10.0},
//!               {"source": 0, "target": 2, "weight": 12.0}]
//! }"#;
//!
//! let graph = Instance::from_json_str(json)?.to_graph()?;
//! let selection = GreedySolver::new(&graph).solve_full_cover();
//! let solution = Solution::from_selection(&graph, &selection)?;
//!
//! assert_eq!(solution.size, 1);
//! assert_eq!(solution.coverage_count, 3);
//! # Ok::<(), u_coverage::CoverageError>(())
//! ```
//!
//! # Architecture
//!
//! The [`graph::Graph`] is built once, then frozen into a read-only
//! [`graph::AdjacencyIndex`] per solver. Solvers never mutate the graph,
//! so several runs may share one graph across threads. Progress is
//! reported through the `log` facade and, for the genetic solver, an
//! observer callback; both loops accept a cooperative cancellation flag.

pub mod coverage;
pub mod error;
pub mod genetic;
pub mod graph;
pub mod greedy;
pub mod instance;
pub mod random;
pub mod report;

pub use coverage::Selection;
pub use error::{CoverageError, Result};
pub use graph::{Graph, VertexId};
pub use report::Solution;
