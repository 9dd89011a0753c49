//! Genetic coverage solver.
//!
//! A single-population genetic algorithm over binary placement vectors
//! (one gene per vertex, `true` = camera), with two objective modes:
//!
//! - [`ObjectiveMode::PenalizedFullCover`]: variable number of cameras,
//!   fitness `1 / (1 + cameras + P · uncovered)` with `P > n`, so any
//!   feasible placement outranks any infeasible one
//! - [`ObjectiveMode::BudgetedMaxCoverage`]: exactly `budget` cameras,
//!   fitness = covered vertex count; children are repaired to the budget
//!   after crossover and mutated by cardinality-preserving swaps
//!
//! Each generation keeps the best-ever chromosome (elitism), fills the
//! rest by binary tournament, single-point crossover, repair and mutation,
//! and runs for a fixed number of generations.
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: population size, generations, rates, mode, seed
//! - [`GeneticSolver`]: executes the evolutionary loop
//! - [`GeneticResult`]: best chromosome and fitness history
//! - [`GenerationStats`]: per-generation snapshot for observers
//!
//! # Submodules
//!
//! - [`operators`]: binary initialization, crossover, mutation and repair
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Beasley & Chu (1996), "A genetic algorithm for the set covering problem"

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{GeneticConfig, ObjectiveMode};
pub use runner::{GeneticResult, GeneticSolver};
pub use selection::ParentSelection;
pub use types::{Chromosome, GenerationStats};
