//! Parent selection for the genetic solver.
//!
//! Fitness is maximized throughout this module.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Chromosome;
use crate::error::{CoverageError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Strategy for choosing parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParentSelection {
    /// Sample `k` distinct individuals, keep the fittest.
    ///
    /// `k = 2` (binary tournament) is the default: light pressure, which
    /// keeps diversity in the population.
    Tournament(usize),
}

impl Default for ParentSelection {
    fn default() -> Self {
        ParentSelection::Tournament(2)
    }
}

impl ParentSelection {
    pub(crate) fn validate(&self) -> Result<()> {
        match *self {
            ParentSelection::Tournament(0) => {
                Err(CoverageError::invalid("tournament size must be positive"))
            }
            ParentSelection::Tournament(_) => Ok(()),
        }
    }

    /// Selects a parent index from `population`.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Chromosome], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        match *self {
            ParentSelection::Tournament(k) => tournament(population, k, rng),
        }
    }
}

/// Tournament without replacement; the first sampled wins ties.
fn tournament<R: Rng>(population: &[Chromosome], k: usize, rng: &mut R) -> usize {
    let n = population.len();
    let k = k.clamp(1, n);

    rand::seq::index::sample(rng, n, k)
        .into_iter()
        .reduce(|best, idx| {
            if population[idx].fitness() > population[best].fitness() {
                idx
            } else {
                best
            }
        })
        .unwrap_or(0)
}
