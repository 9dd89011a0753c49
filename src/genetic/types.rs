//! Chromosome and per-generation statistics.

use crate::coverage::Selection;
use crate::error::Result;
use crate::graph::AdjacencyIndex;

/// A candidate placement: one gene per vertex position, `true` = camera.
///
/// Genes are indexed by the dense positions of an [`AdjacencyIndex`].
/// Fitness is maximized; an unevaluated chromosome holds
/// `f64::NEG_INFINITY`.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<bool>,
    fitness: f64,
}

impl Chromosome {
    /// Wraps `genes` as an unevaluated chromosome.
    pub fn new(genes: Vec<bool>) -> Self {
        Self::with_fitness(genes, f64::NEG_INFINITY)
    }

    pub(crate) fn with_fitness(genes: Vec<bool>, fitness: f64) -> Self {
        Self { genes, fitness }
    }

    /// The gene vector.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Fitness from the last evaluation.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Number of cameras (genes set to `true`).
    pub fn ones(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Converts the genes to a vertex-id selection.
    pub fn selection(&self, index: &AdjacencyIndex) -> Result<Selection> {
        Selection::from_mask(index, &self.genes)
    }
}

/// Snapshot handed to the generation observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Generation number; 0 is the initial population.
    pub generation: usize,
    /// Best fitness seen in any generation so far.
    pub best_fitness: f64,
    /// Best fitness within this generation.
    pub generation_best: f64,
    /// Mean fitness of this generation.
    pub mean_fitness: f64,
    /// Cameras in the best-ever chromosome.
    pub best_cameras: usize,
}
