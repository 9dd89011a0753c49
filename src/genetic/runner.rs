//! Genetic evolutionary loop.
//!
//! [`GeneticSolver`] orchestrates the complete process:
//! initialization → evaluation → best tracking → elitism → tournament
//! selection → crossover → repair → mutation → repeat.

use super::config::{GeneticConfig, ObjectiveMode};
use super::operators::{
    bit_flip_mutation, random_bernoulli, random_fixed_cardinality, repair_cardinality,
    single_point_crossover, swap_mutation,
};
use super::types::{Chromosome, GenerationStats};
use crate::coverage::{covered_count, uncovered_count, Selection};
use crate::error::Result;
use crate::graph::{AdjacencyIndex, Graph};
use crate::random::rng_from_seed;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a genetic run.
#[derive(Debug, Clone)]
pub struct GeneticResult {
    /// The best chromosome found during the entire run.
    pub best: Chromosome,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations executed after the initial population.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-ever fitness after the initial population and each generation.
    pub fitness_history: Vec<f64>,
}

impl GeneticResult {
    /// The best chromosome as a vertex-id selection.
    pub fn selection(&self, index: &AdjacencyIndex) -> Result<Selection> {
        self.best.selection(index)
    }
}

/// Population-based coverage solver.
///
/// The configuration is validated against the graph in
/// [`new`](Self::new), before any computation. Population and best-ever
/// state live only inside a run, so one solver can serve several runs,
/// including concurrent ones.
///
/// # Usage
///
/// ```
/// use u_coverage::genetic::{GeneticConfig, GeneticSolver};
/// use u_coverage::graph::Graph;
///
/// let graph = Graph::from_edges(0..5, [(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
/// let config = GeneticConfig::default()
///     .budgeted_max_coverage(2)
///     .with_generations(30)
///     .with_seed(42);
///
/// let solver = GeneticSolver::new(&graph, config).unwrap();
/// let result = solver.run();
/// assert_eq!(result.best.ones(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSolver<'g> {
    graph: &'g Graph,
    index: AdjacencyIndex,
    config: GeneticConfig,
    penalty: f64,
}

impl<'g> GeneticSolver<'g> {
    /// Creates a solver over `graph`.
    ///
    /// # Errors
    /// [`CoverageError::InvalidArgument`](crate::CoverageError::InvalidArgument)
    /// if `config` is invalid for this graph.
    pub fn new(graph: &'g Graph, config: GeneticConfig) -> Result<Self> {
        config.validate(graph.vertex_count())?;
        let index = AdjacencyIndex::new(graph);
        let penalty = config.objective.effective_penalty(index.len());
        Ok(Self {
            graph,
            index,
            config,
            penalty,
        })
    }

    /// The graph this solver was built from.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The precomputed adjacency index; gene `i` is vertex `index.id(i)`.
    pub fn index(&self) -> &AdjacencyIndex {
        &self.index
    }

    /// The validated configuration.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Runs with a generator seeded from the configuration.
    pub fn run(&self) -> GeneticResult {
        self.run_with_cancel(None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If the flag is set, the run stops before the next generation and
    /// returns the best chromosome found so far.
    pub fn run_with_cancel(&self, cancel: Option<Arc<AtomicBool>>) -> GeneticResult {
        let mut rng = rng_from_seed(self.config.seed);
        self.run_observed(&mut rng, &mut |_, _| {}, cancel.as_deref())
    }

    /// Runs with a caller-supplied generator. The configured seed is ignored.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> GeneticResult {
        self.run_observed(rng, &mut |_, _| {}, None)
    }

    /// Runs with a caller-supplied generator, a generation observer and an
    /// optional cancellation flag.
    ///
    /// `observer` is called after the initial population is evaluated
    /// (generation 0) and after every generation, with the statistics and
    /// the evaluated population.
    pub fn run_observed<R: Rng>(
        &self,
        rng: &mut R,
        observer: &mut dyn FnMut(&GenerationStats, &[Chromosome]),
        cancel: Option<&AtomicBool>,
    ) -> GeneticResult {
        let config = &self.config;
        log::info!(
            "genetic run: {} vertices, population {}, {} generations, {:?}",
            self.index.len(),
            config.population_size,
            config.generations,
            config.objective
        );

        // 1. Initialize and evaluate
        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::new(self.create_genes(rng)))
            .collect();
        self.evaluate_population(&mut population);

        // 2. Track best-ever
        let mut best = population[best_index(&population)].clone();
        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(best.fitness());
        observer(&self.stats(0, &population, &best), population.as_slice());

        let mut executed = 0usize;
        let mut cancelled = false;

        // 3. Evolutionary loop
        for generation in 1..=config.generations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                log::warn!("genetic run cancelled before generation {generation}");
                cancelled = true;
                break;
            }

            // Elitism: the best-ever chromosome survives unchanged
            let mut next: Vec<Chromosome> = Vec::with_capacity(config.population_size);
            next.push(best.clone());

            while next.len() < config.population_size {
                let p1 = config.selection.select(&population, rng);
                let p2 = config.selection.select(&population, rng);
                let (parent1, parent2) = (population[p1].genes(), population[p2].genes());

                let (child1, child2) = if rng.random_bool(config.crossover_rate) {
                    single_point_crossover(parent1, parent2, rng)
                } else {
                    (parent1.to_vec(), parent2.to_vec())
                };

                for mut child in [child1, child2] {
                    if next.len() >= config.population_size {
                        break;
                    }
                    self.finish_child(&mut child, rng);
                    next.push(Chromosome::new(child));
                }
            }

            self.evaluate_population(&mut next[1..]);
            population = next;

            let gen_best = &population[best_index(&population)];
            if gen_best.fitness() > best.fitness() {
                best = gen_best.clone();
            }
            fitness_history.push(best.fitness());
            executed = generation;

            let stats = self.stats(generation, &population, &best);
            if generation % 10 == 0 {
                log::debug!(
                    "generation {}/{}: best fitness {:.6} ({} cameras)",
                    generation,
                    config.generations,
                    stats.best_fitness,
                    stats.best_cameras
                );
            }
            observer(&stats, population.as_slice());
        }

        log::info!(
            "genetic run finished after {} generations: best fitness {:.6} with {} cameras",
            executed,
            best.fitness(),
            best.ones()
        );

        GeneticResult {
            best_fitness: best.fitness(),
            best,
            generations: executed,
            cancelled,
            fitness_history,
        }
    }

    /// Fitness of a gene vector under the configured objective.
    pub fn evaluate(&self, genes: &[bool]) -> f64 {
        match self.config.objective {
            ObjectiveMode::PenalizedFullCover { .. } => {
                let cameras = genes.iter().filter(|&&g| g).count();
                let uncovered = uncovered_count(&self.index, genes);
                1.0 / (1.0 + cameras as f64 + self.penalty * uncovered as f64)
            }
            ObjectiveMode::BudgetedMaxCoverage { .. } => covered_count(&self.index, genes) as f64,
        }
    }

    fn create_genes<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
        let n = self.index.len();
        match self.config.objective {
            ObjectiveMode::PenalizedFullCover { .. } => {
                random_bernoulli(n, self.config.initial_density, rng)
            }
            ObjectiveMode::BudgetedMaxCoverage { budget } => {
                random_fixed_cardinality(n, budget, rng)
            }
        }
    }

    /// Repair (budgeted mode) and mutation of a fresh child.
    fn finish_child<R: Rng>(&self, genes: &mut [bool], rng: &mut R) {
        match self.config.objective {
            ObjectiveMode::PenalizedFullCover { .. } => {
                bit_flip_mutation(genes, self.config.mutation_rate, rng);
            }
            ObjectiveMode::BudgetedMaxCoverage { budget } => {
                repair_cardinality(genes, budget, rng);
                if rng.random_bool(self.config.mutation_rate) {
                    swap_mutation(genes, rng);
                }
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn evaluate_population(&self, population: &mut [Chromosome]) {
        use rayon::prelude::*;

        if self.config.parallel {
            population.par_iter_mut().for_each(|c| {
                let f = self.evaluate(c.genes());
                c.set_fitness(f);
            });
        } else {
            self.evaluate_sequential(population);
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_population(&self, population: &mut [Chromosome]) {
        self.evaluate_sequential(population);
    }

    fn evaluate_sequential(&self, population: &mut [Chromosome]) {
        for c in population.iter_mut() {
            let f = self.evaluate(c.genes());
            c.set_fitness(f);
        }
    }

    fn stats(&self, generation: usize, population: &[Chromosome], best: &Chromosome) -> GenerationStats {
        let total: f64 = population.iter().map(Chromosome::fitness).sum();
        GenerationStats {
            generation,
            best_fitness: best.fitness(),
            generation_best: population[best_index(population)].fitness(),
            mean_fitness: total / population.len() as f64,
            best_cameras: best.ones(),
        }
    }
}

/// Index of the fittest chromosome; the earliest wins ties.
fn best_index(population: &[Chromosome]) -> usize {
    (1..population.len()).fold(0, |best, i| {
        if population[i].fitness() > population[best].fitness() {
            i
        } else {
            best
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
