//! Genetic solver configuration.
//!
//! [`GeneticConfig`] holds all parameters that control the evolutionary
//! loop; [`ObjectiveMode`] chooses what the population optimizes.

use super::selection::ParentSelection;
use crate::error::{CoverageError, Result};
use serde::{Deserialize, Serialize};

/// What the genetic solver optimizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ObjectiveMode {
    /// Variable-cardinality full cover with a penalty per uncovered vertex.
    ///
    /// `fitness = 1 / (1 + cameras + P · uncovered)`, maximized.
    ///
    /// `penalty` is `P`. `None` uses `n + 1`, the smallest integer penalty
    /// under which any feasible individual outranks any infeasible one.
    /// An explicit penalty must also exceed `n`.
    PenalizedFullCover {
        /// Penalty per uncovered vertex.
        penalty: Option<f64>,
    },

    /// Exactly `budget` cameras; fitness is the number of covered vertices.
    ///
    /// Offspring are repaired back to `budget` ones after crossover and
    /// mutated by cardinality-preserving swaps.
    BudgetedMaxCoverage {
        /// Number of cameras every individual carries.
        budget: usize,
    },
}

impl Default for ObjectiveMode {
    fn default() -> Self {
        ObjectiveMode::PenalizedFullCover { penalty: None }
    }
}

impl ObjectiveMode {
    /// Penalty actually applied for a graph with `vertex_count` vertices.
    ///
    /// Meaningless for [`BudgetedMaxCoverage`](Self::BudgetedMaxCoverage),
    /// where it returns 0.
    pub fn effective_penalty(&self, vertex_count: usize) -> f64 {
        match *self {
            ObjectiveMode::PenalizedFullCover { penalty } => {
                penalty.unwrap_or(vertex_count as f64 + 1.0)
            }
            ObjectiveMode::BudgetedMaxCoverage { .. } => 0.0,
        }
    }
}

/// Configuration for the genetic coverage solver.
///
/// # Defaults
///
/// ```
/// use u_coverage::genetic::{GeneticConfig, ObjectiveMode};
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.objective, ObjectiveMode::PenalizedFullCover { penalty: None });
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_coverage::genetic::{GeneticConfig, ObjectiveMode};
///
/// let config = GeneticConfig::default()
///     .with_population_size(80)
///     .with_generations(300)
///     .with_objective(ObjectiveMode::BudgetedMaxCoverage { budget: 40 })
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate(100).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Number of individuals in the population. Must be positive.
    pub population_size: usize,

    /// Number of generations to evolve. No early stop.
    pub generations: usize,

    /// Parent selection strategy.
    pub selection: ParentSelection,

    /// Probability of single-point crossover for a pair of parents (0.0–1.0).
    ///
    /// Without crossover the children are copies of the parents.
    pub crossover_rate: f64,

    /// Mutation probability (0.0–1.0).
    ///
    /// Per gene for penalized full cover, per child (one swap) for budgeted
    /// max coverage.
    pub mutation_rate: f64,

    /// Probability that a gene starts at 1 in penalized full cover mode.
    pub initial_density: f64,

    /// Objective and representation constraint.
    pub objective: ObjectiveMode,

    /// Whether to evaluate individuals in parallel.
    ///
    /// Only honoured when the `parallel` feature is enabled. Random draws
    /// stay sequential, so a seeded run gives the same result either way.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 200,
            selection: ParentSelection::default(),
            crossover_rate: 0.8,
            mutation_rate: 0.01,
            initial_density: 0.5,
            objective: ObjectiveMode::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the parent selection strategy.
    pub fn with_selection(mut self, selection: ParentSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the crossover rate. Out-of-range values fail validation.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate. Out-of-range values fail validation.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the initial gene density for penalized full cover.
    pub fn with_initial_density(mut self, density: f64) -> Self {
        self.initial_density = density;
        self
    }

    /// Sets the objective mode.
    pub fn with_objective(mut self, objective: ObjectiveMode) -> Self {
        self.objective = objective;
        self
    }

    /// Shorthand for penalized full cover with the default penalty.
    pub fn penalized_full_cover(self) -> Self {
        self.with_objective(ObjectiveMode::PenalizedFullCover { penalty: None })
    }

    /// Shorthand for budgeted max coverage with `budget` cameras.
    pub fn budgeted_max_coverage(self, budget: usize) -> Self {
        self.with_objective(ObjectiveMode::BudgetedMaxCoverage { budget })
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration against a graph of `vertex_count` vertices.
    ///
    /// # Errors
    /// [`CoverageError::InvalidArgument`] describing the first offending
    /// parameter.
    pub fn validate(&self, vertex_count: usize) -> Result<()> {
        if self.population_size == 0 {
            return Err(CoverageError::invalid("population_size must be positive"));
        }
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        check_probability("initial_density", self.initial_density)?;
        self.selection.validate()?;

        match self.objective {
            ObjectiveMode::PenalizedFullCover {
                penalty: Some(penalty),
            } => {
                if !penalty.is_finite() || penalty <= vertex_count as f64 {
                    return Err(CoverageError::invalid(format!(
                        "penalty must exceed the vertex count {vertex_count}, got {penalty}"
                    )));
                }
            }
            ObjectiveMode::PenalizedFullCover { penalty: None } => {}
            ObjectiveMode::BudgetedMaxCoverage { budget } => {
                if budget > vertex_count {
                    return Err(CoverageError::invalid(format!(
                        "budget {budget} exceeds the vertex count {vertex_count}"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoverageError::invalid(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneticConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 200);
        assert_eq!(config.selection, ParentSelection::Tournament(2));
        assert!((config.crossover_rate - 0.8).abs() < 1e-12);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate(10).is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeneticConfig::default()
            .with_population_size(20)
            .with_generations(5)
            .with_selection(ParentSelection::Tournament(3))
            .with_crossover_rate(0.5)
            .with_mutation_rate(0.3)
            .budgeted_max_coverage(4)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 5);
        assert_eq!(config.selection, ParentSelection::Tournament(3));
        assert_eq!(
            config.objective,
            ObjectiveMode::BudgetedMaxCoverage { budget: 4 }
        );
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_population_zero() {
        let config = GeneticConfig::default().with_population_size(0);
        assert!(matches!(
            config.validate(10),
            Err(CoverageError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_rates() {
        assert!(GeneticConfig::default().with_crossover_rate(1.5).validate(10).is_err());
        assert!(GeneticConfig::default().with_mutation_rate(-0.1).validate(10).is_err());
        assert!(GeneticConfig::default().with_mutation_rate(f64::NAN).validate(10).is_err());
        assert!(GeneticConfig::default().with_initial_density(2.0).validate(10).is_err());
        assert!(GeneticConfig::default()
            .with_crossover_rate(0.0)
            .with_mutation_rate(1.0)
            .validate(10)
            .is_ok());
    }

    #[test]
    fn test_validate_budget_exceeds_vertices() {
        let config = GeneticConfig::default().budgeted_max_coverage(11);
        assert!(config.validate(10).is_err());
        assert!(config.validate(11).is_ok());
    }

    #[test]
    fn test_validate_penalty_too_small() {
        let config = GeneticConfig::default()
            .with_objective(ObjectiveMode::PenalizedFullCover { penalty: Some(10.0) });
        assert!(config.validate(10).is_err());
        assert!(config.validate(9).is_ok());
    }

    #[test]
    fn test_effective_penalty() {
        assert_eq!(ObjectiveMode::default().effective_penalty(100), 101.0);
        let explicit = ObjectiveMode::PenalizedFullCover { penalty: Some(500.0) };
        assert_eq!(explicit.effective_penalty(100), 500.0);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "population_size": 30,
            "generations": 10,
            "objective": { "mode": "budgeted_max_coverage", "budget": 5 }
        }"#;
        let config: GeneticConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.population_size, 30);
        assert_eq!(config.objective, ObjectiveMode::BudgetedMaxCoverage { budget: 5 });
        assert!((config.crossover_rate - 0.8).abs() < 1e-12);
    }
}
