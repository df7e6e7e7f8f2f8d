//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{Error, Result};

/// Which crossover window shape to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Two sorted random cut points bound the exchanged window.
    #[default]
    TwoPoint,
    /// The window always starts at position 0; only the end is random.
    OnePoint,
}

/// Configuration for the pairing search.
///
/// Validated at [`GeneticAlgorithm`](super::GeneticAlgorithm)
/// construction; any violation fails immediately with a configuration
/// error.
///
/// # Defaults
///
/// ```
/// use postwalk::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.generation_size, 20);
/// assert_eq!(config.max_iterations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use postwalk::ga::{Crossover, GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_generation_size(30)
///     .with_selection(Selection::Rank)
///     .with_crossover(Crossover::OnePoint)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of genotypes per generation. Must be even and at least 2.
    pub generation_size: usize,

    /// Parent-selection policy. For [`Selection::TopRandom`] the pool size
    /// must be even, at least 2, and smaller than `generation_size`.
    pub selection: Selection,

    /// Probability, in percent (0–100), that a freshly bred child is
    /// mutated.
    pub mutation_chance: u32,

    /// Hard cap on evolutionary iterations. Must exceed
    /// `last_elements_to_check`.
    pub max_iterations: usize,

    /// Stagnation window: the run stops early once this many consecutive
    /// recorded best-fitness values are identical.
    pub last_elements_to_check: usize,

    /// Crossover window shape.
    pub crossover: Crossover,

    /// Start vertex for the final Euler traversal.
    pub euler_start: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generation_size: 20,
            selection: Selection::default(),
            mutation_chance: 50,
            max_iterations: 1000,
            last_elements_to_check: 10,
            crossover: Crossover::default(),
            euler_start: 0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the generation size.
    pub fn with_generation_size(mut self, n: usize) -> Self {
        self.generation_size = n;
        self
    }

    /// Sets the parent-selection policy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the mutation chance in percent.
    pub fn with_mutation_chance(mut self, percent: u32) -> Self {
        self.mutation_chance = percent;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the stagnation window.
    pub fn with_last_elements_to_check(mut self, n: usize) -> Self {
        self.last_elements_to_check = n;
        self
    }

    /// Sets the crossover window shape.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the start vertex of the final Euler traversal.
    pub fn with_euler_start(mut self, vertex: usize) -> Self {
        self.euler_start = vertex;
        self
    }

    /// Sets the random seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.generation_size < 2 || self.generation_size % 2 != 0 {
            return Err(Error::Config(
                "generation size must be an even number of at least 2".into(),
            ));
        }
        if let Selection::TopRandom(pool) = self.selection {
            if pool < 2 || pool % 2 != 0 {
                return Err(Error::Config(
                    "selection size must be an even number of at least 2".into(),
                ));
            }
            if pool >= self.generation_size {
                return Err(Error::Config(
                    "cannot select more individuals than the generation holds".into(),
                ));
            }
        }
        if self.mutation_chance > 100 {
            return Err(Error::Config(
                "mutation chance cannot exceed 100 percent".into(),
            ));
        }
        if self.max_iterations <= self.last_elements_to_check {
            return Err(Error::Config(
                "cannot check back more iterations than the iteration cap allows".into(),
            ));
        }
        Ok(())
    }
}
