//! Genetic search for a low-cost odd-vertex pairing.
//!
//! The route-inspection reduction pairs up the graph's odd-degree
//! vertices; each pair is later joined by duplicated edges along its
//! shortest path. Finding the cheapest pairing is a minimum-weight
//! perfect matching problem; this module approximates it with a genetic
//! algorithm over permutation-encoded candidates.
//!
//! # Key Types
//!
//! - [`Genotype`]: a candidate pairing — a permutation of the odd-vertex
//!   indices where consecutive entries form the matched pairs
//! - [`Generation`]: a fixed-size population of genotypes
//! - [`Selection`] / [`Crossover`]: parent-selection and recombination
//!   policies
//! - [`GaConfig`]: run parameters (validated at construction)
//! - [`GeneticAlgorithm`]: the evolutionary loop, fitness [`History`], and
//!   the T-join augmentation of the winning pairing
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman
//!   Problem" (exchange-map permutation crossover)
//! - Edmonds & Johnson (1973), "Matching, Euler Tours and the Chinese
//!   Postman"

mod config;
mod generation;
mod genotype;
mod runner;
mod selection;

pub use config::{Crossover, GaConfig};
pub use generation::Generation;
pub use genotype::Genotype;
pub use runner::{EvolveOutcome, GeneticAlgorithm, History};
pub use selection::Selection;
