//! The evolutionary loop and T-join augmentation.

use super::config::GaConfig;
use super::generation::Generation;
use super::genotype::Genotype;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::paths::ConnectionCache;
use crate::random::create_rng;
use log::{debug, info};
use rand::Rng;
use rand_pcg::Pcg64;
use std::sync::atomic::{AtomicBool, Ordering};

/// Per-generation fitness records: three parallel sequences accumulated
/// across the run for external convergence reporting.
///
/// "Median" is the element at index `generation_size / 2` of the ascending
/// sort — integer division, not a true statistical median for even sizes.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    /// Best (lowest) pairing weight of each generation.
    pub best: Vec<f64>,
    /// Median pairing weight of each generation.
    pub median: Vec<f64>,
    /// Worst (highest) pairing weight of each generation.
    pub worst: Vec<f64>,
}

/// Result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolveOutcome {
    /// Best pairing weight recorded in the generation that triggered the
    /// stop condition.
    pub best_weight: f64,
    /// The genotype that weight belongs to.
    pub best: Genotype,
    /// Number of breeding iterations executed.
    pub iterations: usize,
    /// Whether the run stopped on the stagnation window rather than the
    /// iteration cap.
    pub stagnated: bool,
    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

enum StopReason {
    IterationCap,
    Stagnation,
}

/// Evolutionary search for a low-cost pairing of odd-degree vertices.
///
/// Owns a deep copy of the input graph, the shortest-path cache built from
/// it, and the double-buffered generation pair. One instance performs one
/// run; the connection cache is never invalidated.
#[derive(Debug)]
pub struct GeneticAlgorithm {
    config: GaConfig,
    graph: Graph,
    connections: ConnectionCache,
    previous: Generation,
    current: Generation,
    history: History,
    rng: Pcg64,
}

impl GeneticAlgorithm {
    /// Validates the configuration, snapshots the graph, and builds the
    /// two initial random generations.
    ///
    /// Fails with [`Error::Config`] on an invalid configuration and with
    /// [`Error::DisconnectedGraph`] when the graph is not one component —
    /// no pairing can make a disconnected graph Eulerian.
    pub fn new(graph: Graph, config: GaConfig) -> Result<Self> {
        config.validate()?;
        if !graph.is_connected() {
            return Err(Error::DisconnectedGraph);
        }
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let connections = ConnectionCache::new(&graph);
        let odd = connections.odd_vertices().to_vec();
        let previous = Generation::random(&odd, config.generation_size, &mut rng);
        let current = Generation::random(&odd, config.generation_size, &mut rng);
        Ok(Self {
            config,
            graph,
            connections,
            previous,
            current,
            history: History::default(),
            rng,
        })
    }

    /// The graph snapshot this run operates on.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The fitness history accumulated so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Runs the evolutionary loop to completion.
    pub fn run(&mut self) -> Result<EvolveOutcome> {
        self.run_with_cancel(None)
    }

    /// Runs the evolutionary loop, polling `cancel` once per generation.
    ///
    /// A cancelled run returns the best pairing of the generation being
    /// evaluated when the flag was observed.
    pub fn run_with_cancel(&mut self, cancel: Option<&AtomicBool>) -> Result<EvolveOutcome> {
        let mut iteration = 0usize;
        let mut best_index;
        let mut best_weight;
        let mut stagnated = false;
        let mut cancelled = false;

        loop {
            let ranked = self.previous.ranked(&mut self.connections)?;
            let size = ranked.len();
            best_index = ranked[0].0;
            best_weight = ranked[0].1;
            self.history.best.push(best_weight);
            self.history.median.push(ranked[size / 2].1);
            self.history.worst.push(ranked[size - 1].1);
            debug!(
                "generation {iteration}: best {best_weight:.3}, median {:.3}, worst {:.3}",
                ranked[size / 2].1,
                ranked[size - 1].1
            );

            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            match self.stop_reason(iteration) {
                Some(StopReason::IterationCap) => break,
                Some(StopReason::Stagnation) => {
                    stagnated = true;
                    break;
                }
                None => {}
            }

            self.breed(&ranked)?;
            iteration += 1;
        }

        info!(
            "pairing search finished after {iteration} iterations \
             (best weight {best_weight:.3}, stagnated: {stagnated}, cancelled: {cancelled})"
        );
        Ok(EvolveOutcome {
            best_weight,
            best: self.previous[best_index].clone(),
            iterations: iteration,
            stagnated,
            cancelled,
        })
    }

    /// Whether the run should stop after the current evaluation.
    fn stop_reason(&self, iteration: usize) -> Option<StopReason> {
        if iteration > self.config.max_iterations {
            return Some(StopReason::IterationCap);
        }
        // The stagnation check activates once enough history exists.
        let window = self.config.last_elements_to_check;
        if iteration > window {
            let best = &self.history.best;
            let last = best[best.len() - 1];
            if best[best.len() - window..].iter().all(|&v| v == last) {
                return Some(StopReason::Stagnation);
            }
        }
        None
    }

    /// Breeds the next generation from the ranking of the previous one and
    /// swaps the two buffers.
    fn breed(&mut self, ranked: &[(usize, f64)]) -> Result<()> {
        for slot in (0..self.config.generation_size).step_by(2) {
            let (first, second) = self.config.selection.select_parents(ranked, &mut self.rng);
            let (mut child1, mut child2) = Genotype::crossover(
                &self.previous[first],
                &self.previous[second],
                self.config.crossover,
                &mut self.rng,
            )?;
            if self.config.mutation_chance > self.rng.random_range(0..100) {
                child1.mutate(&mut self.rng);
            }
            if self.config.mutation_chance > self.rng.random_range(0..100) {
                child2.mutate(&mut self.rng);
            }
            self.current[slot] = child1;
            self.current[slot + 1] = child2;
        }
        std::mem::swap(&mut self.previous, &mut self.current);
        Ok(())
    }

    /// Deep-copies the graph and duplicates one road along the cached
    /// shortest path of every matched pair — the T-join augmentation that
    /// makes every vertex's total degree even.
    pub fn augmented_graph(&mut self, genotype: &Genotype) -> Result<Graph> {
        let mut graph = self.graph.clone();
        for (start, stop) in genotype.pairs() {
            let connection = self.connections.get_connection(start, stop)?;
            for step in connection.path().windows(2) {
                graph.increment_edge_count(step[0], step[1])?;
            }
        }
        Ok(graph)
    }
}
