//! The full route-inspection pipeline: evolve → augment → traverse.

use crate::error::Result;
use crate::euler;
use crate::ga::{GaConfig, GeneticAlgorithm, Genotype, History};
use crate::graph::Graph;
use std::sync::atomic::AtomicBool;

/// Everything a caller needs from one pipeline run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSolution {
    /// Total shortest-path weight of the winning pairing.
    pub pairing_weight: f64,
    /// The winning pairing itself.
    pub pairing: Genotype,
    /// The closed walk as a vertex-index sequence, starting and ending at
    /// the configured Euler start vertex.
    pub circuit: Vec<usize>,
    /// Total weight of the walk: every road's weight times the number of
    /// times it is traversed.
    pub total_cost: f64,
    /// Per-generation best/median/worst pairing weights.
    pub history: History,
    /// Breeding iterations the search executed.
    pub iterations: usize,
    /// Whether the search stopped on stagnation rather than the cap.
    pub stagnated: bool,
    /// Whether the search was cancelled externally.
    pub cancelled: bool,
}

/// Runs the whole pipeline on `graph`.
///
/// Evolves a pairing of the odd-degree vertices, duplicates roads along
/// the pairing's shortest paths, and traverses the resulting Eulerian
/// circuit.
///
/// ```
/// use postwalk::ga::GaConfig;
/// use postwalk::graph::{Graph, Position, Vertex};
/// use postwalk::pipeline;
///
/// let mut graph = Graph::new();
/// for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)] {
///     graph.add_vertex(Vertex::new(Position::new(x, y))).unwrap();
/// }
/// graph.add_edge(0, 1, 1.0).unwrap();
/// graph.add_edge(1, 2, 1.0).unwrap();
/// graph.add_edge(2, 0, 1.0).unwrap();
///
/// let solution = pipeline::solve(&graph, &GaConfig::default().with_seed(7)).unwrap();
/// assert_eq!(solution.total_cost, 3.0);
/// ```
pub fn solve(graph: &Graph, config: &GaConfig) -> Result<RouteSolution> {
    solve_with_cancel(graph, config, None)
}

/// Like [`solve`], with a cancellation flag polled once per generation.
///
/// A cancelled search still augments and traverses with the best pairing
/// found so far, so the returned solution is complete (just not as
/// optimized).
pub fn solve_with_cancel(
    graph: &Graph,
    config: &GaConfig,
    cancel: Option<&AtomicBool>,
) -> Result<RouteSolution> {
    let mut search = GeneticAlgorithm::new(graph.clone(), config.clone())?;
    let outcome = search.run_with_cancel(cancel)?;
    let augmented = search.augmented_graph(&outcome.best)?;
    let (circuit, total_cost) = euler::find_euler_circuit(&augmented, config.euler_start)?;
    Ok(RouteSolution {
        pairing_weight: outcome.best_weight,
        pairing: outcome.best,
        circuit,
        total_cost,
        history: search.history().clone(),
        iterations: outcome.iterations,
        stagnated: outcome.stagnated,
        cancelled: outcome.cancelled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ga::Selection;
    use crate::graph::{Position, Vertex};
    use std::collections::HashMap;
    use std::sync::atomic::AtomicBool;

    fn reference_graph() -> Graph {
        let mut graph = Graph::new();
        let positions = [
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (2.0, 1.0),
            (1.0, 2.0),
        ];
        for (x, y) in positions {
            graph.add_vertex(Vertex::new(Position::new(x, y))).unwrap();
        }
        for (a, b, w) in [
            (0, 1, 3.0),
            (0, 5, 6.0),
            (0, 4, 3.0),
            (1, 2, 1.0),
            (1, 3, 3.0),
            (2, 3, 3.0),
            (2, 5, 1.0),
            (3, 5, 1.0),
            (4, 5, 2.0),
        ] {
            graph.add_edge(a, b, w).unwrap();
        }
        graph
    }

    fn reference_config() -> GaConfig {
        GaConfig::default()
            .with_generation_size(6)
            .with_selection(Selection::TopRandom(4))
            .with_seed(42)
    }

    /// Every walk step consumes an existing road; each road is walked
    /// exactly `count` times.
    fn assert_walk_covers(graph: &Graph, walk: &[usize], extra: &[(usize, usize)]) {
        let mut expected: HashMap<(usize, usize), u32> = HashMap::new();
        for (a, vertex) in graph.iter().enumerate() {
            for edge in vertex.edges() {
                if a < edge.target {
                    expected.insert((a, edge.target), edge.count);
                }
            }
        }
        for &(a, b) in extra {
            *expected.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
        let mut walked: HashMap<(usize, usize), u32> = HashMap::new();
        for step in walk.windows(2) {
            let key = (step[0].min(step[1]), step[0].max(step[1]));
            *walked.entry(key).or_insert(0) += 1;
        }
        assert_eq!(walked, expected);
    }

    #[test]
    fn test_solve_reference_graph() {
        let graph = reference_graph();
        let solution = solve(&graph, &reference_config()).unwrap();

        // Best pairing is {0,1} + {2,3} at weight 5; the augmented network
        // weighs the base 23 plus those 5.
        assert_eq!(solution.pairing_weight, 5.0);
        assert_eq!(solution.total_cost, 28.0);
        assert_eq!(solution.circuit.len(), 13);
        assert_eq!(solution.circuit.first(), Some(&0));
        assert_eq!(solution.circuit.last(), Some(&0));
        // The duplicated roads follow the pairing's shortest paths.
        assert_walk_covers(&graph, &solution.circuit, &[(0, 1), (2, 5), (5, 3)]);
        assert!(!solution.cancelled);
    }

    #[test]
    fn test_solve_is_deterministic_under_seed() {
        let graph = reference_graph();
        let first = solve(&graph, &reference_config()).unwrap();
        let second = solve(&graph, &reference_config()).unwrap();

        assert_eq!(first.pairing_weight, second.pairing_weight);
        assert_eq!(first.pairing, second.pairing);
        assert_eq!(first.circuit, second.circuit);
        assert_eq!(first.total_cost, second.total_cost);
        assert_eq!(first.iterations, second.iterations);
        assert_eq!(first.history.best, second.history.best);
        assert_eq!(first.history.median, second.history.median);
        assert_eq!(first.history.worst, second.history.worst);
    }

    #[test]
    fn test_solve_respects_euler_start() {
        let graph = reference_graph();
        let config = reference_config().with_euler_start(3);
        let solution = solve(&graph, &config).unwrap();
        assert_eq!(solution.circuit.first(), Some(&3));
        assert_eq!(solution.circuit.last(), Some(&3));
        assert_eq!(solution.total_cost, 28.0);
    }

    #[test]
    fn test_solve_already_eulerian_graph() {
        let mut graph = Graph::new();
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            graph.add_vertex(Vertex::new(Position::new(x, y))).unwrap();
        }
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            graph.add_edge(a, b, 2.0).unwrap();
        }
        let solution = solve(&graph, &reference_config()).unwrap();
        assert!(solution.pairing.is_empty());
        assert_eq!(solution.pairing_weight, 0.0);
        assert_eq!(solution.total_cost, 8.0);
        assert_walk_covers(&graph, &solution.circuit, &[]);
    }

    #[test]
    fn test_solve_rejects_disconnected_graph() {
        let mut graph = Graph::new();
        for i in 0..4 {
            graph
                .add_vertex(Vertex::new(Position::new(i as f64, 0.0)))
                .unwrap();
        }
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();
        assert_eq!(
            solve(&graph, &reference_config()).unwrap_err(),
            Error::DisconnectedGraph
        );
    }

    #[test]
    fn test_cancelled_solve_still_completes() {
        let graph = reference_graph();
        let cancel = AtomicBool::new(true);
        let solution = solve_with_cancel(&graph, &reference_config(), Some(&cancel)).unwrap();
        assert!(solution.cancelled);
        assert_eq!(solution.iterations, 0);
        // Whatever pairing the first generation held, the walk is closed
        // and covers every road.
        assert_eq!(solution.circuit.first(), Some(&0));
        assert_eq!(solution.circuit.last(), Some(&0));
        assert!(solution.total_cost >= 28.0);
    }
}
