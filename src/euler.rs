//! Eulerian-circuit construction (Hierholzer's algorithm).
//!
//! Consumes a graph whose every vertex has nonzero, even total edge
//! multiplicity — the state the T-join augmentation produces — and emits
//! the closed walk that traverses every road exactly as many times as its
//! count.

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Whether an Eulerian circuit exists: every vertex has nonzero, even
/// total edge multiplicity.
///
/// Connectivity is not checked here; the pipeline rejects disconnected
/// graphs before this point.
pub fn has_euler_circuit(graph: &Graph) -> bool {
    graph.vertex_count() > 0
        && (0..graph.vertex_count()).all(|i| {
            let degree = graph.degree(i);
            degree != 0 && degree % 2 == 0
        })
}

/// Builds the Eulerian circuit starting (and ending) at `start`.
///
/// Operates on a private deep copy, destructively consuming one road per
/// step. The classic stack formulation: peek the top vertex; with no
/// remaining edges it is popped into the output (reverse-postorder),
/// otherwise the first listed edge is traversed and removed symmetrically.
///
/// Returns the walk as a vertex-index sequence plus the total traversed
/// weight. Fails with [`Error::NoEulerCircuit`] when the precondition does
/// not hold — after correct augmentation this is an internal invariant
/// check, not a condition callers are expected to recover from.
pub fn find_euler_circuit(graph: &Graph, start: usize) -> Result<(Vec<usize>, f64)> {
    if start >= graph.vertex_count() {
        return Err(Error::VertexOutOfRange {
            index: start,
            len: graph.vertex_count(),
        });
    }
    if !has_euler_circuit(graph) {
        return Err(Error::NoEulerCircuit);
    }

    let mut remaining = graph.clone();
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(graph.edge_count() as usize + 1);
    let mut total_weight = 0.0;

    while let Some(&vertex) = stack.last() {
        match remaining[vertex].edges().first().copied() {
            None => {
                circuit.push(vertex);
                stack.pop();
            }
            Some(edge) => {
                stack.push(edge.target);
                total_weight += edge.weight;
                remaining.remove_edge(vertex, edge.target)?;
            }
        }
    }

    Ok((circuit, total_weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Position, Vertex};
    use std::collections::HashMap;

    fn square_cycle() -> Graph {
        let mut graph = Graph::new();
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            graph.add_vertex(Vertex::new(Position::new(x, y))).unwrap();
        }
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            graph.add_edge(a, b, 1.5).unwrap();
        }
        graph
    }

    /// Every consecutive walk step must consume an existing road, and each
    /// road must be consumed exactly `count` times.
    fn assert_walk_covers_graph(graph: &Graph, walk: &[usize]) {
        let mut traversals: HashMap<(usize, usize), u32> = HashMap::new();
        for step in walk.windows(2) {
            let key = (step[0].min(step[1]), step[0].max(step[1]));
            *traversals.entry(key).or_insert(0) += 1;
        }
        let mut roads = 0u32;
        for (a, vertex) in graph.iter().enumerate() {
            for edge in vertex.edges() {
                if a < edge.target {
                    assert_eq!(
                        traversals.get(&(a, edge.target)).copied(),
                        Some(edge.count),
                        "road {a}-{} traversed the wrong number of times",
                        edge.target
                    );
                    roads += edge.count;
                }
            }
        }
        assert_eq!(traversals.values().sum::<u32>(), roads);
    }

    #[test]
    fn test_has_circuit_on_cycle() {
        assert!(has_euler_circuit(&square_cycle()));
    }

    #[test]
    fn test_no_circuit_with_odd_vertices() {
        // A path's endpoints have odd degree.
        let mut graph = Graph::new();
        for i in 0..3 {
            graph
                .add_vertex(Vertex::new(Position::new(i as f64, 0.0)))
                .unwrap();
        }
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        assert!(!has_euler_circuit(&graph));
        assert_eq!(
            find_euler_circuit(&graph, 0).unwrap_err(),
            Error::NoEulerCircuit
        );

        // Doubling every road makes all degrees even.
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        assert!(has_euler_circuit(&graph));
    }

    #[test]
    fn test_no_circuit_with_isolated_vertex() {
        let mut graph = square_cycle();
        graph
            .add_vertex(Vertex::new(Position::new(9.0, 9.0)))
            .unwrap();
        assert!(!has_euler_circuit(&graph));
    }

    #[test]
    fn test_no_circuit_on_empty_graph() {
        assert!(!has_euler_circuit(&Graph::new()));
    }

    #[test]
    fn test_circuit_on_cycle() {
        let graph = square_cycle();
        let (walk, weight) = find_euler_circuit(&graph, 0).unwrap();
        assert_eq!(walk.len(), 5);
        assert_eq!(walk.first(), Some(&0));
        assert_eq!(walk.last(), Some(&0));
        assert_eq!(weight, 6.0);
        assert_walk_covers_graph(&graph, &walk);
    }

    #[test]
    fn test_circuit_consumes_parallel_roads() {
        let mut graph = Graph::new();
        for i in 0..2 {
            graph
                .add_vertex(Vertex::new(Position::new(i as f64, 0.0)))
                .unwrap();
        }
        graph.add_edge(0, 1, 2.0).unwrap();
        graph.add_edge(0, 1, 2.0).unwrap();
        let (walk, weight) = find_euler_circuit(&graph, 0).unwrap();
        assert_eq!(walk, vec![0, 1, 0]);
        assert_eq!(weight, 4.0);
    }

    #[test]
    fn test_circuit_on_augmented_reference_graph() {
        // The reference network augmented along pairing (0,1),(2,3):
        // duplicate 0-1 and the 2-5-3 path. Total weight is the sum over
        // every road of weight x count, independent of traversal order.
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
        graph.increment_edge_count(0, 1).unwrap();
        graph.increment_edge_count(2, 5).unwrap();
        graph.increment_edge_count(5, 3).unwrap();
        assert!(has_euler_circuit(&graph));

        let (walk, weight) = find_euler_circuit(&graph, 0).unwrap();
        // 9 base roads (23.0) + duplicated 0-1, 2-5, 5-3 (5.0).
        assert_eq!(weight, 28.0);
        // 12 roads -> 13 walk entries, closed at the start vertex.
        assert_eq!(walk.len(), 13);
        assert_eq!(walk.first(), Some(&0));
        assert_eq!(walk.last(), Some(&0));
        assert_walk_covers_graph(&graph, &walk);
    }

    #[test]
    fn test_start_vertex_respected() {
        let graph = square_cycle();
        let (walk, _) = find_euler_circuit(&graph, 2).unwrap();
        assert_eq!(walk.first(), Some(&2));
        assert_eq!(walk.last(), Some(&2));
    }

    #[test]
    fn test_start_out_of_range() {
        let graph = square_cycle();
        assert_eq!(
            find_euler_circuit(&graph, 9).unwrap_err(),
            Error::VertexOutOfRange { index: 9, len: 4 }
        );
    }
}
