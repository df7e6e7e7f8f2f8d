//! Array-scan Dijkstra.

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Runs Dijkstra from `start` over the entire vertex set.
///
/// Returns the predecessor of each vertex on its cheapest known path and
/// the minimal cost to reach it (`f64::INFINITY` when unreachable).
/// Selection scans the tentative-cost array directly; among equal-cost
/// candidates the lowest index wins, so costs are deterministic even when
/// the chosen paths are not canonical.
pub(crate) fn scan_tree(graph: &Graph, start: usize) -> (Vec<Option<usize>>, Vec<f64>) {
    let n = graph.vertex_count();
    let mut cost = vec![f64::INFINITY; n];
    let mut preceding: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    cost[start] = 0.0;

    for _ in 0..n {
        // Next vertex: cheapest unvisited tentative cost.
        let mut current = None;
        let mut best = f64::INFINITY;
        for v in 0..n {
            if !visited[v] && cost[v] < best {
                best = cost[v];
                current = Some(v);
            }
        }
        // Only unreachable vertices remain.
        let Some(v) = current else { break };
        visited[v] = true;

        for edge in graph[v].edges() {
            if visited[edge.target] {
                continue;
            }
            let through = cost[v] + edge.weight;
            if through < cost[edge.target] {
                cost[edge.target] = through;
                preceding[edge.target] = Some(v);
            }
        }
    }

    (preceding, cost)
}

/// Walks the predecessor chain back from `end` and returns the
/// start-to-end path with its total cost.
pub(crate) fn unwind(preceding: &[Option<usize>], cost: &[f64], end: usize) -> (Vec<usize>, f64) {
    let mut path = vec![end];
    let mut v = end;
    while let Some(p) = preceding[v] {
        path.push(p);
        v = p;
    }
    path.reverse();
    (path, cost[end])
}

/// Computes the shortest path between two vertices.
///
/// Returns the vertex-index sequence from `start` to `end` (inclusive) and
/// its total weight. Fails with [`Error::VertexOutOfRange`] on an invalid
/// index and [`Error::DisconnectedGraph`] when `end` is unreachable.
pub fn shortest_path(graph: &Graph, start: usize, end: usize) -> Result<(Vec<usize>, f64)> {
    let n = graph.vertex_count();
    for index in [start, end] {
        if index >= n {
            return Err(Error::VertexOutOfRange { index, len: n });
        }
    }
    let (preceding, cost) = scan_tree(graph, start);
    if cost[end].is_infinite() {
        return Err(Error::DisconnectedGraph);
    }
    Ok(unwind(&preceding, &cost, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Position, Vertex};

    /// The reference road network: six intersections, nine roads.
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

    #[test]
    fn test_reference_costs_match_hand_computed() {
        let graph = reference_graph();
        let expected = [
            (0, 1, 3.0),
            (0, 2, 4.0),
            (0, 3, 6.0),
            (0, 4, 3.0),
            (0, 5, 5.0),
            (1, 2, 1.0),
            (1, 3, 3.0),
            (1, 4, 4.0),
            (1, 5, 2.0),
            (2, 3, 2.0),
            (2, 4, 3.0),
            (2, 5, 1.0),
            (3, 4, 3.0),
            (3, 5, 1.0),
            (4, 5, 2.0),
        ];
        for (a, b, want) in expected {
            let (_, forward) = shortest_path(&graph, a, b).unwrap();
            let (_, backward) = shortest_path(&graph, b, a).unwrap();
            assert_eq!(forward, want, "cost {a} -> {b}");
            assert_eq!(backward, want, "cost {b} -> {a}");
        }
    }

    #[test]
    fn test_unique_paths() {
        let graph = reference_graph();
        // Pairs whose shortest path is unique, immune to tie-breaking.
        let (path, _) = shortest_path(&graph, 0, 1).unwrap();
        assert_eq!(path, vec![0, 1]);
        let (path, _) = shortest_path(&graph, 0, 2).unwrap();
        assert_eq!(path, vec![0, 1, 2]);
        let (path, _) = shortest_path(&graph, 2, 3).unwrap();
        assert_eq!(path, vec![2, 5, 3]);
        let (path, _) = shortest_path(&graph, 1, 5).unwrap();
        assert_eq!(path, vec![1, 2, 5]);
    }

    #[test]
    fn test_path_to_self() {
        let graph = reference_graph();
        let (path, cost) = shortest_path(&graph, 3, 3).unwrap();
        assert_eq!(path, vec![3]);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_out_of_range() {
        let graph = reference_graph();
        assert_eq!(
            shortest_path(&graph, 0, 6).unwrap_err(),
            crate::error::Error::VertexOutOfRange { index: 6, len: 6 }
        );
    }

    #[test]
    fn test_unreachable() {
        let mut graph = Graph::new();
        for i in 0..4 {
            graph
                .add_vertex(Vertex::new(Position::new(i as f64, 0.0)))
                .unwrap();
        }
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();
        assert_eq!(
            shortest_path(&graph, 0, 3).unwrap_err(),
            crate::error::Error::DisconnectedGraph
        );
    }

    #[test]
    fn test_parallel_edges_do_not_shorten() {
        let mut graph = Graph::new();
        for i in 0..3 {
            graph
                .add_vertex(Vertex::new(Position::new(i as f64, 0.0)))
                .unwrap();
        }
        graph.add_edge(0, 1, 2.0).unwrap();
        graph.add_edge(0, 1, 2.0).unwrap();
        graph.add_edge(1, 2, 2.0).unwrap();
        let (path, cost) = shortest_path(&graph, 0, 2).unwrap();
        assert_eq!(path, vec![0, 1, 2]);
        assert_eq!(cost, 4.0);
    }
}
