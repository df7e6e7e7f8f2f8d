//! Memoized shortest paths between odd-degree vertices.

use super::{scan_tree, unwind};
use crate::error::{Error, Result};
use crate::graph::Graph;
use std::collections::HashMap;

/// A memoized shortest path: total weight plus the vertex-index sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    weight: f64,
    path: Vec<usize>,
}

impl Connection {
    /// Total path weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The path as vertex indices, start and end inclusive.
    pub fn path(&self) -> &[usize] {
        &self.path
    }
}

/// Lazily filled all-pairs shortest-path matrix over the odd-degree
/// vertices of one graph snapshot.
///
/// The cache snapshots the graph at construction and only ever grows; it
/// must be rebuilt if the underlying graph changes. Lookups take
/// `&mut self`, so sharing an instance across threads without external
/// serialization does not compile.
#[derive(Debug, Clone)]
pub struct ConnectionCache {
    graph: Graph,
    odd: Vec<usize>,
    translate: HashMap<usize, usize>,
    matrix: Vec<Option<Connection>>,
}

impl ConnectionCache {
    /// Snapshots `graph`, collects its odd-degree vertices, and prepares
    /// the (still empty) k×k connection matrix.
    pub fn new(graph: &Graph) -> Self {
        let odd = graph.odd_vertices();
        let translate = odd
            .iter()
            .enumerate()
            .map(|(dense, &vertex)| (vertex, dense))
            .collect();
        let matrix = vec![None; odd.len() * odd.len()];
        Self {
            graph: graph.clone(),
            odd,
            translate,
            matrix,
        }
    }

    /// Indices of the snapshot's odd-degree vertices, in graph order.
    pub fn odd_vertices(&self) -> &[usize] {
        &self.odd
    }

    /// The shortest connection between two distinct odd-degree vertices.
    ///
    /// On a cache miss this runs one full Dijkstra from `start` and caches
    /// a connection for *every* odd vertex still missing one — plus the
    /// mirrored reverse entries — so repeated lookups amortize to one run
    /// per source.
    ///
    /// Fails with [`Error::SelfConnection`] when `start == stop` and with
    /// [`Error::NotOddVertex`] when either vertex is not odd in the
    /// snapshot.
    pub fn get_connection(&mut self, start: usize, stop: usize) -> Result<&Connection> {
        if start == stop {
            return Err(Error::SelfConnection { index: start });
        }
        let row = *self
            .translate
            .get(&start)
            .ok_or(Error::NotOddVertex { index: start })?;
        let col = *self
            .translate
            .get(&stop)
            .ok_or(Error::NotOddVertex { index: stop })?;

        let k = self.odd.len();
        if self.matrix[row * k + col].is_none() {
            let (preceding, cost) = scan_tree(&self.graph, start);
            for dense in 0..k {
                let target = self.odd[dense];
                if target == start || self.matrix[row * k + dense].is_some() {
                    continue;
                }
                if cost[target].is_infinite() {
                    continue;
                }
                let (path, weight) = unwind(&preceding, &cost, target);
                let reversed: Vec<usize> = path.iter().rev().copied().collect();
                self.matrix[row * k + dense] = Some(Connection { weight, path });
                self.matrix[dense * k + row] = Some(Connection {
                    weight,
                    path: reversed,
                });
            }
        }

        // Still missing means the pair spans components; a connected
        // graph never gets here.
        self.matrix[row * k + col]
            .as_ref()
            .ok_or(Error::DisconnectedGraph)
    }
}
