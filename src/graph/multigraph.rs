//! The multigraph container and its mutation operations.

use super::types::{Edge, Position, Vertex};
use crate::error::{Error, Result};
use std::fmt;
use std::ops::Index;

/// Weighted undirected multigraph with positional vertex indices.
///
/// Vertices are addressed by their position in the insertion order
/// (`0..vertex_count()`); removing a vertex shifts every higher index down
/// by one, and every stored edge target is rewritten accordingly. All edge
/// mutations are applied symmetrically to both endpoints, so adjacency is
/// always mirror-consistent.
///
/// `Clone` produces a fully independent deep copy — callers clone before
/// destructive work such as augmentation or Euler traversal.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    vertices: Vec<Vertex>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by adding the given vertices in order, applying the
    /// usual validation (unique positions, in-range edge targets, no
    /// conflicting parallels).
    pub fn from_vertices(vertices: Vec<Vertex>) -> Result<Self> {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of roads, parallel roads counted individually.
    pub fn edge_count(&self) -> u32 {
        let incident: u32 = self.vertices.iter().map(Vertex::degree).sum();
        incident / 2
    }

    /// Total incident multiplicity of the vertex at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn degree(&self, index: usize) -> u32 {
        self.vertices[index].degree()
    }

    /// The vertex at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Iterates over the vertices in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Whether a vertex with this position exists.
    pub fn contains_vertex(&self, position: Position) -> bool {
        self.index_of(position).is_some()
    }

    /// Index of the vertex with this position, if any.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.vertices.iter().position(|v| v.position() == position)
    }

    /// Indices of all vertices with odd total edge multiplicity.
    pub fn odd_vertices(&self) -> Vec<usize> {
        (0..self.vertices.len())
            .filter(|&i| self.vertices[i].degree() % 2 != 0)
            .collect()
    }

    /// The edge record between `from` and `to`, if one exists.
    pub fn edge(&self, from: usize, to: usize) -> Option<&Edge> {
        self.vertices.get(from).and_then(|v| v.edge(to))
    }

    /// Whether an edge between `from` and `to` exists.
    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.edge(from, to).is_some()
    }

    /// Adds a vertex, mirroring its initial edge list onto the endpoints it
    /// references.
    ///
    /// Fails with [`Error::DuplicateVertex`] if the position is taken, with
    /// [`Error::VertexOutOfRange`] if any edge targets a vertex that does
    /// not exist yet (the new vertex itself included), and with
    /// [`Error::DuplicateEdge`] on conflicting-weight parallels inside the
    /// provided list. Returns the index of the new vertex.
    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<usize> {
        if self.contains_vertex(vertex.position()) {
            return Err(Error::DuplicateVertex {
                position: vertex.position(),
            });
        }
        let index = self.vertices.len();
        let edges = normalize_edges(vertex.edges().to_vec(), index, index)?;
        self.vertices
            .push(Vertex::with_edges(vertex.position(), edges.clone()));
        for edge in edges {
            // Cannot conflict: the target has no edge to a brand-new index.
            self.vertices[edge.target].merge_edge(Edge::with_count(index, edge.weight, edge.count));
        }
        Ok(index)
    }

    /// Replaces the edge list of the vertex at `index`, dropping the old
    /// mirrored records and mirroring the new list.
    pub fn update_vertex(&mut self, index: usize, edges: Vec<Edge>) -> Result<()> {
        self.check_index(index)?;
        let edges = normalize_edges(edges, self.vertices.len(), index)?;
        let old_targets: Vec<usize> = self.vertices[index]
            .edges()
            .iter()
            .map(|e| e.target)
            .collect();
        for target in old_targets {
            self.vertices[target].drop_edge_record(index);
        }
        self.vertices[index].set_edges(edges.clone());
        for edge in edges {
            self.vertices[edge.target].merge_edge(Edge::with_count(index, edge.weight, edge.count));
        }
        Ok(())
    }

    /// Removes the vertex at `index` together with every edge pointing at
    /// it, then shifts all higher vertex indices down by one.
    pub fn remove_vertex(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.vertices.remove(index);
        for vertex in &mut self.vertices {
            vertex.drop_edge_record(index);
            vertex.shift_targets_above(index);
        }
        Ok(())
    }

    /// Adds one road between `from` and `to`.
    ///
    /// An existing equal-weight record has its count incremented; a
    /// differing weight is rejected with [`Error::DuplicateEdge`].
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<()> {
        self.check_endpoints(from, to)?;
        if !self.vertices[from].merge_edge(Edge::new(to, weight)) {
            return Err(Error::DuplicateEdge { from, to });
        }
        self.vertices[to].merge_edge(Edge::new(from, weight));
        Ok(())
    }

    /// Replaces the weight and count of the edge between `from` and `to`.
    pub fn update_edge(&mut self, from: usize, to: usize, weight: f64, count: u32) -> Result<()> {
        self.check_endpoints(from, to)?;
        if count == 0 {
            return Err(Error::InvalidEdgeCount);
        }
        if !self.vertices[from].replace_edge(to, weight, count) {
            return Err(Error::EdgeNotFound { from, to });
        }
        self.vertices[to].replace_edge(from, weight, count);
        Ok(())
    }

    /// Adds one to the multiplicity of the edge between `from` and `to`.
    /// This is the augmentation primitive: duplicating a road along a
    /// shortest path.
    pub fn increment_edge_count(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_endpoints(from, to)?;
        if !self.vertices[from].bump_edge(to, 1) {
            return Err(Error::EdgeNotFound { from, to });
        }
        self.vertices[to].bump_edge(from, 1);
        Ok(())
    }

    /// Removes one road between `from` and `to`, deleting the record when
    /// its count reaches zero.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_endpoints(from, to)?;
        if !self.vertices[from].remove_edge(to) {
            return Err(Error::EdgeNotFound { from, to });
        }
        self.vertices[to].remove_edge(from);
        Ok(())
    }

    /// Whether every vertex is reachable from vertex 0.
    ///
    /// Empty and single-vertex graphs count as connected. An isolated
    /// vertex in a larger graph does not: the route-inspection pipeline
    /// requires one component.
    pub fn is_connected(&self) -> bool {
        let n = self.vertices.len();
        if n <= 1 {
            return true;
        }
        let mut visited = vec![false; n];
        let mut stack = vec![0usize];
        visited[0] = true;
        let mut seen = 1usize;
        while let Some(v) = stack.pop() {
            for edge in self.vertices[v].edges() {
                if !visited[edge.target] {
                    visited[edge.target] = true;
                    seen += 1;
                    stack.push(edge.target);
                }
            }
        }
        seen == n
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.vertices.len() {
            return Err(Error::VertexOutOfRange {
                index,
                len: self.vertices.len(),
            });
        }
        Ok(())
    }

    fn check_endpoints(&self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Err(Error::SelfConnection { index: from });
        }
        Ok(())
    }
}

/// Merges duplicate targets (summing equal-weight counts), then validates
/// ranges, multiplicities, and the no-self-loop rule. `len` is the vertex
/// count the targets must stay below; `own` is the index of the vertex the
/// list belongs to.
fn normalize_edges(edges: Vec<Edge>, len: usize, own: usize) -> Result<Vec<Edge>> {
    let mut merged: Vec<Edge> = Vec::with_capacity(edges.len());
    for edge in edges {
        if edge.target >= len {
            return Err(Error::VertexOutOfRange {
                index: edge.target,
                len,
            });
        }
        if edge.target == own {
            return Err(Error::SelfConnection { index: own });
        }
        if edge.count == 0 {
            return Err(Error::InvalidEdgeCount);
        }
        match merged.iter_mut().find(|e| e.target == edge.target) {
            None => merged.push(edge),
            Some(existing) if existing.weight == edge.weight => existing.count += edge.count,
            Some(_) => {
                return Err(Error::DuplicateEdge {
                    from: own,
                    to: edge.target,
                })
            }
        }
    }
    Ok(merged)
}

impl Index<usize> for Graph {
    type Output = Vertex;

    fn index(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            writeln!(f, "{vertex}")?;
        }
        Ok(())
    }
}
