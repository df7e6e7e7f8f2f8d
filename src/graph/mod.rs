//! Weighted undirected multigraph.
//!
//! A [`Graph`] models a road network: [`Vertex`] values are intersections
//! identified by their 2D [`Position`], and [`Edge`] records are roads with
//! a weight and a multiplicity count (parallel roads of equal weight share
//! one record). Adjacency is symmetric — every mutation applied to one
//! endpoint's edge list is mirrored on the other — and the graph is the
//! sole owner of all vertex and edge storage.
//!
//! # Key Types
//!
//! - [`Position`]: vertex identity key (unique within a graph)
//! - [`Edge`]: target index, weight, multiplicity
//! - [`Vertex`]: position plus its ordered edge list
//! - [`Graph`]: the indexed vertex collection with all mutation operations

mod multigraph;
mod types;

pub use multigraph::Graph;
pub use types::{Edge, Position, Vertex};
