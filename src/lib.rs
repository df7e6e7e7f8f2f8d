//! Approximate solver for the Route Inspection (Chinese Postman) Problem.
//!
//! Given a weighted, undirected multigraph — a road network with
//! intersections as vertices and roads as countable parallel edges — the
//! crate computes a low-cost closed walk that traverses every edge at
//! least once:
//!
//! - **[`graph`]**: the multigraph itself, with symmetric adjacency and
//!   countable parallel edges.
//! - **[`paths`]**: single-source Dijkstra and a memoized all-pairs
//!   shortest-path cache restricted to odd-degree vertices.
//! - **[`ga`]**: a genetic algorithm searching for a low-cost pairing
//!   (matching) of the odd-degree vertices, encoded as permutations.
//! - **[`euler`]**: Hierholzer's algorithm, turning the pairing-augmented
//!   graph into the final Eulerian circuit.
//! - **[`pipeline`]**: the evolve → augment → traverse composition.
//!
//! # Architecture
//!
//! The pipeline is single-threaded and synchronous; every stochastic step
//! takes an explicit random source, so a fixed seed reproduces a run
//! exactly. Callers that need a responsive UI run the whole pipeline on a
//! worker thread and stop it through the polled cancellation flag.
//!
//! ```ignore
//! use postwalk::ga::GaConfig;
//! use postwalk::pipeline;
//!
//! let config = GaConfig::default().with_seed(42);
//! let solution = pipeline::solve(&graph, &config)?;
//! println!("route cost: {}", solution.total_cost);
//! ```

pub mod error;
pub mod euler;
pub mod ga;
pub mod graph;
pub mod paths;
pub mod pipeline;
pub mod random;
