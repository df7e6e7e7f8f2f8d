//! Error types for the route-inspection pipeline.
//!
//! Every failure propagates synchronously to the caller; there are no
//! internal retries. Structural graph errors and configuration errors are
//! caller-recoverable; [`Error::CrossoverExhausted`] and
//! [`Error::NoEulerCircuit`] signal violated internal invariants and
//! indicate a logic defect rather than bad input.

use crate::graph::Position;
use thiserror::Error;

/// Result type alias for postwalk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all postwalk operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A vertex with the same position already exists in the graph.
    #[error("duplicate vertex at position {position}")]
    DuplicateVertex {
        /// Position of the rejected vertex.
        position: Position,
    },

    /// A vertex index does not resolve inside the graph.
    #[error("vertex index {index} out of range (vertex count {len})")]
    VertexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of vertices in the graph.
        len: usize,
    },

    /// An edge between the two vertices already exists with a different
    /// weight. Equal-weight parallels merge by summing counts instead.
    #[error("edge {from} - {to} already exists with a different weight")]
    DuplicateEdge {
        /// First endpoint.
        from: usize,
        /// Second endpoint.
        to: usize,
    },

    /// No edge exists between the two vertices.
    #[error("no edge between {from} and {to}")]
    EdgeNotFound {
        /// First endpoint.
        from: usize,
        /// Second endpoint.
        to: usize,
    },

    /// An edge record was given a multiplicity of zero.
    #[error("edge count must be at least 1")]
    InvalidEdgeCount,

    /// Both endpoints refer to the same vertex.
    #[error("vertex {index} cannot connect to itself")]
    SelfConnection {
        /// The offending vertex index.
        index: usize,
    },

    /// A shortest-path lookup referenced a vertex outside the odd-degree
    /// set of the underlying graph snapshot.
    #[error("vertex {index} does not have odd degree")]
    NotOddVertex {
        /// The offending vertex index.
        index: usize,
    },

    /// The graph is not connected; the pipeline requires every edge to be
    /// reachable from every other.
    #[error("graph is not connected")]
    DisconnectedGraph,

    /// Invalid algorithm configuration, rejected at construction.
    #[error("configuration error: {0}")]
    Config(String),

    /// A genotype was built from a list with repeated entries.
    #[error("genotype entries must be unique")]
    NonUniqueGenes,

    /// A genotype was built from a list of odd length; entries pair up, so
    /// the length must be even.
    #[error("genotype length must be even, got {len}")]
    OddGenotypeLength {
        /// The rejected length.
        len: usize,
    },

    /// Crossover requires both parents to have the same length.
    #[error("crossover parents have different lengths ({left} vs {right})")]
    GenotypeLengthMismatch {
        /// Length of the first parent.
        left: usize,
        /// Length of the second parent.
        right: usize,
    },

    /// The crossover repair loop walked the whole exchange map without
    /// finding an unused value. A well-formed permutation crossover always
    /// terminates, so this is a fatal internal-invariant violation.
    #[error("crossover repair exhausted the exchange map")]
    CrossoverExhausted,

    /// The graph has a vertex with zero or odd total edge multiplicity, so
    /// no Eulerian circuit exists. After correct augmentation this cannot
    /// happen.
    #[error("graph has no Eulerian circuit")]
    NoEulerCircuit,
}
