//! Shortest paths over the multigraph.
//!
//! Two layers:
//!
//! - [`shortest_path`]: one single-source Dijkstra run answering a single
//!   start/end query.
//! - [`ConnectionCache`]: amortized all-pairs lookup restricted to the
//!   odd-degree vertices of a graph snapshot. A cache miss runs one full
//!   Dijkstra from the start vertex and fills every still-missing entry
//!   for that vertex in the same pass, storing the reversed path for the
//!   mirror direction.
//!
//! The Dijkstra variant selects the next vertex by scanning the whole
//! tentative-cost array (O(V²)); at road-network scale this beats heap
//! bookkeeping and keeps tie-breaking tied to index order.

mod cache;
mod dijkstra;

pub use cache::{Connection, ConnectionCache};
pub use dijkstra::shortest_path;

pub(crate) use dijkstra::{scan_tree, unwind};
