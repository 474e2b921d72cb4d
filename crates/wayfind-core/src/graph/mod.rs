//! In-memory directed weighted graph and path traversal.
//!
//! The graph is an adjacency-list mapping from node identifier to ordered
//! outgoing edges, built once from a declared node/edge list and read-only
//! thereafter. Reads need no synchronization, so concurrent query workers
//! share the graph by plain reference.
//!
//! # Example
//!
//! ```rust
//! use wayfind_core::graph::Graph;
//! use wayfind_core::graph::traversal::{all_paths, cheapest_path};
//!
//! let graph = Graph::build(
//!     vec!["a".into(), "b".into(), "c".into()],
//!     vec![
//!         ("a".into(), "b".into(), 1.0),
//!         ("b".into(), "c".into(), 2.0),
//!     ],
//! );
//!
//! let paths = all_paths(&graph, "a", "c");
//! assert_eq!(paths.len(), 1);
//! assert_eq!(paths[0].total_cost(), 3.0);
//! assert!(cheapest_path(&graph, "c", "a").is_none());
//! ```

mod adjacency;
pub mod traversal;
mod types;

#[cfg(test)]
mod types_tests;

pub use adjacency::Graph;
pub use types::{Edge, Path};
