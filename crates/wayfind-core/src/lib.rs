//! # Wayfind Core
//!
//! In-memory path query engine for directed, weighted graphs.
//!
//! Wayfind answers two kinds of path queries: enumerate every simple path
//! between two nodes, and find the minimum-total-cost path between two nodes.
//! Queries arrive in batches; each batch is answered concurrently against a
//! shared read-only graph and re-aggregated into a single answer set.
//!
//! ## Quick Start
//!
//! ```rust
//! use wayfind_core::graph::traversal::{all_paths, cheapest_path};
//! use wayfind_core::graph::Graph;
//! use wayfind_core::query::{answer_batch, Query, QueryKind};
//!
//! let graph = Graph::build(
//!     vec!["a".into(), "b".into(), "c".into()],
//!     vec![
//!         ("a".into(), "b".into(), 10.0),
//!         ("b".into(), "c".into(), 5.0),
//!         ("a".into(), "c".into(), 40.0),
//!     ],
//! );
//!
//! let paths = all_paths(&graph, "a", "c");
//! assert_eq!(paths.len(), 2);
//!
//! let cheapest = cheapest_path(&graph, "a", "c").expect("connected");
//! assert_eq!(cheapest.nodes(), ["a", "b", "c"]);
//!
//! let batch = vec![Query::new(QueryKind::Cheapest, "a", "c")];
//! let answers = answer_batch(&graph, &batch);
//! assert_eq!(answers.len(), 1);
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod config;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod query;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, Path};
pub use ingest::{EdgeDef, GraphDef, NodeDef};
pub use query::{answer_batch, Answer, AnswerSet, Outcome, Query, QueryKind};
