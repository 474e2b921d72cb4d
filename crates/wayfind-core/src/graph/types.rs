//! Value types for graph storage and traversal results.

use serde::{Deserialize, Serialize};

/// A directed, weighted arc owned by its source node's adjacency entry.
///
/// Carries only the destination and the traversal cost; the source is implied
/// by which adjacency entry owns the edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    to: String,
    cost: f64,
}

impl Edge {
    /// Creates an edge to `to` with the given non-negative cost.
    ///
    /// Cost validation happens at ingestion; this constructor trusts its
    /// input.
    #[must_use]
    pub fn new(to: impl Into<String>, cost: f64) -> Self {
        Self {
            to: to.into(),
            cost,
        }
    }

    /// Destination node identifier.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Traversal cost of this edge.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// A simple path from a start node to an end node.
///
/// Produced by traversal, immutable once returned. Holds the ordered node
/// identifiers and the sum of traversed edge costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<String>,
    total_cost: f64,
}

impl Path {
    /// Creates a path from its node sequence and accumulated cost.
    #[must_use]
    pub fn new(nodes: Vec<String>, total_cost: f64) -> Self {
        Self { nodes, total_cost }
    }

    /// Ordered node identifiers, start first.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Sum of the traversed edge costs.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of nodes on the path (a start == end path has length 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the path holds no nodes.
    ///
    /// Traversal never emits an empty path; this exists for completeness of
    /// the container API.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consumes the path, returning the node sequence.
    #[must_use]
    pub fn into_nodes(self) -> Vec<String> {
        self.nodes
    }
}
