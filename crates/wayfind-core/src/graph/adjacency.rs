//! Adjacency-list graph model, immutable after construction.

use std::collections::HashMap;

use super::types::Edge;

/// A directed weighted graph keyed by node identifier.
///
/// Built once from a declared node list and edge list; read-only thereafter.
/// Every declared node gets an adjacency entry (possibly empty). Lookups for
/// unknown identifiers return an empty edge slice rather than failing, which
/// is the tolerant read behavior traversal relies on.
#[derive(Debug, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    /// Builds the adjacency list from declared nodes and `(from, to, cost)`
    /// edge triples.
    ///
    /// Edge order within a node's entry follows input order. An edge whose
    /// source was never declared gets no adjacency entry and is therefore
    /// never traversable; such edges are dropped silently rather than
    /// rejected, since well-formedness is the ingestion layer's concern.
    #[must_use]
    pub fn build(nodes: Vec<String>, edges: Vec<(String, String, f64)>) -> Self {
        let mut adjacency: HashMap<String, Vec<Edge>> = HashMap::with_capacity(nodes.len());
        for node in nodes {
            adjacency.entry(node).or_default();
        }

        for (from, to, cost) in edges {
            if let Some(out) = adjacency.get_mut(&from) {
                out.push(Edge::new(to, cost));
            }
        }

        Self { adjacency }
    }

    /// Ordered outgoing edges of `node`.
    ///
    /// Empty for a node with no outgoing edges and for an unknown id; never
    /// an error.
    #[must_use]
    pub fn out_edges(&self, node: &str) -> &[Edge] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Returns true if `node` was declared when the graph was built.
    #[must_use]
    pub fn has_node(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of declared nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of traversable edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
