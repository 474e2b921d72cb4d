//! Graph definition ingestion and validation.
//!
//! A graph definition is a JSON document naming the graph and declaring its
//! nodes and edges. Validation runs once at load time; the in-memory
//! [`Graph`] built from a validated definition is trusted by traversal and
//! never re-validated.
//!
//! ```json
//! {
//!   "id": "g1",
//!   "name": "routes",
//!   "nodes": [{ "id": "a", "name": "alpha" }, { "id": "b", "name": "beta" }],
//!   "edges": [{ "id": "e1", "from": "a", "to": "b", "cost": 1.0 }]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// A declared node: identifier plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDef {
    /// Unique node identifier, referenced by edges and queries.
    pub id: String,
    /// Human-readable name; not used by traversal.
    pub name: String,
}

/// A declared directed edge with its traversal cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDef {
    /// Edge identifier, used in validation error messages.
    pub id: String,
    /// Source node identifier.
    pub from: String,
    /// Destination node identifier.
    pub to: String,
    /// Non-negative traversal cost.
    pub cost: f64,
}

/// The full graph definition document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDef {
    /// Graph identifier.
    pub id: String,
    /// Graph display name.
    pub name: String,
    /// Declared nodes; ids must be unique.
    pub nodes: Vec<NodeDef>,
    /// Declared edges; endpoints must reference declared nodes.
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

impl GraphDef {
    /// Checks the definition's well-formedness rules.
    ///
    /// Rules: id and name present, at least one node, unique node ids, edge
    /// endpoints reference declared nodes, no self-loop edges, non-negative
    /// costs.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a specific [`Error`] variant.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() || self.name.is_empty() {
            return Err(Error::MissingIdentity);
        }
        if self.nodes.is_empty() {
            return Err(Error::NoNodes);
        }

        let mut node_ids: HashSet<&str> = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !node_ids.insert(&node.id) {
                return Err(Error::DuplicateNode(node.id.clone()));
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(Error::UndeclaredNode {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
            if edge.from == edge.to {
                return Err(Error::SelfLoop(edge.id.clone()));
            }
            if edge.cost < 0.0 {
                return Err(Error::NegativeCost {
                    edge: edge.id.clone(),
                    cost: edge.cost,
                });
            }
        }

        Ok(())
    }

    /// Consumes the definition, building the traversable [`Graph`].
    #[must_use]
    pub fn into_graph(self) -> Graph {
        let nodes = self.nodes.into_iter().map(|n| n.id).collect();
        let edges = self
            .edges
            .into_iter()
            .map(|e| (e.from, e.to, e.cost))
            .collect();
        Graph::build(nodes, edges)
    }
}

/// Reads, parses, and validates a graph definition file.
///
/// # Errors
///
/// Returns `Error::Io` when the file cannot be read, `Error::Parse` when the
/// document is not valid JSON, or a validation variant when the definition
/// breaks a well-formedness rule.
pub fn load(path: &FsPath) -> Result<GraphDef> {
    let raw = fs::read_to_string(path)?;
    let def: GraphDef = serde_json::from_str(&raw)?;
    def.validate()?;

    tracing::debug!(
        id = %def.id,
        nodes = def.nodes.len(),
        edges = def.edges.len(),
        "graph definition loaded"
    );

    Ok(def)
}
