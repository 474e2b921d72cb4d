//! Error types for graph ingestion and configuration.
//!
//! Query outcomes are never errors: a cheapest-path query with no connecting
//! path answers with an explicit not-found value, an all-paths query with no
//! connecting path answers with an empty sequence, and a query missing a
//! start or end node is skipped. Errors here cover the loading path only —
//! reading, parsing, and validating a graph definition, plus configuration.

use thiserror::Error;

/// Result type alias for wayfind operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a graph definition or configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a graph definition file.
    #[error("failed to read graph definition: {0}")]
    Io(#[from] std::io::Error),

    /// The graph definition document is not valid JSON.
    #[error("failed to parse graph definition: {0}")]
    Parse(#[from] serde_json::Error),

    /// The definition is missing its id or name.
    #[error("graph definition must have both an id and a name")]
    MissingIdentity,

    /// The definition declares no nodes at all.
    #[error("graph definition must declare at least one node")]
    NoNodes,

    /// Two nodes share the same identifier.
    #[error("duplicate node id `{0}` in graph definition")]
    DuplicateNode(String),

    /// An edge names a node that was never declared.
    #[error("edge `{edge}` references undeclared node `{node}`")]
    UndeclaredNode {
        /// Identifier of the offending edge.
        edge: String,
        /// The node id that is not declared.
        node: String,
    },

    /// An edge connects a node to itself.
    #[error("edge `{0}` points to itself")]
    SelfLoop(String),

    /// An edge carries a negative cost.
    #[error("edge `{edge}` has negative cost {cost}")]
    NegativeCost {
        /// Identifier of the offending edge.
        edge: String,
        /// The rejected cost value.
        cost: f64,
    },

    /// Configuration could not be assembled or extracted.
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
