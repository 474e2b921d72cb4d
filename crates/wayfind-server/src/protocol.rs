//! Wire shapes for the line-oriented query transport.
//!
//! A request is a batch of query envelopes; each envelope may carry an
//! all-paths question, a cheapest-path question, or both, and each question
//! present is dispatched independently:
//!
//! ```json
//! {"queries": [{"paths": {"start": "a", "end": "g"}},
//!              {"cheapest": {"start": "a", "end": "g"}}]}
//! ```
//!
//! The response mirrors the batch as a set — entry order is unspecified. A
//! cheapest-path answer with no connecting path carries the literal `false`
//! in its `path` field, distinguishing not-found from an empty-but-present
//! value:
//!
//! ```json
//! {"answers": [{"paths": {"from": "a", "to": "g", "paths": [["a","b","d","g"]]}},
//!              {"cheapest": {"from": "a", "to": "g", "path": ["a","b","d","g"]}}]}
//! ```

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use wayfind_core::graph::Graph;
use wayfind_core::query::{answer_batch, Answer, Outcome, Query, QueryKind};

/// A `(start, end)` pair as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuery {
    /// Start node identifier; blank means the question is skipped.
    #[serde(default)]
    pub start: String,
    /// End node identifier; blank means the question is skipped.
    #[serde(default)]
    pub end: String,
}

/// One request entry, holding up to one question of each kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEnvelope {
    /// Enumerate all simple paths between the pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathQuery>,
    /// Find the cheapest path between the pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cheapest: Option<PathQuery>,
}

/// A query batch as read from one input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// The ordered query envelopes of the batch.
    #[serde(default)]
    pub queries: Vec<QueryEnvelope>,
}

/// An all-paths answer on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsResponse {
    /// Start node of the originating query.
    pub from: String,
    /// End node of the originating query.
    pub to: String,
    /// Every discovered node-id sequence; empty when unconnected.
    pub paths: Vec<Vec<String>>,
}

/// A cheapest-path answer on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheapestResponse {
    /// Start node of the originating query.
    pub from: String,
    /// End node of the originating query.
    pub to: String,
    /// The cheapest node-id sequence, or the not-found sentinel.
    pub path: PathField,
}

/// The `path` field of a cheapest-path answer: a node sequence when found,
/// the literal JSON `false` when not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathField {
    /// A connecting path was found.
    Found(Vec<String>),
    /// No connecting path exists; serialized as `false`.
    NotFound,
}

impl Serialize for PathField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathField::Found(nodes) => nodes.serialize(serializer),
            PathField::NotFound => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for PathField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Nodes(Vec<String>),
            Flag(bool),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Nodes(nodes) => Ok(PathField::Found(nodes)),
            Raw::Flag(false) => Ok(PathField::NotFound),
            Raw::Flag(true) => Err(D::Error::custom(
                "cheapest `path` must be a node sequence or false",
            )),
        }
    }
}

/// One response entry, tagged by the kind that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerEntry {
    /// Answer to an all-paths question.
    Paths(PathsResponse),
    /// Answer to a cheapest-path question.
    Cheapest(CheapestResponse),
}

/// The full response to one request line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// One entry per dispatched question, in completion order.
    pub answers: Vec<AnswerEntry>,
}

/// Answers a request against the shared graph.
///
/// Each envelope contributes up to two core queries; blank-endpoint
/// questions are dropped by the engine and produce no response entry.
#[must_use]
pub fn handle_request(graph: &Graph, request: &Request) -> Response {
    let queries = expand_queries(&request.queries);
    let answers = answer_batch(graph, &queries);

    Response {
        answers: answers.iter().map(to_entry).collect(),
    }
}

/// Flattens request envelopes into core queries, preserving arrival order.
fn expand_queries(envelopes: &[QueryEnvelope]) -> Vec<Query> {
    let mut queries = Vec::with_capacity(envelopes.len());
    for envelope in envelopes {
        if let Some(q) = &envelope.paths {
            queries.push(Query::new(QueryKind::AllPaths, q.start.clone(), q.end.clone()));
        }
        if let Some(q) = &envelope.cheapest {
            queries.push(Query::new(QueryKind::Cheapest, q.start.clone(), q.end.clone()));
        }
    }
    queries
}

fn to_entry(answer: &Answer) -> AnswerEntry {
    match &answer.outcome {
        Outcome::AllPaths(paths) => AnswerEntry::Paths(PathsResponse {
            from: answer.start.clone(),
            to: answer.end.clone(),
            paths: paths.iter().map(|p| p.nodes().to_vec()).collect(),
        }),
        Outcome::Cheapest(found) => AnswerEntry::Cheapest(CheapestResponse {
            from: answer.start.clone(),
            to: answer.end.clone(),
            path: found.as_ref().map_or(PathField::NotFound, |p| {
                PathField::Found(p.nodes().to_vec())
            }),
        }),
    }
}
