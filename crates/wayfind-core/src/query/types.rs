//! Query and answer value types.

use serde::{Deserialize, Serialize};

use crate::graph::Path;

/// The kind of path question a query asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Enumerate every simple path between the two nodes.
    AllPaths,
    /// Find the minimum-total-cost path between the two nodes.
    Cheapest,
}

/// One path query: a `(start, end)` pair tagged with a kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    /// What is being asked.
    pub kind: QueryKind,
    /// Start node identifier.
    pub start: String,
    /// End node identifier.
    pub end: String,
}

impl Query {
    /// Creates a query of the given kind between `start` and `end`.
    #[must_use]
    pub fn new(kind: QueryKind, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            kind,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns true if both endpoints are present.
    ///
    /// A query with a blank start or end is never dispatched and produces no
    /// answer entry.
    #[must_use]
    pub fn is_dispatchable(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }
}

/// The result payload of one answered query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every simple path discovered; empty when the nodes are unconnected.
    AllPaths(Vec<Path>),
    /// The minimum-cost path, or `None` when no connecting path exists.
    /// Not-found is a valid answer value, never an error.
    Cheapest(Option<Path>),
}

/// One entry of an answer set, naming its originating query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Kind of the originating query.
    pub kind: QueryKind,
    /// Start node of the originating query.
    pub start: String,
    /// End node of the originating query.
    pub end: String,
    /// The computed result.
    pub outcome: Outcome,
}

/// The collected answers of one batch.
///
/// Holds exactly one entry per dispatched query. Entry order reflects worker
/// completion and carries no meaning; use [`AnswerSet::find`] to key into the
/// set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl AnswerSet {
    /// Number of answers in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if the batch produced no answers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates the answers in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Answer> {
        self.answers.iter()
    }

    /// Looks up the answer for `(kind, start, end)`.
    #[must_use]
    pub fn find(&self, kind: QueryKind, start: &str, end: &str) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|a| a.kind == kind && a.start == start && a.end == end)
    }

    /// Consumes the set, returning the underlying answers.
    #[must_use]
    pub fn into_vec(self) -> Vec<Answer> {
        self.answers
    }
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        Self { answers }
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.iter()
    }
}
