//! Fan-out/fan-in batch answering.
//!
//! One scoped worker thread per dispatched query, all reading the shared
//! graph without locking; results flow through a multi-producer channel and
//! are drained once every worker has finished. No partial answer set is ever
//! observable — the scope joins all workers before the drain.

use std::thread;

use crate::graph::traversal::{all_paths, cheapest_path};
use crate::graph::Graph;

use super::types::{Answer, AnswerSet, Outcome, Query, QueryKind};

/// Answers a batch of independent path queries concurrently.
///
/// Queries with a blank start or end are skipped and produce no answer entry.
/// The returned set holds exactly one entry per dispatched query; cross-query
/// order is unspecified since workers complete in any order. An empty batch
/// (or one that is all-blank) yields an empty set.
#[must_use]
pub fn answer_batch(graph: &Graph, queries: &[Query]) -> AnswerSet {
    let dispatched: Vec<&Query> = queries
        .iter()
        .filter(|query| {
            if query.is_dispatchable() {
                true
            } else {
                tracing::debug!(?query, "skipping query with blank endpoint");
                false
            }
        })
        .collect();

    if dispatched.is_empty() {
        return AnswerSet::default();
    }

    // Capacity matches the worker count, so sends never block the scope join.
    let (tx, rx) = crossbeam_channel::bounded(dispatched.len());

    thread::scope(|scope| {
        for &query in &dispatched {
            let tx = tx.clone();
            scope.spawn(move || {
                // The receiver outlives the scope, so the send cannot fail.
                let _ = tx.send(answer_single(graph, query));
            });
        }
    });
    drop(tx);

    rx.into_iter().collect::<Vec<Answer>>().into()
}

/// Answers one query against the graph.
fn answer_single(graph: &Graph, query: &Query) -> Answer {
    let outcome = match query.kind {
        QueryKind::AllPaths => Outcome::AllPaths(all_paths(graph, &query.start, &query.end)),
        QueryKind::Cheapest => Outcome::Cheapest(cheapest_path(graph, &query.start, &query.end)),
    };

    Answer {
        kind: query.kind,
        start: query.start.clone(),
        end: query.end.clone(),
        outcome,
    }
}
