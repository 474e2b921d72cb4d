//! Batch path queries and the concurrent answering engine.
//!
//! A batch is an ordered sequence of independent queries; the engine answers
//! each dispatched query on its own worker thread against the shared
//! read-only graph and collects the results into one [`AnswerSet`]. Ordering
//! across answers is not guaranteed — consumers key results by
//! `(kind, start, end)`.

mod engine;
mod types;


pub use engine::answer_batch;
pub use types::{Answer, AnswerSet, Outcome, Query, QueryKind};
