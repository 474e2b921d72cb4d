//! Wayfind server library: wire protocol types and request handling.
//!
//! The transport is line-oriented JSON: one request object per input line,
//! one response object per request. The shapes here are the external
//! contract; `wayfind-core` types never appear on the wire directly.

pub mod protocol;

pub use protocol::{
    handle_request, AnswerEntry, CheapestResponse, PathField, PathQuery, PathsResponse,
    QueryEnvelope, Request, Response,
};
