//! # EventPoll Core
//!
//! Domain types and pure logic for the EventPoll scheduling poll: the fixed
//! schedule catalog, preference models, and the vote aggregator that turns
//! the persisted preference set into an ordered per-slot tally.
//!
//! This crate performs no I/O. Persistence lives in `eventpoll-db` and the
//! HTTP surface in `eventpoll-api`.

/// Error types shared across the workspace
pub mod errors;
/// Domain models and request/response types
pub mod models;

/// The fixed schedule of votable slots
pub mod catalog;
/// Vote aggregation for the stacked-bar chart view
pub mod tally;
