//! Batch reporting over a store of daily weather observations.
//!
//! A linear read-aggregate-print pipeline: open the store once, materialize
//! the full date-ordered observation sequence, compute four independent
//! aggregates (annual precipitation, heating/cooling degree day counts,
//! top-5 temperature ranges), and render them as tab-separated text.
//!
//! Module map:
//! - [`model`]: shared domain types and the error taxonomy.
//! - [`db`]: the external store collaborator (connect, verify, read).
//! - [`analysis`]: pure aggregation, no I/O.
//! - [`report`]: rendering and orchestration.
//! - [`logging`]: stderr diagnostics; stdout carries only report text.
//!
//! The crate is single-threaded throughout. A `postgres::Client` must not
//! be shared across threads without external synchronization.

pub mod analysis;
pub mod db;
pub mod logging;
pub mod model;
pub mod report;
