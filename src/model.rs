//! Core data types for the climate observation report service.
//!
//! This module defines the shared domain model imported by all other modules.
//! It contains no logic and no I/O, only types.

// ---------------------------------------------------------------------------
// Degree-day classification
// ---------------------------------------------------------------------------

/// Base temperature for degree-day classification, in degrees Celsius.
///
/// A day whose mean temperature is below this base is a heating degree day;
/// a day at or above it is a cooling degree day. The two classes partition
/// every observation set: never both, never neither.
pub const DEGREE_DAY_BASE_C: f64 = 18.0;

// ---------------------------------------------------------------------------
// Observation types
// ---------------------------------------------------------------------------

/// A single daily weather observation from the store.
///
/// One row of the `daily_weather` table. The calendar date is stored as
/// three separate integer columns and is consumed that way throughout the
/// pipeline; no combined date type is needed.
///
/// Assumed, not enforced: one observation per calendar day, and
/// `mintemp <= maxtemp`.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    /// Mean temperature, degrees Celsius.
    pub meantemp: f64,
    /// Minimum temperature, degrees Celsius.
    pub mintemp: f64,
    /// Maximum temperature, degrees Celsius.
    pub maxtemp: f64,
    /// Daily precipitation, millimeters. Non-negative by convention.
    pub precipitation: f64,
}

// ---------------------------------------------------------------------------
// Aggregate row types
// ---------------------------------------------------------------------------

/// One per-year grouping bucket: how many days of one degree-day class
/// fell in `year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCount {
    pub year: i32,
    pub count: u32,
}

/// One row of the combined degree-day table.
///
/// Produced by an inner join of the heating and cooling groupings. A year
/// present in only one of the two does not get a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeDayRow {
    pub year: i32,
    pub hdd: u32,
    pub cdd: u32,
}

/// A day's temperature range, kept with its date for the variability table.
///
/// `delta` is signed: a row whose stored minimum exceeds its maximum comes
/// out negative and sorts to the bottom on its own, so no validation pass
/// is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySpread {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub delta: f64,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when reaching or reading the observation store.
///
/// Both variants are fatal: the report is all-or-nothing, and no partial
/// output is ever emitted. An empty store or an empty filter result is
/// not an error anywhere in the pipeline.
#[derive(Debug)]
pub enum StoreError {
    /// The locator did not resolve to a readable store, or a read failed.
    Unavailable(String),
    /// The store is reachable but lacks the expected table or columns.
    SchemaMismatch(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
            StoreError::SchemaMismatch(msg) => write!(f, "schema mismatch: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
