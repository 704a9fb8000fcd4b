//! Pure aggregation over a materialized sequence of observations.
//!
//! Each submodule computes one of the report's aggregates. Nothing here
//! does I/O or string formatting; rendering lives in `report`, so every
//! function in this tree is testable without a store and without string
//! comparison.
//!
//! Submodules:
//! - `precipitation`: annual precipitation total.
//! - `degree_days`: heating/cooling day counts per year, inner-joined.
//! - `variability`: top-N days by temperature range.

pub mod degree_days;
pub mod precipitation;
pub mod variability;
