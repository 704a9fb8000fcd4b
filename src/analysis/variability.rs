//! Top-N days by temperature range.

use crate::model::{DaySpread, Observation};

/// The `n` widest daily temperature ranges, widest first.
///
/// `delta = maxtemp - mintemp`, signed: bad input with an inverted
/// min/max yields a negative range that sorts to the bottom without any
/// validation. The sort is stable and descending, so days with equal
/// ranges keep their input order. Returns `min(n, observations.len())`
/// rows.
pub fn most_variable(observations: &[Observation], n: usize) -> Vec<DaySpread> {
    let mut spreads: Vec<DaySpread> = observations
        .iter()
        .map(|obs| DaySpread {
            year: obs.year,
            month: obs.month,
            day: obs.day,
            delta: obs.maxtemp - obs.mintemp,
        })
        .collect();

    spreads.sort_by(|a, b| b.delta.total_cmp(&a.delta));
    spreads.truncate(n);
    spreads
}
