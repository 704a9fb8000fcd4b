//! Heating and cooling degree day counts.
//!
//! Classification is a threshold test on the day's mean temperature
//! against [`DEGREE_DAY_BASE_C`]; counting groups the classified days by
//! year; the combined table is an inner join of the two groupings.

use std::collections::BTreeMap;

use crate::model::{DEGREE_DAY_BASE_C, DegreeDayRow, Observation, YearCount};

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// True when the day counts as a heating degree day: mean temperature
/// strictly below the base.
pub fn is_heating_day(obs: &Observation) -> bool {
    obs.meantemp < DEGREE_DAY_BASE_C
}

/// True when the day counts as a cooling degree day: mean temperature at
/// or above the base. Exact complement of [`is_heating_day`]: a day at
/// exactly the base temperature is a cooling day.
pub fn is_cooling_day(obs: &Observation) -> bool {
    obs.meantemp >= DEGREE_DAY_BASE_C
}

// ---------------------------------------------------------------------------
// Per-year grouping
// ---------------------------------------------------------------------------

/// Days per year matching `keep`, ascending by year. Years with no
/// matching day get no bucket at all, not a zero bucket.
fn counts_by_year(observations: &[Observation], keep: fn(&Observation) -> bool) -> Vec<YearCount> {
    let mut buckets: BTreeMap<i32, u32> = BTreeMap::new();
    for obs in observations.iter().filter(|obs| keep(obs)) {
        *buckets.entry(obs.year).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// Heating degree days per year.
pub fn heating_counts(observations: &[Observation]) -> Vec<YearCount> {
    counts_by_year(observations, is_heating_day)
}

/// Cooling degree days per year.
pub fn cooling_counts(observations: &[Observation]) -> Vec<YearCount> {
    counts_by_year(observations, is_cooling_day)
}

// ---------------------------------------------------------------------------
// Combined table
// ---------------------------------------------------------------------------

/// Inner join of the heating and cooling groupings on year, ascending
/// by year.
///
/// A year present in only one grouping gets no row: a year whose every
/// day was below the base has heating counts but no cooling bucket, and
/// is absent from the combined table.
pub fn combine(heating: &[YearCount], cooling: &[YearCount]) -> Vec<DegreeDayRow> {
    let cooling_by_year: BTreeMap<i32, u32> =
        cooling.iter().map(|yc| (yc.year, yc.count)).collect();

    let mut rows: Vec<DegreeDayRow> = heating
        .iter()
        .filter_map(|h| {
            cooling_by_year.get(&h.year).map(|&cdd| DegreeDayRow {
                year: h.year,
                hdd: h.count,
                cdd,
            })
        })
        .collect();

    rows.sort_by_key(|row| row.year);
    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(year: i32, meantemp: f64) -> Observation {
        Observation {
            year,
            month: 1,
            day: 1,
            meantemp,
            mintemp: meantemp - 5.0,
            maxtemp: meantemp + 5.0,
            precipitation: 0.0,
        }
    }

    // --- Classification boundary -------------------------------------------

    #[test]
    fn test_day_exactly_at_base_is_a_cooling_day() {
        // The boundary is < 18 vs >= 18; exactly 18.0 falls on the
        // cooling side, never both, never neither.
        let at_base = obs(2020, 18.0);
        assert!(!is_heating_day(&at_base), "18.0 °C must not count as heating");
        assert!(is_cooling_day(&at_base), "18.0 °C must count as cooling");
    }

    #[test]
    fn test_every_day_falls_in_exactly_one_class() {
        for meantemp in [-30.0, 0.0, 17.999, 18.0, 18.001, 45.0] {
            let day = obs(2020, meantemp);
            assert_ne!(
                is_heating_day(&day),
                is_cooling_day(&day),
                "{} °C must be classified as exactly one of heating/cooling",
                meantemp
            );
        }
    }

    // --- Grouping -----------------------------------------------------------

    #[test]
    fn test_counts_group_by_year_ascending() {
        let observations = vec![
            obs(2021, 5.0),
            obs(2019, 10.0),
            obs(2019, 12.0),
            obs(2021, 30.0), // cooling, should not be counted
        ];

        let heating = heating_counts(&observations);
        assert_eq!(
            heating,
            vec![
                YearCount { year: 2019, count: 2 },
                YearCount { year: 2021, count: 1 },
            ]
        );
    }

    #[test]
    fn test_year_with_no_qualifying_days_gets_no_bucket() {
        let observations = vec![obs(2020, 25.0)]; // all cooling
        assert!(
            heating_counts(&observations).is_empty(),
            "no heating day anywhere means no heating buckets, not a zero bucket"
        );
        assert_eq!(cooling_counts(&observations).len(), 1);
    }

    // --- Inner join ---------------------------------------------------------

    #[test]
    fn test_combine_keeps_only_years_present_in_both_groupings() {
        // 2020 has both classes; 2021 is all-heating and must be dropped.
        let observations = vec![obs(2020, 10.0), obs(2020, 25.0), obs(2021, 5.0)];

        let combined = combine(
            &heating_counts(&observations),
            &cooling_counts(&observations),
        );

        assert_eq!(
            combined,
            vec![DegreeDayRow { year: 2020, hdd: 1, cdd: 1 }],
            "a year entirely below the base must not appear in the combined table"
        );
    }

    #[test]
    fn test_combine_rows_ascend_by_year() {
        let heating = vec![
            YearCount { year: 2022, count: 3 },
            YearCount { year: 2020, count: 1 },
        ];
        let cooling = vec![
            YearCount { year: 2020, count: 4 },
            YearCount { year: 2022, count: 2 },
        ];

        let combined = combine(&heating, &cooling);
        assert_eq!(
            combined,
            vec![
                DegreeDayRow { year: 2020, hdd: 1, cdd: 4 },
                DegreeDayRow { year: 2022, hdd: 3, cdd: 2 },
            ]
        );
    }

    #[test]
    fn test_combine_of_disjoint_groupings_is_empty() {
        let heating = vec![YearCount { year: 2019, count: 7 }];
        let cooling = vec![YearCount { year: 2020, count: 7 }];
        assert!(combine(&heating, &cooling).is_empty());
    }
}
