//! Report rendering and orchestration.
//!
//! Aggregation hands back plain structs; everything about presentation
//! (zero-padding, tab separation, section order) lives here.
//! [`build_report`] is the pure core; [`run`] wires the store in front
//! of it.

use postgres::Client;

use crate::analysis::{degree_days, precipitation, variability};
use crate::db;
use crate::logging::{self, DataSource};
use crate::model::{DaySpread, DegreeDayRow, Observation, StoreError};

/// Rows in the variability table.
const TOP_DAYS: usize = 5;

// ---------------------------------------------------------------------------
// Section rendering
// ---------------------------------------------------------------------------

/// `Total precipitation in <year>: <sum> mm`
///
/// The sum uses the default float display: integral totals print without
/// a decimal point (`5`, not `5.0`), fractional totals print at full
/// precision.
fn precipitation_line(year: i32, total_mm: f64) -> String {
    format!("Total precipitation in {}: {} mm", year, total_mm)
}

/// Tab-separated degree-day table: `Year\tHDD\tCDD` header, year and
/// both counts zero-padded to four digits.
fn render_degree_day_table(rows: &[DegreeDayRow]) -> String {
    let mut out = String::from("Year\tHDD\tCDD\n");
    for row in rows {
        out.push_str(&format!("{:04}\t{:04}\t{:04}\n", row.year, row.hdd, row.cdd));
    }
    out
}

/// Variability table: title, `YYYY-MM-DD\tDelta` header, ISO-style
/// zero-padded dates and two-decimal deltas.
fn render_variability_table(spreads: &[DaySpread]) -> String {
    let mut out = String::from("Top 5 Most Variable Days\nYYYY-MM-DD\tDelta\n");
    for spread in spreads {
        out.push_str(&format!(
            "{:04}-{:02}-{:02}\t{:.2}\n",
            spread.year, spread.month, spread.day, spread.delta
        ));
    }
    out
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Assemble the full report text over a materialized observation set.
///
/// Pure: same observations in, byte-identical text out. An empty set
/// renders the precipitation line with a zero total and both tables
/// header-only.
pub fn build_report(observations: &[Observation], target_year: i32) -> String {
    let total = precipitation::annual_total(observations, target_year);
    let heating = degree_days::heating_counts(observations);
    let cooling = degree_days::cooling_counts(observations);
    let combined = degree_days::combine(&heating, &cooling);
    let spreads = variability::most_variable(observations, TOP_DAYS);

    let mut report = String::new();
    report.push_str(&precipitation_line(target_year, total));
    report.push_str("\n\n");
    report.push_str(&render_degree_day_table(&combined));
    report.push('\n');
    report.push_str(&render_variability_table(&spreads));
    report
}

/// Load every observation from the store and produce the report text.
///
/// Fails fast on any store error; no partial report is ever returned.
pub fn run(client: &mut Client, target_year: i32) -> Result<String, StoreError> {
    let observations = db::fetch_observations(client)?;

    logging::info(
        DataSource::Report,
        &format!(
            "aggregating {} observations for target year {}",
            observations.len(),
            target_year
        ),
    );

    Ok(build_report(&observations, target_year))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precipitation_line_integral_total_prints_bare() {
        assert_eq!(
            precipitation_line(2020, 5.0),
            "Total precipitation in 2020: 5 mm"
        );
    }

    #[test]
    fn test_precipitation_line_fractional_total_keeps_precision() {
        assert_eq!(
            precipitation_line(2020, 12.75),
            "Total precipitation in 2020: 12.75 mm"
        );
    }

    #[test]
    fn test_degree_day_rows_are_zero_padded_to_four_digits() {
        let rows = vec![DegreeDayRow { year: 987, hdd: 12, cdd: 3 }];
        assert_eq!(
            render_degree_day_table(&rows),
            "Year\tHDD\tCDD\n0987\t0012\t0003\n"
        );
    }

    #[test]
    fn test_degree_day_table_with_no_rows_is_header_only() {
        assert_eq!(render_degree_day_table(&[]), "Year\tHDD\tCDD\n");
    }

    #[test]
    fn test_variability_rows_use_iso_dates_and_two_decimals() {
        let spreads = vec![DaySpread { year: 2020, month: 1, day: 9, delta: 25.0 }];
        assert_eq!(
            render_variability_table(&spreads),
            "Top 5 Most Variable Days\nYYYY-MM-DD\tDelta\n2020-01-09\t25.00\n"
        );
    }

    #[test]
    fn test_variability_table_with_no_rows_is_header_only() {
        assert_eq!(
            render_variability_table(&[]),
            "Top 5 Most Variable Days\nYYYY-MM-DD\tDelta\n"
        );
    }
}
