//! Observation store access.
//!
//! The store is an external collaborator: a PostgreSQL database holding one
//! `daily_weather` row per calendar day. This module owns the only
//! connection in the program, opened once, read to completion, and dropped
//! on every exit path. Nothing here writes.

use postgres::{Client, NoTls};

use crate::logging::{self, DataSource};
use crate::model::{Observation, StoreError};

// ---------------------------------------------------------------------------
// Locator and schema expectations
// ---------------------------------------------------------------------------

/// Default locator, used when `DATABASE_URL` is set neither in the
/// environment nor in a `.env` file.
pub const DEFAULT_LOCATOR: &str = "postgres://climate@localhost/climate_db";

/// Table expected to hold the observations.
const OBSERVATION_TABLE: &str = "daily_weather";

/// Columns the pipeline reads.
const OBSERVATION_COLUMNS: [&str; 7] = [
    "year",
    "month",
    "day",
    "meantemp",
    "mintemp",
    "maxtemp",
    "precipitation",
];

// ---------------------------------------------------------------------------
// Connection
// ---------------------------------------------------------------------------

/// Resolve the locator and open a connection to the store.
pub fn connect() -> Result<Client, StoreError> {
    dotenv::dotenv().ok();
    let locator =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_LOCATOR.to_string());

    Client::connect(&locator, NoTls).map_err(|e| StoreError::Unavailable(e.to_string()))
}

/// Connect, then check that the observation table and every expected
/// column exist before any query runs.
///
/// A reachable store with the wrong shape fails here with
/// [`StoreError::SchemaMismatch`] naming what is missing, so the report
/// run aborts before producing any output.
pub fn connect_and_verify() -> Result<Client, StoreError> {
    let mut client = connect()?;

    let rows = client
        .query(
            "SELECT column_name::text FROM information_schema.columns WHERE table_name = $1",
            &[&OBSERVATION_TABLE],
        )
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    if rows.is_empty() {
        return Err(StoreError::SchemaMismatch(format!(
            "table `{}` not found in store",
            OBSERVATION_TABLE
        )));
    }

    let present: Vec<String> = rows.iter().map(|row| row.get(0)).collect();
    let missing: Vec<&str> = OBSERVATION_COLUMNS
        .iter()
        .copied()
        .filter(|col| !present.iter().any(|p| p == col))
        .collect();

    if !missing.is_empty() {
        return Err(StoreError::SchemaMismatch(format!(
            "table `{}` is missing columns: {}",
            OBSERVATION_TABLE,
            missing.join(", ")
        )));
    }

    logging::debug(DataSource::Store, "schema verified");
    Ok(client)
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// Materialize every observation in the store, ordered by calendar date.
///
/// The ordering fixes the input order seen by downstream aggregation,
/// which is what makes top-N tie-breaking reproducible across runs.
pub fn fetch_observations(client: &mut Client) -> Result<Vec<Observation>, StoreError> {
    let query = "
        SELECT year, month, day, meantemp, mintemp, maxtemp, precipitation
        FROM daily_weather
        ORDER BY year, month, day
    ";

    let rows = client
        .query(query, &[])
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    let mut observations = Vec::with_capacity(rows.len());
    for row in rows {
        observations.push(Observation {
            year: get_column(&row, 0)?,
            month: get_column(&row, 1)?,
            day: get_column(&row, 2)?,
            meantemp: get_column(&row, 3)?,
            mintemp: get_column(&row, 4)?,
            maxtemp: get_column(&row, 5)?,
            precipitation: get_column(&row, 6)?,
        });
    }

    logging::info(
        DataSource::Store,
        &format!("loaded {} observations", observations.len()),
    );

    Ok(observations)
}

/// A column that exists but cannot be read at the expected Rust type is a
/// schema mismatch, not an availability failure.
fn get_column<'a, T: postgres::types::FromSql<'a>>(
    row: &'a postgres::Row,
    idx: usize,
) -> Result<T, StoreError> {
    row.try_get(idx).map_err(|e| {
        StoreError::SchemaMismatch(format!(
            "column `{}`: {}",
            OBSERVATION_COLUMNS[idx], e
        ))
    })
}
