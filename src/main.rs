//! Single-shot climate report over the daily observation store.
//!
//! No flags, no stdin: the target year and the store locator default are
//! compiled in. On any store error the run aborts with a non-zero exit
//! and nothing on stdout.

use std::process::ExitCode;

use climate_report::db;
use climate_report::logging::{self, DataSource, LogLevel};
use climate_report::report;

/// Report year for the precipitation total.
const TARGET_YEAR: i32 = 2020;

fn main() -> ExitCode {
    logging::init_logger(LogLevel::Info, None, false);

    // Connection handle stays scoped to main: dropped (and the session
    // closed) on every exit path, success or failure.
    let mut client = match db::connect_and_verify() {
        Ok(client) => client,
        Err(e) => {
            logging::error(DataSource::Store, &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    match report::run(&mut client, TARGET_YEAR) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            logging::error(DataSource::Report, &e.to_string());
            ExitCode::FAILURE
        }
    }
}
