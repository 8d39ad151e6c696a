//! Command implementations
//!
//! One module per command group. Exit code convention: 0 success, 2
//! configuration or input error, 4 connection error, 5 fatal.

pub mod appointments;
pub mod dashboard;
pub mod dentists;
pub mod init;
pub mod patients;
pub mod validate;

use crate::adapters::api::ClinicClient;
use crate::config::{load_config, OdontoConfig};

/// Loads the configuration and builds the REST client
///
/// Returns the exit code to use when either step fails, after printing the
/// failure the way every command reports it.
pub(crate) fn connect(config_path: &str) -> Result<(OdontoConfig, ClinicClient), i32> {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            println!("❌ Failed to load configuration file");
            println!("   Error: {e}");
            return Err(2);
        }
    };

    let client = match ClinicClient::new(&config.api) {
        Ok(c) => c,
        Err(e) => {
            println!("❌ Failed to build API client");
            println!("   Error: {e}");
            return Err(2);
        }
    };

    Ok((config, client))
}

/// Asks the operator for a yes/no confirmation
///
/// Anything other than `y` (case-insensitive) is a no.
pub(crate) fn confirm(prompt: &str) -> anyhow::Result<bool> {
    use std::io::{self, Write};

    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Renders an ISO date as `dd/MM/yyyy`, falling back to the raw string
pub(crate) fn format_date(date: &str) -> String {
    match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}
