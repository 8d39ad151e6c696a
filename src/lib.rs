//! # odonto - clinic scheduling CLI
//!
//! odonto is a command-line companion for a dental clinic's scheduling REST
//! API. It fetches the patient, dentist and appointment collections, joins
//! them in memory, and renders a filterable appointment table and a
//! dashboard with summary counts and the next upcoming appointments.
//!
//! ## Architecture
//!
//! odonto follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (snapshot loading, schedule aggregation, roster search)
//! - [`adapters`] - The clinic backend's REST client
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use odonto::adapters::api::ClinicClient;
//! use odonto::config::OdontoConfig;
//! use odonto::core::schedule::upcoming;
//! use odonto::core::ClinicSnapshot;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration and build the REST client
//!     let config = odonto::config::load_config("odonto.toml")?;
//!     let client = ClinicClient::new(&config.api)?;
//!
//!     // Fetch the three collections concurrently
//!     let snapshot = ClinicSnapshot::load(&client).await?;
//!
//!     // Next three upcoming appointments, soonest first
//!     let now = chrono::Local::now().naive_local();
//!     for entry in upcoming(&snapshot.enriched(), now, 3) {
//!         println!("{} com {}", entry.patient_label(), entry.dentist_label());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## The aggregation pipeline
//!
//! The heart of the crate is [`core::schedule`]: pure functions that join
//! appointments against the rosters by id, filter them for the table's
//! search box, project the upcoming slice for the dashboard, and count the
//! raw collections. Data problems degrade per record — an appointment whose
//! patient was deleted renders a `Paciente ID: n` fallback, and one whose
//! date doesn't parse is left out of the upcoming view — so one bad record
//! never takes down a whole screen.
//!
//! ## Error Handling
//!
//! odonto uses the [`domain::OdontoError`] type for all library errors:
//!
//! ```rust,no_run
//! use odonto::domain::OdontoError;
//!
//! fn example() -> Result<(), OdontoError> {
//!     let config = odonto::config::load_config("odonto.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! odonto uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Loading snapshot");
//! warn!(patient_id = 10, "Dangling patient reference");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
