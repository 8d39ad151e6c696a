//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for odonto using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// odonto - clinic scheduling CLI
#[derive(Parser, Debug)]
#[command(name = "odonto")]
#[command(version, about, long_about = None)]
#[command(author = "Odonto Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "odonto.toml", env = "ODONTO_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ODONTO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show summary counts and the next upcoming appointments
    Dashboard(commands::dashboard::DashboardArgs),

    /// Manage appointments
    #[command(subcommand)]
    Appointments(commands::appointments::AppointmentsCommand),

    /// Manage the patient roster
    #[command(subcommand)]
    Patients(commands::patients::PatientsCommand),

    /// Manage the dentist roster
    #[command(subcommand)]
    Dentists(commands::dentists::DentistsCommand),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
