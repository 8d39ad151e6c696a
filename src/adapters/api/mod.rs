//! Clinic backend adapter
//!
//! The REST collaborator contract ([`ClinicApi`]) and its HTTP
//! implementation ([`ClinicClient`]).

pub mod client;
pub mod models;

pub use client::{ClinicApi, ClinicClient};
pub use models::{ApiMessage, CreatedAppointment};
