//! Domain types and models
//!
//! This module contains the core domain types for odonto:
//! - Record types: [`Patient`], [`Dentist`], [`Appointment`]
//! - Identifier newtypes: [`ids`]
//! - Error types: [`errors`]
//! - Result alias: [`result`]

pub mod appointment;
pub mod dentist;
pub mod errors;
pub mod ids;
pub mod patient;
pub mod result;

// Re-export commonly used types
pub use appointment::Appointment;
pub use dentist::Dentist;
pub use errors::{ApiError, OdontoError};
pub use ids::{AppointmentId, Cpf, DentistId, PatientId};
pub use patient::Patient;
pub use result::Result;
