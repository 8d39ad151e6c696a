//! Dashboard summary counts

use crate::domain::{Appointment, Dentist, Patient};

/// Raw collection counts for the dashboard's statistics card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClinicSummary {
    /// Registered patients
    pub patient_count: usize,

    /// Registered dentists
    pub dentist_count: usize,

    /// Scheduled appointments, past and future
    pub appointment_count: usize,
}

/// Counts the three raw collections
///
/// Counts come from the raw inputs, not any enriched or filtered view.
pub fn summarize(
    patients: &[Patient],
    dentists: &[Dentist],
    appointments: &[Appointment],
) -> ClinicSummary {
    ClinicSummary {
        patient_count: patients.len(),
        dentist_count: dentists.len(),
        appointment_count: appointments.len(),
    }
}
