//! Appointment enrichment
//!
//! Joins the appointment list against the patient and dentist rosters by id.
//! The rosters are indexed once per call, so resolution is O(n+m) instead of
//! a scan per appointment. An id that matches nothing is a dangling
//! reference, which is a normal state: the resolved field stays `None` and
//! presentation falls back to the raw id.

use crate::domain::{Appointment, Dentist, Patient};
use std::collections::HashMap;

/// An appointment with its references resolved against the rosters
///
/// Derived view state, never persisted. `patient` / `dentist` are `None`
/// when the referenced record is absent from the loaded roster (deleted
/// record or load-time race).
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedAppointment {
    /// The underlying appointment record
    pub appointment: Appointment,

    /// Resolved patient, absent on a dangling reference
    pub patient: Option<Patient>,

    /// Resolved dentist, absent on a dangling reference
    pub dentist: Option<Dentist>,
}

impl EnrichedAppointment {
    /// Patient name for display, falling back to the raw id
    pub fn patient_label(&self) -> String {
        match &self.patient {
            Some(p) => p.name.clone(),
            None => format!("Paciente ID: {}", self.appointment.patient_id),
        }
    }

    /// Dentist name for display, falling back to the raw id
    pub fn dentist_label(&self) -> String {
        match &self.dentist {
            Some(d) => d.name.clone(),
            None => format!("Dentista ID: {}", self.appointment.dentist_id),
        }
    }
}

/// Resolves each appointment's patient and dentist references by exact id
///
/// Returns one enriched record per input appointment, in input order.
/// Roster ids are unique by the backend's contract; should duplicates ever
/// appear, the first record wins. Roster entries without an id cannot be
/// referenced and are left out of the index. Pure function; tolerates empty
/// inputs.
pub fn enrich(
    appointments: &[Appointment],
    patients: &[Patient],
    dentists: &[Dentist],
) -> Vec<EnrichedAppointment> {
    let patients_by_id: HashMap<_, _> = patients
        .iter()
        .filter_map(|p| p.id.map(|id| (id, p)))
        .fold(HashMap::new(), |mut index, (id, p)| {
            index.entry(id).or_insert(p);
            index
        });

    let dentists_by_id: HashMap<_, _> = dentists
        .iter()
        .filter_map(|d| d.id.map(|id| (id, d)))
        .fold(HashMap::new(), |mut index, (id, d)| {
            index.entry(id).or_insert(d);
            index
        });

    appointments
        .iter()
        .map(|appointment| EnrichedAppointment {
            appointment: appointment.clone(),
            patient: patients_by_id.get(&appointment.patient_id).map(|p| (*p).clone()),
            dentist: dentists_by_id.get(&appointment.dentist_id).map(|d| (*d).clone()),
        })
        .collect()
}
