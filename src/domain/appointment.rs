//! Appointment record
//!
//! Appointments carry opaque foreign keys to a patient and a dentist plus a
//! calendar date and a time-of-day, stored as separate zone-less strings the
//! way the backend serves them. The two are combined lazily into a
//! `NaiveDateTime` for ordering; a record whose date or time doesn't parse is
//! simply non-comparable, never an error.

use crate::domain::ids::{AppointmentId, DentistId, PatientId};
use crate::domain::{OdontoError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// An appointment record as exchanged with the backend
///
/// The foreign keys are not checked against the rosters here: deleting a
/// referenced patient or dentist leaves a dangling reference, which is a
/// normal state handled at enrichment time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Backend-assigned id, absent until persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AppointmentId>,

    /// Foreign key to the patient roster
    #[serde(rename = "id_paciente")]
    pub patient_id: PatientId,

    /// Foreign key to the dentist roster
    #[serde(rename = "id_dentista")]
    pub dentist_id: DentistId,

    /// Calendar date, ISO `YYYY-MM-DD`
    #[serde(rename = "data")]
    pub date: String,

    /// Time of day, `HH:MM` or the backend's stringified `HH:MM:SS`
    #[serde(rename = "hora")]
    pub time: String,

    /// Free-text notes
    #[serde(rename = "observacoes", default)]
    pub notes: String,
}

impl Appointment {
    /// Builds an appointment from operator input, validating date and time
    ///
    /// # Errors
    ///
    /// Returns `OdontoError::Validation` when the date is not `YYYY-MM-DD`
    /// or the time is not `HH:MM`.
    pub fn new(
        patient_id: PatientId,
        dentist_id: DentistId,
        date: impl Into<String>,
        time: impl Into<String>,
        notes: impl Into<String>,
    ) -> Result<Self> {
        let date = date.into();
        let time = time.into();

        if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            return Err(OdontoError::Validation(format!(
                "Invalid date '{date}'. Use the format YYYY-MM-DD"
            )));
        }
        if parse_time(&time).is_none() {
            return Err(OdontoError::Validation(format!(
                "Invalid time '{time}'. Use the format HH:MM"
            )));
        }

        Ok(Self {
            id: None,
            patient_id,
            dentist_id,
            date,
            time,
            notes: notes.into(),
        })
    }

    /// Combines date and time into a single orderable instant
    ///
    /// Facility-local wall clock; no time-zone conversion is ever applied,
    /// matching how the two strings were entered. Returns `None` when either
    /// field doesn't parse, making the record non-comparable.
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        let time = parse_time(&self.time)?;
        Some(date.and_time(time))
    }
}

/// Parses `HH:MM` or `HH:MM:SS` (the backend stringifies a Postgres TIME)
fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(date: &str, time: &str) -> Appointment {
        Appointment {
            id: Some(AppointmentId::new(1)),
            patient_id: PatientId::new(10),
            dentist_id: DentistId::new(20),
            date: date.to_string(),
            time: time.to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_scheduled_at_combines_date_and_time() {
        let at = appointment("2025-01-10", "09:00").scheduled_at().unwrap();
        assert_eq!(at.to_string(), "2025-01-10 09:00:00");
    }

    #[test]
    fn test_scheduled_at_accepts_seconds() {
        // Postgres TIME columns come back stringified as HH:MM:SS
        let at = appointment("2025-01-10", "09:30:00").scheduled_at().unwrap();
        assert_eq!(at.to_string(), "2025-01-10 09:30:00");
    }

    #[test]
    fn test_scheduled_at_malformed_is_none() {
        assert!(appointment("not-a-date", "09:00").scheduled_at().is_none());
        assert!(appointment("2025-01-10", "9h").scheduled_at().is_none());
        assert!(appointment("", "").scheduled_at().is_none());
        assert!(appointment("2025-13-40", "09:00").scheduled_at().is_none());
    }

    #[test]
    fn test_new_validates_date_and_time() {
        assert!(
            Appointment::new(PatientId::new(1), DentistId::new(2), "2025-01-10", "09:00", "")
                .is_ok()
        );
        assert!(
            Appointment::new(PatientId::new(1), DentistId::new(2), "10/01/2025", "09:00", "")
                .is_err()
        );
        assert!(
            Appointment::new(PatientId::new(1), DentistId::new(2), "2025-01-10", "morning", "")
                .is_err()
        );
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "id": 1,
            "id_paciente": 10,
            "id_dentista": 20,
            "data": "2025-01-10",
            "hora": "09:00:00",
            "observacoes": "Limpeza",
            "paciente": "Ana",
            "dentista": "Dr. Silva"
        }"#;
        // The listing endpoint embeds joined name strings; unknown keys are ignored
        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.patient_id, PatientId::new(10));
        assert_eq!(appt.dentist_id, DentistId::new(20));
        assert_eq!(appt.notes, "Limpeza");

        let out = serde_json::to_value(&appt).unwrap();
        assert_eq!(out["id_paciente"], 10);
        assert_eq!(out["data"], "2025-01-10");
        assert_eq!(out["hora"], "09:00:00");
    }

    #[test]
    fn test_wire_format_missing_notes_defaults_empty() {
        let json = r#"{"id_paciente": 1, "id_dentista": 2, "data": "2025-01-10", "hora": "09:00"}"#;
        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.notes, "");
        assert_eq!(appt.id, None);
    }
}
