//! Appointment search filtering
//!
//! The predicate behind the appointment table's search box and the two id
//! dropdowns. All criteria AND together; an empty criterion matches
//! everything; output order equals input order.

use super::enrich::EnrichedAppointment;
use crate::domain::ids::{DentistId, PatientId};

/// Filter criteria for the appointment table
///
/// The default value matches everything.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Free-text term, matched case-insensitively against the resolved
    /// patient name, resolved dentist name, and notes
    pub term: String,

    /// Restrict to appointments referencing this dentist
    pub dentist_id: Option<DentistId>,

    /// Restrict to appointments referencing this patient
    pub patient_id: Option<PatientId>,
}

impl SearchFilter {
    /// Filter on a free-text term only
    pub fn term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    fn matches(&self, enriched: &EnrichedAppointment) -> bool {
        let matches_term = if self.term.is_empty() {
            true
        } else {
            let term = self.term.to_lowercase();
            // Unresolved references contribute an empty string, never a panic
            let patient_name = enriched
                .patient
                .as_ref()
                .map(|p| p.name.to_lowercase())
                .unwrap_or_default();
            let dentist_name = enriched
                .dentist
                .as_ref()
                .map(|d| d.name.to_lowercase())
                .unwrap_or_default();

            patient_name.contains(&term)
                || dentist_name.contains(&term)
                || enriched.appointment.notes.to_lowercase().contains(&term)
        };

        // Id criteria compare against the appointment's own foreign keys, so
        // they work even when resolution failed
        let matches_dentist = self
            .dentist_id
            .map(|id| enriched.appointment.dentist_id == id)
            .unwrap_or(true);
        let matches_patient = self
            .patient_id
            .map(|id| enriched.appointment.patient_id == id)
            .unwrap_or(true);

        matches_term && matches_dentist && matches_patient
    }
}

/// Applies the filter to an enriched appointment list
///
/// Stable: survivors keep their input order. Pure function.
pub fn filter_for_search(
    enriched: &[EnrichedAppointment],
    filter: &SearchFilter,
) -> Vec<EnrichedAppointment> {
    enriched
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schedule::enrich::enrich;
    use crate::domain::ids::AppointmentId;
    use crate::domain::{Appointment, Cpf, Dentist, Patient};

    fn fixture() -> Vec<EnrichedAppointment> {
        let patients = vec![
            Patient {
                id: Some(PatientId::new(10)),
                name: "Ana Silva".to_string(),
                phone: "1199".to_string(),
                email: "ana@example.com".to_string(),
                cpf: Cpf::new("12345678909").unwrap(),
            },
            Patient {
                id: Some(PatientId::new(11)),
                name: "Bruno Costa".to_string(),
                phone: "1198".to_string(),
                email: "bruno@example.com".to_string(),
                cpf: Cpf::new("11122233344").unwrap(),
            },
        ];
        let dentists = vec![Dentist {
            id: Some(DentistId::new(20)),
            name: "Dr. Souza".to_string(),
            specialty: "Ortodontia".to_string(),
            cpf: Cpf::new("98765432100").unwrap(),
        }];
        let appointments = vec![
            Appointment {
                id: Some(AppointmentId::new(1)),
                patient_id: PatientId::new(10),
                dentist_id: DentistId::new(20),
                date: "2025-01-10".to_string(),
                time: "09:00".to_string(),
                notes: "Limpeza".to_string(),
            },
            Appointment {
                id: Some(AppointmentId::new(2)),
                patient_id: PatientId::new(11),
                dentist_id: DentistId::new(20),
                date: "2025-01-11".to_string(),
                time: "10:00".to_string(),
                notes: "Canal".to_string(),
            },
            // Dangling patient reference
            Appointment {
                id: Some(AppointmentId::new(3)),
                patient_id: PatientId::new(99),
                dentist_id: DentistId::new(20),
                date: "2025-01-12".to_string(),
                time: "11:00".to_string(),
                notes: "Retorno".to_string(),
            },
        ];
        enrich(&appointments, &patients, &dentists)
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let enriched = fixture();
        let filtered = filter_for_search(&enriched, &SearchFilter::default());
        assert_eq!(filtered, enriched);
    }

    #[test]
    fn test_term_matches_patient_name_case_insensitively() {
        let filtered = filter_for_search(&fixture(), &SearchFilter::term("ana"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].patient_label(), "Ana Silva");
    }

    #[test]
    fn test_term_matches_dentist_name_and_notes() {
        // Every appointment shares the dentist
        assert_eq!(filter_for_search(&fixture(), &SearchFilter::term("souza")).len(), 3);
        // Only one has this note
        assert_eq!(filter_for_search(&fixture(), &SearchFilter::term("canal")).len(), 1);
    }

    #[test]
    fn test_term_on_dangling_reference_does_not_panic() {
        let filtered = filter_for_search(&fixture(), &SearchFilter::term("retorno"));
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].patient.is_none());
    }

    #[test]
    fn test_id_filters_use_foreign_keys() {
        let filter = SearchFilter {
            patient_id: Some(PatientId::new(99)),
            ..SearchFilter::default()
        };
        // Filtering by a dangling id still works: the predicate reads the
        // appointment's own foreign key, not the resolution result
        let filtered = filter_for_search(&fixture(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].appointment.patient_id, PatientId::new(99));
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let filter = SearchFilter {
            term: "souza".to_string(),
            dentist_id: Some(DentistId::new(20)),
            patient_id: Some(PatientId::new(11)),
        };
        let filtered = filter_for_search(&fixture(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].patient_label(), "Bruno Costa");
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter_for_search(&fixture(), &SearchFilter::term("zzz")).is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let filter = SearchFilter {
            dentist_id: Some(DentistId::new(20)),
            ..SearchFilter::default()
        };
        let filtered = filter_for_search(&fixture(), &filter);
        let ids: Vec<_> = filtered.iter().map(|e| e.appointment.id.unwrap().as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
