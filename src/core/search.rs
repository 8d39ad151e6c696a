//! Roster search predicates
//!
//! Client-side list filtering for the patient and dentist management
//! screens. Name, email and specialty match case-insensitively; the CPF
//! matches as a plain substring of the stored form, so a punctuated search
//! finds punctuated records.

use crate::domain::{Dentist, Patient};

/// Filters the patient roster by a free-text term
///
/// Matches on name, CPF substring, or email. An empty term returns the
/// roster unchanged; order is preserved.
pub fn search_patients(patients: &[Patient], term: &str) -> Vec<Patient> {
    if term.is_empty() {
        return patients.to_vec();
    }
    let lowered = term.to_lowercase();
    patients
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&lowered)
                || p.cpf.as_str().contains(term)
                || p.email.to_lowercase().contains(&lowered)
        })
        .cloned()
        .collect()
}

/// Filters the dentist roster by a free-text term
///
/// Matches on name, CPF substring, or specialty. An empty term returns the
/// roster unchanged; order is preserved.
pub fn search_dentists(dentists: &[Dentist], term: &str) -> Vec<Dentist> {
    if term.is_empty() {
        return dentists.to_vec();
    }
    let lowered = term.to_lowercase();
    dentists
        .iter()
        .filter(|d| {
            d.name.to_lowercase().contains(&lowered)
                || d.cpf.as_str().contains(term)
                || d.specialty.to_lowercase().contains(&lowered)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{DentistId, PatientId};
    use crate::domain::Cpf;

    fn patients() -> Vec<Patient> {
        vec![
            Patient {
                id: Some(PatientId::new(1)),
                name: "Ana Silva".to_string(),
                phone: "1199".to_string(),
                email: "ana@example.com".to_string(),
                cpf: Cpf::new("123.456.789-09").unwrap(),
            },
            Patient {
                id: Some(PatientId::new(2)),
                name: "Bruno Costa".to_string(),
                phone: "1198".to_string(),
                email: "bruno@clinica.com.br".to_string(),
                cpf: Cpf::new("11122233344").unwrap(),
            },
        ]
    }

    fn dentists() -> Vec<Dentist> {
        vec![
            Dentist {
                id: Some(DentistId::new(1)),
                name: "Dr. Souza".to_string(),
                specialty: "Ortodontia".to_string(),
                cpf: Cpf::new("98765432100").unwrap(),
            },
            Dentist {
                id: Some(DentistId::new(2)),
                name: "Dra. Lima".to_string(),
                specialty: "Endodontia".to_string(),
                cpf: Cpf::new("55566677788").unwrap(),
            },
        ]
    }

    #[test]
    fn test_empty_term_returns_all() {
        assert_eq!(search_patients(&patients(), "").len(), 2);
        assert_eq!(search_dentists(&dentists(), "").len(), 2);
    }

    #[test]
    fn test_patient_name_match_is_case_insensitive() {
        let found = search_patients(&patients(), "ana");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ana Silva");
    }

    #[test]
    fn test_patient_cpf_substring_match() {
        let found = search_patients(&patients(), "456.789");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ana Silva");
    }

    #[test]
    fn test_patient_email_match() {
        let found = search_patients(&patients(), "CLINICA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bruno Costa");
    }

    #[test]
    fn test_dentist_specialty_match() {
        let found = search_dentists(&dentists(), "endo");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Dra. Lima");
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(search_patients(&patients(), "zzz").is_empty());
        assert!(search_dentists(&dentists(), "zzz").is_empty());
    }
}
