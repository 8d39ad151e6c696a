//! Dentist record

use crate::domain::ids::{Cpf, DentistId};
use crate::domain::{OdontoError, Result};
use serde::{Deserialize, Serialize};

/// A dentist record as exchanged with the backend
///
/// Like [`Patient`](crate::domain::Patient), the backend upserts on CPF and
/// assigns the id on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dentist {
    /// Backend-assigned id, absent until persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DentistId>,

    /// Full name
    #[serde(rename = "nome")]
    pub name: String,

    /// Specialty label (e.g. "Ortodontia")
    #[serde(rename = "especialidade")]
    pub specialty: String,

    /// National identifier, the backend's upsert key
    pub cpf: Cpf,
}

impl Dentist {
    /// Builds a dentist from operator input, enforcing the registration rules
    ///
    /// # Errors
    ///
    /// Returns `OdontoError::Validation` describing the first failing field.
    pub fn new(name: impl Into<String>, specialty: impl Into<String>, cpf: &str) -> Result<Self> {
        let name = name.into();
        let specialty = specialty.into();

        if name.trim().is_empty() {
            return Err(OdontoError::Validation("Name is required".to_string()));
        }
        if specialty.trim().is_empty() {
            return Err(OdontoError::Validation("Specialty is required".to_string()));
        }
        let cpf = Cpf::new(cpf).map_err(OdontoError::Validation)?;

        Ok(Self {
            id: None,
            name,
            specialty,
            cpf,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dentist_new_valid() {
        let dentist = Dentist::new("Dr. Silva", "Ortodontia", "987.654.321-00").unwrap();
        assert_eq!(dentist.id, None);
        assert_eq!(dentist.specialty, "Ortodontia");
    }

    #[test]
    fn test_dentist_new_rejects_missing_fields() {
        assert!(Dentist::new("", "Ortodontia", "12345678909").is_err());
        assert!(Dentist::new("Dr. Silva", "", "12345678909").is_err());
        assert!(Dentist::new("Dr. Silva", "Ortodontia", "12-34").is_err());
    }

    #[test]
    fn test_dentist_wire_format() {
        let json = r#"{"id": 20, "nome": "Dr. Silva", "especialidade": "Endodontia", "cpf": "98765432100"}"#;
        let dentist: Dentist = serde_json::from_str(json).unwrap();
        assert_eq!(dentist.id, Some(DentistId::new(20)));
        assert_eq!(dentist.name, "Dr. Silva");

        let out = serde_json::to_value(&dentist).unwrap();
        assert_eq!(out["especialidade"], "Endodontia");
    }
}
