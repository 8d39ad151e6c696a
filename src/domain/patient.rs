//! Patient record
//!
//! The patient roster entry as the backend serves it. Wire keys are
//! Portuguese (`nome`, `telefone`); field names here are English with serde
//! renames mapping between the two.

use crate::domain::ids::{Cpf, PatientId};
use crate::domain::{OdontoError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A patient record as exchanged with the backend
///
/// `id` is absent until the backend has persisted the record. The backend
/// upserts on CPF, so a patient posted with an already-registered CPF
/// overwrites that record instead of creating a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Backend-assigned id, absent until persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PatientId>,

    /// Full name
    #[serde(rename = "nome")]
    pub name: String,

    /// Contact phone
    #[serde(rename = "telefone")]
    pub phone: String,

    /// Contact email
    pub email: String,

    /// National identifier, the backend's upsert key
    pub cpf: Cpf,
}

impl Patient {
    /// Builds a patient from operator input, enforcing the registration rules
    ///
    /// All fields are required; the CPF must match the accepted formats and
    /// the email must look like an address. Records deserialized from the
    /// backend skip this path.
    ///
    /// # Errors
    ///
    /// Returns `OdontoError::Validation` describing the first failing field.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        cpf: &str,
    ) -> Result<Self> {
        let name = name.into();
        let phone = phone.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(OdontoError::Validation("Name is required".to_string()));
        }
        if phone.trim().is_empty() {
            return Err(OdontoError::Validation("Phone is required".to_string()));
        }
        validate_email(&email)?;
        let cpf = Cpf::new(cpf).map_err(OdontoError::Validation)?;

        Ok(Self {
            id: None,
            name,
            phone,
            email,
            cpf,
        })
    }
}

/// Validates an email address with the registration form's pattern
pub(crate) fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(OdontoError::Validation("Email is required".to_string()));
    }
    let re = Regex::new(r"^(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap();
    if !re.is_match(email) {
        return Err(OdontoError::Validation(format!("Invalid email '{email}'")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_patient_new_valid() {
        let patient =
            Patient::new("Ana Silva", "(11) 98765-4321", "ana@example.com", "12345678909").unwrap();
        assert_eq!(patient.id, None);
        assert_eq!(patient.name, "Ana Silva");
        assert_eq!(patient.cpf.digits(), "12345678909");
    }

    #[test]
    fn test_patient_new_rejects_missing_fields() {
        assert!(Patient::new("", "123", "a@b.com", "12345678909").is_err());
        assert!(Patient::new("Ana", "", "a@b.com", "12345678909").is_err());
        assert!(Patient::new("Ana", "123", "", "12345678909").is_err());
    }

    #[test_case("ana@example.com", true; "plain address")]
    #[test_case("ana.silva+retorno@clinica.com.br", true; "dots and plus tag")]
    #[test_case("ANA@EXAMPLE.COM", true; "uppercase")]
    #[test_case("not-an-email", false; "no at sign")]
    #[test_case("a@b", false; "missing tld")]
    #[test_case("a@b.c", false; "single letter tld")]
    #[test_case("ana silva@example.com", false; "space in local part")]
    fn test_validate_email_cases(email: &str, accepted: bool) {
        assert_eq!(validate_email(email).is_ok(), accepted);
    }

    #[test]
    fn test_patient_new_rejects_bad_cpf() {
        let err = Patient::new("Ana", "123", "a@b.com", "123").unwrap_err();
        assert!(matches!(err, OdontoError::Validation(_)));
    }

    #[test]
    fn test_patient_wire_format() {
        let json = r#"{"id": 10, "nome": "Ana", "telefone": "1199", "email": "ana@x.com", "cpf": "123.456.789-09"}"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.id, Some(PatientId::new(10)));
        assert_eq!(patient.name, "Ana");
        assert_eq!(patient.phone, "1199");

        let out = serde_json::to_value(&patient).unwrap();
        assert_eq!(out["nome"], "Ana");
        assert_eq!(out["telefone"], "1199");
    }

    #[test]
    fn test_patient_serialize_omits_missing_id() {
        let patient = Patient::new("Ana", "123", "a@b.com", "12345678909").unwrap();
        let out = serde_json::to_value(&patient).unwrap();
        assert!(out.get("id").is_none());
    }
}
