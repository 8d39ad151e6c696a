//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the clinic's record identifiers.
//! Record ids are backend-assigned integers; the CPF is the Brazilian national
//! identifier the backend uses as the upsert key for patients and dentists.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Patient identifier newtype wrapper
///
/// Represents the backend-assigned id of a patient record. Appointments
/// reference patients through this id, so the newtype keeps patient and
/// dentist ids from being mixed up at compile time.
///
/// # Examples
///
/// ```
/// use odonto::domain::ids::PatientId;
/// use std::str::FromStr;
///
/// let id = PatientId::from_str("10").unwrap();
/// assert_eq!(id.as_i64(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(i64);

impl PatientId {
    /// Creates a new PatientId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the id as an i64
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for PatientId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Dentist identifier newtype wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DentistId(i64);

impl DentistId {
    /// Creates a new DentistId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the id as an i64
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for DentistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DentistId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for DentistId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Appointment identifier newtype wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(i64);

impl AppointmentId {
    /// Creates a new AppointmentId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the id as an i64
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AppointmentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for AppointmentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// CPF (Cadastro de Pessoas Físicas) newtype wrapper
///
/// The Brazilian national identifier carried by patients and dentists. The
/// backend upserts records keyed on the exact CPF string, so the value is
/// stored as entered and never normalised. Two input shapes are accepted,
/// matching the registration form: `000.000.000-00` or 11 bare digits.
///
/// Values arriving from the backend are deserialised without validation;
/// [`Cpf::new`] is the strict entry point for operator input.
///
/// # Examples
///
/// ```
/// use odonto::domain::ids::Cpf;
///
/// let cpf = Cpf::new("123.456.789-09").unwrap();
/// assert_eq!(cpf.digits(), "12345678909");
/// assert!(Cpf::new("123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Creates a new Cpf, validating the format
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither `NNN.NNN.NNN-NN` nor 11
    /// bare digits.
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        let re = Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$|^\d{11}$").unwrap();
        if !re.is_match(&value) {
            return Err(format!(
                "Invalid CPF '{value}'. Use the format 000.000.000-00 or 00000000000"
            ));
        }
        Ok(Self(value))
    }

    /// Returns the CPF exactly as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 11 digits with punctuation stripped
    pub fn digits(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Renders the CPF in the punctuated `NNN.NNN.NNN-NN` form
    pub fn formatted(&self) -> String {
        let d = self.digits();
        if d.len() != 11 {
            return self.0.clone();
        }
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Cpf {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_patient_id_roundtrip() {
        let id = PatientId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(PatientId::from_str("42").unwrap(), id);
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = AppointmentId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: AppointmentId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_from_str_rejects_garbage() {
        assert!(PatientId::from_str("abc").is_err());
        assert!(DentistId::from_str("").is_err());
        assert!(AppointmentId::from_str("1.5").is_err());
    }

    #[test]
    fn test_cpf_accepts_punctuated_form() {
        let cpf = Cpf::new("123.456.789-09").unwrap();
        assert_eq!(cpf.as_str(), "123.456.789-09");
        assert_eq!(cpf.digits(), "12345678909");
    }

    #[test]
    fn test_cpf_accepts_bare_digits() {
        let cpf = Cpf::new("12345678909").unwrap();
        assert_eq!(cpf.formatted(), "123.456.789-09");
    }

    #[test_case("123"; "too short")]
    #[test_case("123.456.789-0"; "truncated check digits")]
    #[test_case("123456789012"; "twelve digits")]
    #[test_case("12345678-909"; "misplaced punctuation")]
    #[test_case("123.456.78909"; "partial punctuation")]
    #[test_case(""; "empty")]
    fn test_cpf_rejects_other_shapes(input: &str) {
        assert!(Cpf::new(input).is_err());
    }

    #[test]
    fn test_cpf_preserves_input_form() {
        // The backend keys upserts on the exact string, so no normalisation
        let punctuated = Cpf::new("123.456.789-09").unwrap();
        let bare = Cpf::new("12345678909").unwrap();
        assert_ne!(punctuated, bare);
        assert_eq!(punctuated.digits(), bare.digits());
    }
}
