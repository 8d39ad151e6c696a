//! Clinic data snapshot
//!
//! The explicit load entry point: fetch the three collections concurrently,
//! fail fast on the first error, and hand the materialized snapshot to the
//! pure aggregation functions. A snapshot is plain ephemeral view state —
//! commands load a fresh one per invocation and a newer snapshot replaces an
//! older one wholesale.

use crate::adapters::api::ClinicApi;
use crate::core::schedule::{self, ClinicSummary, EnrichedAppointment};
use crate::domain::{Appointment, Dentist, OdontoError, Patient, Result};

/// The three clinic collections, materialized at one point in time
#[derive(Debug, Clone, Default)]
pub struct ClinicSnapshot {
    /// Patient roster
    pub patients: Vec<Patient>,

    /// Dentist roster
    pub dentists: Vec<Dentist>,

    /// All appointments, in backend order
    pub appointments: Vec<Appointment>,
}

impl ClinicSnapshot {
    /// Fetches all three collections concurrently
    ///
    /// The join fails fast: the first fetch to error aborts the load and the
    /// error names which collection failed. No partial snapshot is ever
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error when any of the three fetches fails.
    pub async fn load<A: ClinicApi + ?Sized>(api: &A) -> Result<Self> {
        let (patients, dentists, appointments) = futures::try_join!(
            fetch("patients", api.list_patients()),
            fetch("dentists", api.list_dentists()),
            fetch("appointments", api.list_appointments()),
        )?;

        tracing::debug!(
            patients = patients.len(),
            dentists = dentists.len(),
            appointments = appointments.len(),
            "Loaded clinic snapshot"
        );

        Ok(Self {
            patients,
            dentists,
            appointments,
        })
    }

    /// All appointments joined against the rosters, in backend order
    pub fn enriched(&self) -> Vec<EnrichedAppointment> {
        schedule::enrich(&self.appointments, &self.patients, &self.dentists)
    }

    /// Raw collection counts
    pub fn summary(&self) -> ClinicSummary {
        schedule::summarize(&self.patients, &self.dentists, &self.appointments)
    }
}

/// Attach the collection name to a fetch failure
async fn fetch<T>(
    what: &str,
    fut: impl std::future::Future<Output = Result<T>>,
) -> Result<T> {
    fut.await.map_err(|e| {
        tracing::error!(collection = what, error = %e, "Fetch failed");
        OdontoError::Other(format!("Failed to fetch {what}: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::{ApiMessage, CreatedAppointment};
    use crate::domain::ids::{AppointmentId, Cpf, DentistId, PatientId};
    use crate::domain::ApiError;
    use async_trait::async_trait;

    /// Canned backend for snapshot tests
    struct FakeApi {
        patients: Result<Vec<Patient>>,
        dentists: Result<Vec<Dentist>>,
        appointments: Result<Vec<Appointment>>,
    }

    impl FakeApi {
        fn ok() -> Self {
            Self {
                patients: Ok(vec![Patient {
                    id: Some(PatientId::new(10)),
                    name: "Ana".to_string(),
                    phone: "1199".to_string(),
                    email: "ana@example.com".to_string(),
                    cpf: Cpf::new("12345678909").unwrap(),
                }]),
                dentists: Ok(vec![Dentist {
                    id: Some(DentistId::new(20)),
                    name: "Dr. Silva".to_string(),
                    specialty: "Ortodontia".to_string(),
                    cpf: Cpf::new("98765432100").unwrap(),
                }]),
                appointments: Ok(vec![Appointment {
                    id: Some(AppointmentId::new(1)),
                    patient_id: PatientId::new(10),
                    dentist_id: DentistId::new(20),
                    date: "2025-01-10".to_string(),
                    time: "09:00".to_string(),
                    notes: String::new(),
                }]),
            }
        }
    }

    fn clone_result<T: Clone>(r: &Result<Vec<T>>) -> Result<Vec<T>> {
        match r {
            Ok(v) => Ok(v.clone()),
            Err(e) => Err(OdontoError::Other(e.to_string())),
        }
    }

    #[async_trait]
    impl ClinicApi for FakeApi {
        async fn list_patients(&self) -> Result<Vec<Patient>> {
            clone_result(&self.patients)
        }
        async fn get_patient(&self, _id: PatientId) -> Result<Patient> {
            unimplemented!()
        }
        async fn upsert_patient(&self, _patient: &Patient) -> Result<ApiMessage> {
            unimplemented!()
        }
        async fn delete_patient(&self, _id: PatientId) -> Result<ApiMessage> {
            unimplemented!()
        }
        async fn list_dentists(&self) -> Result<Vec<Dentist>> {
            clone_result(&self.dentists)
        }
        async fn get_dentist(&self, _id: DentistId) -> Result<Dentist> {
            unimplemented!()
        }
        async fn upsert_dentist(&self, _dentist: &Dentist) -> Result<ApiMessage> {
            unimplemented!()
        }
        async fn delete_dentist(&self, _id: DentistId) -> Result<ApiMessage> {
            unimplemented!()
        }
        async fn list_appointments(&self) -> Result<Vec<Appointment>> {
            clone_result(&self.appointments)
        }
        async fn create_appointment(
            &self,
            _appointment: &Appointment,
        ) -> Result<CreatedAppointment> {
            unimplemented!()
        }
        async fn update_appointment(
            &self,
            _id: AppointmentId,
            _appointment: &Appointment,
        ) -> Result<()> {
            unimplemented!()
        }
        async fn delete_appointment(&self, _id: AppointmentId) -> Result<ApiMessage> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_load_joins_all_three_collections() {
        let snapshot = ClinicSnapshot::load(&FakeApi::ok()).await.unwrap();
        assert_eq!(snapshot.patients.len(), 1);
        assert_eq!(snapshot.dentists.len(), 1);
        assert_eq!(snapshot.appointments.len(), 1);

        let enriched = snapshot.enriched();
        assert_eq!(enriched[0].patient_label(), "Ana");

        let summary = snapshot.summary();
        assert_eq!(summary.patient_count, 1);
        assert_eq!(summary.appointment_count, 1);
    }

    #[tokio::test]
    async fn test_load_fails_fast_and_names_the_failing_call() {
        let mut api = FakeApi::ok();
        api.dentists = Err(OdontoError::Api(ApiError::ConnectionFailed(
            "connection refused".to_string(),
        )));

        let err = ClinicSnapshot::load(&api).await.unwrap_err();
        assert!(err.to_string().contains("dentists"));
    }

    #[tokio::test]
    async fn test_load_with_empty_backend() {
        let api = FakeApi {
            patients: Ok(vec![]),
            dentists: Ok(vec![]),
            appointments: Ok(vec![]),
        };
        let snapshot = ClinicSnapshot::load(&api).await.unwrap();
        assert!(snapshot.enriched().is_empty());
        assert_eq!(snapshot.summary().patient_count, 0);
    }
}
