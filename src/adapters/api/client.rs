//! Clinic REST API client
//!
//! This module defines the [`ClinicApi`] trait that abstracts the clinic
//! backend, and [`ClinicClient`], the production implementation over HTTP.
//! The trait is the seam the rest of the crate depends on, so tests can
//! substitute a canned backend without a server.

use super::models::{ApiMessage, CreatedAppointment};
use crate::config::ApiConfig;
use crate::domain::ids::{AppointmentId, DentistId, PatientId};
use crate::domain::{ApiError, Appointment, Dentist, OdontoError, Patient, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use std::time::Duration;

/// Trait for the clinic backend's REST contract
///
/// Patient and dentist writes are upserts keyed by CPF on the backend:
/// "update" repeats the create call, so there is no distinct update
/// operation for them. Deletes carry no cascade — removing a referenced
/// record is exactly the dangling-reference case enrichment handles.
#[async_trait]
pub trait ClinicApi: Send + Sync {
    /// Fetch the full patient roster
    async fn list_patients(&self) -> Result<Vec<Patient>>;

    /// Fetch a single patient by id
    async fn get_patient(&self, id: PatientId) -> Result<Patient>;

    /// Create or overwrite a patient, keyed by CPF
    async fn upsert_patient(&self, patient: &Patient) -> Result<ApiMessage>;

    /// Delete a patient by id
    async fn delete_patient(&self, id: PatientId) -> Result<ApiMessage>;

    /// Fetch the full dentist roster
    async fn list_dentists(&self) -> Result<Vec<Dentist>>;

    /// Fetch a single dentist by id
    async fn get_dentist(&self, id: DentistId) -> Result<Dentist>;

    /// Create or overwrite a dentist, keyed by CPF
    async fn upsert_dentist(&self, dentist: &Dentist) -> Result<ApiMessage>;

    /// Delete a dentist by id
    async fn delete_dentist(&self, id: DentistId) -> Result<ApiMessage>;

    /// Fetch all appointments
    async fn list_appointments(&self) -> Result<Vec<Appointment>>;

    /// Create an appointment, returning its assigned id
    async fn create_appointment(&self, appointment: &Appointment) -> Result<CreatedAppointment>;

    /// Replace an appointment by id
    async fn update_appointment(&self, id: AppointmentId, appointment: &Appointment)
        -> Result<()>;

    /// Delete an appointment by id
    async fn delete_appointment(&self, id: AppointmentId) -> Result<ApiMessage>;
}

/// Production [`ClinicApi`] implementation over HTTP
pub struct ClinicClient {
    base_url: String,
    client: Client,
    config: ApiConfig,
}

impl ClinicClient {
    /// Create a new client from the API configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds.min(30)))
            .build()
            .map_err(|e| {
                OdontoError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url,
            client,
            config: config.clone(),
        })
    }

    /// Base URL the client was configured with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retry a request with exponential backoff
    ///
    /// Only transient failures (connection, timeout, 5xx) are retried;
    /// 4xx responses and undecodable bodies come back immediately.
    async fn retry_request<F, T, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let max_retries = self.config.retry.max_retries;
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    let retryable = matches!(&e, OdontoError::Api(api) if api.is_retryable());
                    attempt += 1;
                    if !retryable || attempt >= max_retries {
                        return Err(e);
                    }

                    let delay_ms = (self.config.retry.initial_delay_ms as f64
                        * self
                            .config
                            .retry
                            .backoff_multiplier
                            .powf((attempt - 1) as f64)) as u64;
                    let delay_ms = delay_ms.min(self.config.retry.max_delay_ms);

                    tracing::warn!(
                        attempt = attempt,
                        max_retries = max_retries,
                        delay_ms = delay_ms,
                        error = %e,
                        "Retrying request after error"
                    );

                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.retry_request(|| async {
            let resp = self
                .client
                .get(self.url(path))
                .send()
                .await
                .map_err(map_transport_error)?;
            decode(check_status(resp, path).await?).await
        })
        .await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        self.retry_request(|| async {
            let resp = self
                .client
                .post(self.url(path))
                .json(body)
                .send()
                .await
                .map_err(map_transport_error)?;
            decode(check_status(resp, path).await?).await
        })
        .await
    }

    async fn delete_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.retry_request(|| async {
            let resp = self
                .client
                .delete(self.url(path))
                .send()
                .await
                .map_err(map_transport_error)?;
            decode(check_status(resp, path).await?).await
        })
        .await
    }
}

/// Map transport-level failures into domain errors
fn map_transport_error(e: reqwest::Error) -> OdontoError {
    if e.is_timeout() {
        OdontoError::Api(ApiError::Timeout(e.to_string()))
    } else {
        OdontoError::Api(ApiError::ConnectionFailed(e.to_string()))
    }
}

/// Map non-2xx responses into domain errors, passing 2xx through
async fn check_status(resp: Response, path: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let err = if status == StatusCode::NOT_FOUND {
        ApiError::NotFound(path.to_string())
    } else if status.is_client_error() {
        ApiError::ClientError {
            status: status.as_u16(),
            message: body,
        }
    } else {
        ApiError::ServerError {
            status: status.as_u16(),
            message: body,
        }
    };
    Err(OdontoError::Api(err))
}

/// Decode a JSON response body
async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T> {
    resp.json::<T>()
        .await
        .map_err(|e| OdontoError::Api(ApiError::InvalidResponse(e.to_string())))
}

#[async_trait]
impl ClinicApi for ClinicClient {
    async fn list_patients(&self) -> Result<Vec<Patient>> {
        tracing::debug!("Fetching patient roster");
        self.get_json("/pacientes").await
    }

    async fn get_patient(&self, id: PatientId) -> Result<Patient> {
        self.get_json(&format!("/pacientes/{id}")).await
    }

    async fn upsert_patient(&self, patient: &Patient) -> Result<ApiMessage> {
        tracing::debug!(cpf = %patient.cpf, "Upserting patient");
        self.post_json("/pacientes", patient).await
    }

    async fn delete_patient(&self, id: PatientId) -> Result<ApiMessage> {
        tracing::debug!(patient_id = %id, "Deleting patient");
        self.delete_json(&format!("/pacientes/{id}")).await
    }

    async fn list_dentists(&self) -> Result<Vec<Dentist>> {
        tracing::debug!("Fetching dentist roster");
        self.get_json("/dentistas").await
    }

    async fn get_dentist(&self, id: DentistId) -> Result<Dentist> {
        self.get_json(&format!("/dentistas/{id}")).await
    }

    async fn upsert_dentist(&self, dentist: &Dentist) -> Result<ApiMessage> {
        tracing::debug!(cpf = %dentist.cpf, "Upserting dentist");
        self.post_json("/dentistas", dentist).await
    }

    async fn delete_dentist(&self, id: DentistId) -> Result<ApiMessage> {
        tracing::debug!(dentist_id = %id, "Deleting dentist");
        self.delete_json(&format!("/dentistas/{id}")).await
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        tracing::debug!("Fetching appointments");
        self.get_json("/consultas").await
    }

    async fn create_appointment(&self, appointment: &Appointment) -> Result<CreatedAppointment> {
        tracing::debug!(
            patient_id = %appointment.patient_id,
            dentist_id = %appointment.dentist_id,
            date = %appointment.date,
            "Creating appointment"
        );
        self.post_json("/consultas", appointment).await
    }

    async fn update_appointment(
        &self,
        id: AppointmentId,
        appointment: &Appointment,
    ) -> Result<()> {
        tracing::debug!(appointment_id = %id, "Updating appointment");
        let path = format!("/consultas/{id}");
        self.retry_request(|| async {
            let resp = self
                .client
                .put(self.url(&path))
                .json(appointment)
                .send()
                .await
                .map_err(map_transport_error)?;
            check_status(resp, &path).await?;
            Ok(())
        })
        .await
    }

    async fn delete_appointment(&self, id: AppointmentId) -> Result<ApiMessage> {
        tracing::debug!(appointment_id = %id, "Deleting appointment");
        self.delete_json(&format!("/consultas/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryConfig;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
            retry: RetryConfig {
                max_retries: 1,
                ..RetryConfig::default()
            },
        }
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = ClinicClient::new(&config("http://localhost:5000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/pacientes"), "http://localhost:5000/pacientes");
    }
}
