//! Wire acknowledgement types for the clinic backend

use crate::domain::ids::AppointmentId;
use serde::{Deserialize, Serialize};

/// The backend's `{"mensagem": ...}` acknowledgement
///
/// Returned by upserts and deletes, e.g. `Paciente criado`,
/// `Paciente atualizado`, `Dentista deletado`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Human-readable acknowledgement, in Portuguese
    #[serde(rename = "mensagem")]
    pub message: String,
}

/// The backend's response to a newly created appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedAppointment {
    /// The id assigned to the new appointment
    pub id: AppointmentId,
}
