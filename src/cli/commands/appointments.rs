//! Appointment command implementations
//!
//! The appointment table screen and its forms: list with search/filter,
//! schedule, reschedule, cancel.

use super::{confirm, connect, format_date};
use crate::adapters::api::ClinicApi;
use crate::core::schedule::{filter_for_search, upcoming, SearchFilter};
use crate::core::ClinicSnapshot;
use crate::domain::ids::{AppointmentId, DentistId, PatientId};
use crate::domain::Appointment;
use chrono::Local;
use clap::{Args, Subcommand};

/// Appointment subcommands
#[derive(Subcommand, Debug)]
pub enum AppointmentsCommand {
    /// List appointments with optional search and filters
    List(ListArgs),

    /// Schedule a new appointment
    Schedule(ScheduleArgs),

    /// Change the date, time or notes of an existing appointment
    Reschedule(RescheduleArgs),

    /// Cancel (delete) an appointment
    Cancel(CancelArgs),
}

impl AppointmentsCommand {
    /// Execute the subcommand
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match self {
            AppointmentsCommand::List(args) => args.execute(config_path).await,
            AppointmentsCommand::Schedule(args) => args.execute(config_path).await,
            AppointmentsCommand::Reschedule(args) => args.execute(config_path).await,
            AppointmentsCommand::Cancel(args) => args.execute(config_path).await,
        }
    }
}

/// Arguments for `appointments list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Free-text search over patient name, dentist name and notes
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only appointments with this dentist id
    #[arg(long)]
    pub dentist: Option<i64>,

    /// Only appointments with this patient id
    #[arg(long)]
    pub patient: Option<i64>,

    /// Only appointments from now on, soonest first
    #[arg(long)]
    pub upcoming: bool,
}

impl ListArgs {
    async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(search = %self.search, "Listing appointments");

        let (_config, client) = match connect(config_path) {
            Ok(pair) => pair,
            Err(code) => return Ok(code),
        };

        let snapshot = match ClinicSnapshot::load(&client).await {
            Ok(s) => s,
            Err(e) => {
                println!("❌ Failed to reach the clinic API");
                println!("   Error: {e}");
                return Ok(4);
            }
        };

        let filter = SearchFilter {
            term: self.search.clone(),
            dentist_id: self.dentist.map(DentistId::new),
            patient_id: self.patient.map(PatientId::new),
        };
        let mut rows = filter_for_search(&snapshot.enriched(), &filter);
        if self.upcoming {
            rows = upcoming(&rows, Local::now().naive_local(), usize::MAX);
        }

        if rows.is_empty() {
            println!("Nenhuma consulta encontrada");
            return Ok(0);
        }

        println!(
            "{:<6} {:<25} {:<25} {:<12} {:<8} {:<30}",
            "ID", "Paciente", "Dentista", "Data", "Hora", "Observações"
        );
        println!("{}", "-".repeat(110));
        for row in &rows {
            let id = row
                .appointment
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<6} {:<25} {:<25} {:<12} {:<8} {:<30}",
                id,
                row.patient_label(),
                row.dentist_label(),
                format_date(&row.appointment.date),
                row.appointment.time,
                row.appointment.notes
            );
        }
        println!();
        println!("{} consulta(s)", rows.len());

        Ok(0)
    }
}

/// Arguments for `appointments schedule`
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Patient id
    #[arg(long)]
    pub patient: i64,

    /// Dentist id
    #[arg(long)]
    pub dentist: i64,

    /// Date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Time, HH:MM
    #[arg(long)]
    pub time: String,

    /// Free-text notes
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl ScheduleArgs {
    async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let appointment = match Appointment::new(
            PatientId::new(self.patient),
            DentistId::new(self.dentist),
            &self.date,
            &self.time,
            &self.notes,
        ) {
            Ok(a) => a,
            Err(e) => {
                println!("❌ {e}");
                return Ok(2);
            }
        };

        let (_config, client) = match connect(config_path) {
            Ok(pair) => pair,
            Err(code) => return Ok(code),
        };

        match client.create_appointment(&appointment).await {
            Ok(created) => {
                tracing::info!(appointment_id = %created.id, "Appointment scheduled");
                println!("✅ Consulta agendada (id {})", created.id);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to schedule appointment");
                println!("   Error: {e}");
                Ok(4)
            }
        }
    }
}

/// Arguments for `appointments reschedule`
#[derive(Args, Debug)]
pub struct RescheduleArgs {
    /// Appointment id
    #[arg(long)]
    pub id: i64,

    /// Patient id
    #[arg(long)]
    pub patient: i64,

    /// Dentist id
    #[arg(long)]
    pub dentist: i64,

    /// Date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Time, HH:MM
    #[arg(long)]
    pub time: String,

    /// Free-text notes
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl RescheduleArgs {
    async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let appointment = match Appointment::new(
            PatientId::new(self.patient),
            DentistId::new(self.dentist),
            &self.date,
            &self.time,
            &self.notes,
        ) {
            Ok(a) => a,
            Err(e) => {
                println!("❌ {e}");
                return Ok(2);
            }
        };

        let (_config, client) = match connect(config_path) {
            Ok(pair) => pair,
            Err(code) => return Ok(code),
        };

        let id = AppointmentId::new(self.id);
        match client.update_appointment(id, &appointment).await {
            Ok(()) => {
                tracing::info!(appointment_id = %id, "Appointment rescheduled");
                println!("✅ Consulta atualizada (id {id})");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to reschedule appointment");
                println!("   Error: {e}");
                Ok(4)
            }
        }
    }
}

/// Arguments for `appointments cancel`
#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Appointment id
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

impl CancelArgs {
    async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let id = AppointmentId::new(self.id);

        if !self.yes && !confirm(&format!("Cancelar a consulta {id}?"))? {
            println!("Operação cancelada.");
            return Ok(0);
        }

        let (_config, client) = match connect(config_path) {
            Ok(pair) => pair,
            Err(code) => return Ok(code),
        };

        match client.delete_appointment(id).await {
            Ok(ack) => {
                tracing::info!(appointment_id = %id, "Appointment cancelled");
                println!("✅ {}", ack.message);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to cancel appointment");
                println!("   Error: {e}");
                Ok(4)
            }
        }
    }
}
