//! Patient roster command implementations

use super::{confirm, connect};
use crate::adapters::api::ClinicApi;
use crate::core::search::search_patients;
use crate::domain::ids::PatientId;
use crate::domain::Patient;
use clap::{Args, Subcommand};

/// Patient subcommands
#[derive(Subcommand, Debug)]
pub enum PatientsCommand {
    /// List patients with optional search
    List(ListArgs),

    /// Register a patient, or update the one with the same CPF
    Add(AddArgs),

    /// Remove a patient by id
    Remove(RemoveArgs),
}

impl PatientsCommand {
    /// Execute the subcommand
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match self {
            PatientsCommand::List(args) => args.execute(config_path).await,
            PatientsCommand::Add(args) => args.execute(config_path).await,
            PatientsCommand::Remove(args) => args.execute(config_path).await,
        }
    }
}

/// Arguments for `patients list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Free-text search over name, CPF and email
    #[arg(long, default_value = "")]
    pub search: String,
}

impl ListArgs {
    async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_config, client) = match connect(config_path) {
            Ok(pair) => pair,
            Err(code) => return Ok(code),
        };

        let patients = match client.list_patients().await {
            Ok(p) => p,
            Err(e) => {
                println!("❌ Failed to reach the clinic API");
                println!("   Error: {e}");
                return Ok(4);
            }
        };

        let rows = search_patients(&patients, &self.search);
        if rows.is_empty() {
            if self.search.is_empty() {
                println!("Nenhum paciente cadastrado");
            } else {
                println!("Nenhum paciente encontrado");
            }
            return Ok(0);
        }

        println!(
            "{:<6} {:<30} {:<16} {:<18} {:<30}",
            "ID", "Nome", "CPF", "Telefone", "Email"
        );
        println!("{}", "-".repeat(102));
        for patient in &rows {
            let id = patient
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<6} {:<30} {:<16} {:<18} {:<30}",
                id, patient.name, patient.cpf, patient.phone, patient.email
            );
        }
        println!();
        println!("{} paciente(s)", rows.len());

        Ok(0)
    }
}

/// Arguments for `patients add`
///
/// The backend upserts by CPF: adding with an already-registered CPF
/// updates that record instead of creating a new one.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// CPF, 000.000.000-00 or 11 digits
    #[arg(long)]
    pub cpf: String,

    /// Contact phone
    #[arg(long)]
    pub phone: String,

    /// Contact email
    #[arg(long)]
    pub email: String,
}

impl AddArgs {
    async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let patient = match Patient::new(&self.name, &self.phone, &self.email, &self.cpf) {
            Ok(p) => p,
            Err(e) => {
                println!("❌ {e}");
                return Ok(2);
            }
        };

        let (_config, client) = match connect(config_path) {
            Ok(pair) => pair,
            Err(code) => return Ok(code),
        };

        match client.upsert_patient(&patient).await {
            Ok(ack) => {
                tracing::info!(cpf = %patient.cpf, "Patient upserted");
                println!("✅ {}", ack.message);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to save patient");
                println!("   Error: {e}");
                Ok(4)
            }
        }
    }
}

/// Arguments for `patients remove`
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Patient id
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

impl RemoveArgs {
    async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let id = PatientId::new(self.id);

        // Deleting doesn't cascade: appointments referencing this patient
        // keep the id and render the fallback label from then on
        if !self.yes && !confirm(&format!("Excluir o paciente {id}?"))? {
            println!("Operação cancelada.");
            return Ok(0);
        }

        let (_config, client) = match connect(config_path) {
            Ok(pair) => pair,
            Err(code) => return Ok(code),
        };

        match client.delete_patient(id).await {
            Ok(ack) => {
                tracing::info!(patient_id = %id, "Patient removed");
                println!("✅ {}", ack.message);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to remove patient");
                println!("   Error: {e}");
                Ok(4)
            }
        }
    }
}
