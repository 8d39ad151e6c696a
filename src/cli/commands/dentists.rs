//! Dentist roster command implementations

use super::{confirm, connect};
use crate::adapters::api::ClinicApi;
use crate::core::search::search_dentists;
use crate::domain::ids::DentistId;
use crate::domain::Dentist;
use clap::{Args, Subcommand};

/// Dentist subcommands
#[derive(Subcommand, Debug)]
pub enum DentistsCommand {
    /// List dentists with optional search
    List(ListArgs),

    /// Register a dentist, or update the one with the same CPF
    Add(AddArgs),

    /// Remove a dentist by id
    Remove(RemoveArgs),
}

impl DentistsCommand {
    /// Execute the subcommand
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match self {
            DentistsCommand::List(args) => args.execute(config_path).await,
            DentistsCommand::Add(args) => args.execute(config_path).await,
            DentistsCommand::Remove(args) => args.execute(config_path).await,
        }
    }
}

/// Arguments for `dentists list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Free-text search over name, CPF and specialty
    #[arg(long, default_value = "")]
    pub search: String,
}

impl ListArgs {
    async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_config, client) = match connect(config_path) {
            Ok(pair) => pair,
            Err(code) => return Ok(code),
        };

        let dentists = match client.list_dentists().await {
            Ok(d) => d,
            Err(e) => {
                println!("❌ Failed to reach the clinic API");
                println!("   Error: {e}");
                return Ok(4);
            }
        };

        let rows = search_dentists(&dentists, &self.search);
        if rows.is_empty() {
            if self.search.is_empty() {
                println!("Nenhum dentista cadastrado");
            } else {
                println!("Nenhum dentista encontrado");
            }
            return Ok(0);
        }

        println!(
            "{:<6} {:<30} {:<16} {:<25}",
            "ID", "Nome", "CPF", "Especialidade"
        );
        println!("{}", "-".repeat(79));
        for dentist in &rows {
            let id = dentist
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<6} {:<30} {:<16} {:<25}",
                id, dentist.name, dentist.cpf, dentist.specialty
            );
        }
        println!();
        println!("{} dentista(s)", rows.len());

        Ok(0)
    }
}

/// Arguments for `dentists add`
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

    /// Specialty label
    #[arg(long)]
    pub specialty: String,
}

impl AddArgs {
    async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let dentist = match Dentist::new(&self.name, &self.specialty, &self.cpf) {
            Ok(d) => d,
            Err(e) => {
                println!("❌ {e}");
                return Ok(2);
            }
        };

        let (_config, client) = match connect(config_path) {
            Ok(pair) => pair,
            Err(code) => return Ok(code),
        };

        match client.upsert_dentist(&dentist).await {
            Ok(ack) => {
                tracing::info!(cpf = %dentist.cpf, "Dentist upserted");
                println!("✅ {}", ack.message);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to save dentist");
                println!("   Error: {e}");
                Ok(4)
            }
        }
    }
}

/// Arguments for `dentists remove`
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Dentist id
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

impl RemoveArgs {
    async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let id = DentistId::new(self.id);

        if !self.yes && !confirm(&format!("Excluir o dentista {id}?"))? {
            println!("Operação cancelada.");
            return Ok(0);
        }

        let (_config, client) = match connect(config_path) {
            Ok(pair) => pair,
            Err(code) => return Ok(code),
        };

        match client.delete_dentist(id).await {
            Ok(ack) => {
                tracing::info!(dentist_id = %id, "Dentist removed");
                println!("✅ {}", ack.message);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to remove dentist");
                println!("   Error: {e}");
                Ok(4)
            }
        }
    }
}
