//! Dashboard command implementation
//!
//! Summary counts plus a preview of the next upcoming appointments,
//! mirroring the clinic's dashboard screen.

use super::connect;
use crate::core::schedule::upcoming;
use crate::core::ClinicSnapshot;
use chrono::Local;
use clap::Args;

/// Arguments for the dashboard command
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// How many upcoming appointments to preview (defaults from config)
    #[arg(long)]
    pub limit: Option<usize>,
}

impl DashboardArgs {
    /// Execute the dashboard command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Rendering dashboard");

        let (config, client) = match connect(config_path) {
            Ok(pair) => pair,
            Err(code) => return Ok(code),
        };

        let snapshot = match ClinicSnapshot::load(&client).await {
            Ok(s) => s,
            Err(e) => {
                println!("❌ Failed to reach the clinic API");
                println!("   Error: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        let limit = self.limit.unwrap_or(config.dashboard.upcoming_limit);
        let now = Local::now().naive_local();
        let next = upcoming(&snapshot.enriched(), now, limit);

        println!("🦷 Dashboard");
        println!();
        println!("Próximas Consultas");
        println!("{}", "-".repeat(60));
        if next.is_empty() {
            println!("Nenhuma consulta futura encontrada.");
        } else {
            for entry in &next {
                // scheduled_at is always Some here: upcoming drops non-comparable records
                let when = entry
                    .appointment
                    .scheduled_at()
                    .map(|at| at.format("%d/%m/%Y às %H:%M").to_string())
                    .unwrap_or_default();
                println!(
                    "{} com {}",
                    entry.patient_label(),
                    entry.dentist_label()
                );
                println!("  {when}");
            }
        }

        let summary = snapshot.summary();
        println!();
        println!("Estatísticas");
        println!("{}", "-".repeat(60));
        println!("{} pacientes cadastrados", summary.patient_count);
        println!("{} dentistas cadastrados", summary.dentist_count);
        println!("{} consultas agendadas", summary.appointment_count);
        println!();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_args_default_limit_is_none() {
        let args = DashboardArgs { limit: None };
        assert!(args.limit.is_none());
    }
}
