use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::seed::SeedLogic;
use crate::db::Store;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `seed` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed { count } = cmd {
        let mut store = Store::open(&cfg.database)?;

        info(format!("Seeding {} vehicles and {} commanders…", count, count));
        let report = SeedLogic::apply(&mut store, *count)?;

        success(format!(
            "Vehicles: {} added, {} already present",
            report.vehicles_added, report.vehicles_skipped
        ));
        success(format!(
            "Commanders: {} added, {} already present",
            report.commanders_added, report.commanders_skipped
        ));

        if let Err(e) = ttlog(
            store.conn(),
            "seed",
            &count.to_string(),
            &format!(
                "Seeded {} vehicles and {} commanders",
                report.vehicles_added, report.commanders_added
            ),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        let stats = store.compute_stats()?;
        println!(
            "\nDatabase now holds {} vehicles, {} commanders, {} events.",
            stats.vehicles, stats.commanders, stats.total_events
        );
    }

    Ok(())
}
