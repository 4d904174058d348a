use crate::cli::parser::{Commands, EntityAction};
use crate::cli::render::{entries_table, print_json};
use crate::config::Config;
use crate::db::Store;
use crate::errors::AppResult;
use crate::models::{Commander, Tracked, Vehicle};
use crate::ui::messages::{confirm, info, success};
use crate::utils::colors::colorize_status;
use serde::Serialize;

/// Handle the `vehicle` and `commander` commands
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Vehicle { action } => run::<Vehicle>(action, cfg),
        Commands::Commander { action } => run::<Commander>(action, cfg),
        _ => Ok(()),
    }
}

fn run<T: Tracked + Serialize>(action: &EntityAction, cfg: &Config) -> AppResult<()> {
    let kind = T::KIND;
    let mut store = Store::open(&cfg.database)?;

    match action {
        EntityAction::Add { name } => {
            let id = store.create(kind, name)?;
            success(format!("{} '{}' added (id {})", kind, name.trim(), id));
        }

        EntityAction::Del { id, yes } => {
            let entry: T = store.get(*id)?;

            let prompt = format!(
                "Delete {} '{}' (id {})? This action is irreversible.",
                kind.to_db_str(),
                entry.label(),
                id
            );
            if cfg.confirm_deletes && !*yes && !confirm(prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            store.delete(kind, *id)?;
            success(format!("{} '{}' deleted.", kind, entry.label()));
        }

        EntityAction::List { search, json } => {
            let rows: Vec<T> = store.list(search.as_deref().unwrap_or(""))?;

            if *json {
                return print_json(&rows);
            }

            if rows.is_empty() {
                info("No records found.");
            } else {
                print!("{}", entries_table(&rows));
                println!("\nRecords: {}", rows.len());
            }
        }

        EntityAction::Cycle { id } => {
            let entry: T = store.get(*id)?;
            let next = store.advance_status(kind, *id)?;
            success(format!(
                "{} '{}': {} → {}",
                kind,
                entry.label(),
                colorize_status(entry.status()),
                colorize_status(next)
            ));
        }
    }

    Ok(())
}
