use crate::cli::parser::Commands;
use crate::cli::render::{events_table, print_json};
use crate::config::Config;
use crate::db::Store;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};

/// Handle the `history` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        search,
        limit,
        clear,
        yes,
        json,
    } = cmd
    {
        let mut store = Store::open(&cfg.database)?;

        //
        // CLEAR
        //
        if *clear {
            if cfg.confirm_deletes
                && !*yes
                && !confirm("Delete the WHOLE event history? This action is irreversible.")
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = store.clear_events()?;

            if let Err(e) = ttlog(
                store.conn(),
                "clear_history",
                "events",
                &format!("Removed {} events", removed),
            ) {
                warning(format!("Failed to write internal log: {}", e));
            }

            success(format!("History cleared ({} events removed).", removed));
            return Ok(());
        }

        //
        // LIST
        //
        let limit = limit.unwrap_or(cfg.history_limit);
        let events = store.list_events(search.as_deref().unwrap_or(""), limit)?;

        if *json {
            return print_json(&events);
        }

        if events.is_empty() {
            info("No events found.");
        } else {
            print!("{}", events_table(&events));
            println!("\nEvents: {}", events.len());
        }
    }

    Ok(())
}
