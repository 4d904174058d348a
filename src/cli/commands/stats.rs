use crate::cli::parser::Commands;
use crate::cli::render::{events_table, print_json};
use crate::config::Config;
use crate::db::Store;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{BLUE, CYAN, GREEN, GREY, RED, RESET, YELLOW};
use serde_json::json;

/// Handle the `stats` command: the dashboard.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { recent, json } = cmd {
        let store = Store::open(&cfg.database)?;

        let stats = store.compute_stats()?;
        let recent = store.recent_events(recent.unwrap_or(cfg.recent_limit))?;

        if *json {
            return print_json(&json!({
                "stats": stats,
                "recent": recent,
            }));
        }

        header("Statistics");

        let cards = [
            ("Vehicles", stats.vehicles, BLUE),
            ("Commanders", stats.commanders, CYAN),
            ("Arrivals", stats.arrivals, GREEN),
            ("Departures", stats.departures, RED),
            ("Total events", stats.total_events, YELLOW),
        ];
        for (title, value, color) in cards {
            println!("  {:<14}{}{:>8}{}", title, color, value, RESET);
        }

        println!("\nRecent activity:");
        if recent.is_empty() {
            println!("  {GREY}--{RESET}");
        } else {
            print!("{}", events_table(&recent));
        }
    }

    Ok(())
}
