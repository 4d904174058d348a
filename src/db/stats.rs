use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::{EntityKind, EventKind, Stats};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

impl Store {
    /// Dashboard counters. Read-only.
    pub fn compute_stats(&self) -> AppResult<Stats> {
        let scalar = |sql: &str| -> rusqlite::Result<i64> {
            self.conn.query_row(sql, [], |row| row.get(0))
        };
        let by_type = |kind: EventKind| -> rusqlite::Result<i64> {
            self.conn.query_row(
                "SELECT COUNT(*) FROM events WHERE event_type = ?1",
                [kind.to_db_str()],
                |row| row.get(0),
            )
        };

        Ok(Stats {
            vehicles: self.count(EntityKind::Vehicle)?,
            commanders: self.count(EntityKind::Commander)?,
            arrivals: by_type(EventKind::Arrived)?,
            departures: by_type(EventKind::Departed)?,
            total_events: scalar("SELECT COUNT(*) FROM events")?,
        })
    }
}

/// `db --info`: file size, row counts and the journal's time span.
pub fn print_db_info(store: &Store) -> AppResult<()> {
    println!();

    //
    // 1) FILE
    //
    match store.path() {
        Some(path) => {
            let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
            let file_mb = (file_size as f64) / (1024.0 * 1024.0);
            println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, path.display(), RESET);
            println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
        }
        None => println!("{}• File:{} {}(in memory){}", CYAN, RESET, GREY, RESET),
    }

    //
    // 2) COUNTS
    //
    let stats = store.compute_stats()?;
    println!("{}• Vehicles:{} {}{}{}", CYAN, RESET, GREEN, stats.vehicles, RESET);
    println!("{}• Commanders:{} {}{}{}", CYAN, RESET, GREEN, stats.commanders, RESET);
    println!("{}• Total events:{} {}{}{}", CYAN, RESET, GREEN, stats.total_events, RESET);

    //
    // 3) JOURNAL RANGE
    //
    let first: Option<String> = store
        .conn
        .query_row("SELECT ts FROM events ORDER BY id ASC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;
    let last: Option<String> = store
        .conn
        .query_row("SELECT ts FROM events ORDER BY id DESC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    let dash = || format!("{GREY}--{RESET}");
    println!("{}• Journal range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(dash));
    println!("    to:   {}", last.unwrap_or_else(dash));

    //
    // 4) MIGRATIONS
    //
    let applied: i64 = store.conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Migrations applied:{} {}", CYAN, RESET, applied);

    println!();
    Ok(())
}
