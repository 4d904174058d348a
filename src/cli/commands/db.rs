use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::Store;
use crate::db::migrate::run_pending_migrations;
use crate::db::stats;
use crate::errors::AppResult;
use crate::models::EntityKind;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

/// Rows holding a value the application cannot decode.
fn count_invalid(store: &Store, sql: &str) -> AppResult<i64> {
    Ok(store.conn().query_row(sql, [], |row| row.get(0))?)
}

/// Journal and status columns must only hold known values.
fn check_values(store: &Store) -> AppResult<Vec<(String, i64)>> {
    let mut problems = Vec::new();

    for kind in [EntityKind::Vehicle, EntityKind::Commander] {
        let n = count_invalid(
            store,
            &format!(
                "SELECT COUNT(*) FROM {}
                 WHERE status NOT IN ('idle', 'arrived', 'departed')",
                kind.table()
            ),
        )?;
        if n > 0 {
            problems.push((format!("{} with unknown status", kind.table()), n));
        }
    }

    let n = count_invalid(
        store,
        "SELECT COUNT(*) FROM events
         WHERE entity_type NOT IN ('vehicle', 'commander')",
    )?;
    if n > 0 {
        problems.push(("events with unknown entity type".to_string(), n));
    }

    let n = count_invalid(
        store,
        "SELECT COUNT(*) FROM events
         WHERE event_type NOT IN ('created', 'deleted', 'arrived', 'departed', 'idle')",
    )?;
    if n > 0 {
        problems.push(("events with unknown event type".to_string(), n));
    }

    Ok(problems)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // opening already applies pending migrations
        let store = Store::open(&cfg.database)?;

        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(store.conn())?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        if *info {
            stats::print_db_info(&store)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                store
                    .conn()
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
            }

            let problems = check_values(&store)?;
            if problems.is_empty() {
                println!("{}✔ Stored values are consistent.{}\n", GREEN, RESET);
            } else {
                for (what, n) in problems {
                    println!("{}⚠ {}: {}{}", YELLOW, what, n, RESET);
                }
                println!();
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            store.conn().execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
