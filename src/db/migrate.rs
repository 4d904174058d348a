use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

/// Ensure that the `log` table exists. It also records applied migrations.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM log
             WHERE operation = 'migration_applied' AND target = ?1
             LIMIT 1",
            [version],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    ttlog(conn, "migration_applied", version, message)
}

/// Create the entity tables and the journal with the current schema.
fn create_tables(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS vehicles (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            number  TEXT    NOT NULL UNIQUE,
            status  TEXT    NOT NULL DEFAULT 'idle',
            created TEXT    NOT NULL
        );

        CREATE TABLE IF NOT EXISTS commanders (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT    NOT NULL UNIQUE,
            status  TEXT    NOT NULL DEFAULT 'idle',
            created TEXT    NOT NULL
        );

        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            entity_type TEXT    NOT NULL,
            entity_id   INTEGER NOT NULL,
            entity_name TEXT    NOT NULL,
            event_type  TEXT    NOT NULL,
            ts          TEXT    NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Path of the main database file, `None` for in-memory databases.
fn main_db_path(conn: &Connection) -> Option<String> {
    conn.query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .ok()
        .filter(|p| !p.is_empty())
}

/// Zip the database file next to itself before a destructive migration.
///
/// Pages still sitting in the `-wal` file are flushed into the main file
/// first, otherwise the archive would miss them.
fn backup_before_migration(conn: &Connection, db_path: &str, tag: &str) -> AppResult<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_{}.zip",
        Local::now().format("%Y%m%d_%H%M%S"),
        tag
    );
    let backup_path = Path::new(db_path)
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&backup_name);

    let (busy, _, _): (i64, i64, i64) = conn.query_row(
        "PRAGMA wal_checkpoint(TRUNCATE);",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;
    if busy != 0 {
        return Err(AppError::Migration(
            "database is busy, cannot checkpoint before backup".to_string(),
        ));
    }

    let file = File::create(&backup_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| AppError::Migration(format!("backup failed (start_file): {}", e)))?;

    let db_content = fs::read(db_path)?;
    zip.write_all(&db_content)?;
    zip.finish()
        .map_err(|e| AppError::Migration(format!("backup failed (finish): {}", e)))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Early journals stored only the entity id. Rebuild the table with an
/// `entity_name` snapshot, taken from the live rows where they still exist.
fn migrate_add_entity_name(conn: &Connection) -> AppResult<()> {
    let version = "20250301_0002_events_entity_name";

    if has_column(conn, "events", "entity_name")? {
        return Ok(());
    }

    warning("Legacy journal detected (no entity_name), creating safety backup...");
    match main_db_path(conn) {
        Some(path) => backup_before_migration(conn, &path, "entity_name")?,
        None => warning("Could not determine DB path, backup skipped."),
    }

    conn.execute_batch(
        r#"
        BEGIN;

        ALTER TABLE events RENAME TO events_old;

        CREATE TABLE events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            entity_type TEXT    NOT NULL,
            entity_id   INTEGER NOT NULL,
            entity_name TEXT    NOT NULL,
            event_type  TEXT    NOT NULL,
            ts          TEXT    NOT NULL
        );

        INSERT INTO events (id, entity_type, entity_id, entity_name, event_type, ts)
        SELECT e.id, e.entity_type, e.entity_id,
               COALESCE(
                   CASE e.entity_type
                       WHEN 'vehicle'   THEN (SELECT v.number FROM vehicles v WHERE v.id = e.entity_id)
                       WHEN 'commander' THEN (SELECT c.name FROM commanders c WHERE c.id = e.entity_id)
                   END,
                   '?'
               ),
               e.event_type, e.ts
        FROM events_old e;

        DROP TABLE events_old;

        CREATE INDEX IF NOT EXISTS idx_events_event_type ON events(event_type);

        UPDATE sqlite_sequence
            SET seq = (SELECT IFNULL(MAX(id), 0) FROM events)
        WHERE name = 'events';

        COMMIT;
        "#,
    )?;

    mark_applied(conn, version, "Rebuilt events with entity_name snapshots")?;
    success(format!("Migration applied: {}", version));
    Ok(())
}

fn migrate_event_type_index(conn: &Connection) -> AppResult<()> {
    let version = "20250301_0001_events_event_type_index";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_events_event_type ON events(event_type);",
    )?;

    mark_applied(conn, version, "Added index on events(event_type)")
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() every time a Store is opened. Silent unless a
/// legacy schema has to be rewritten.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) log table first: migrations are recorded there
    ensure_log_table(conn)?;

    // 2) current schema (no-op for tables that already exist)
    create_tables(conn)?;

    // 3) legacy journal without entity_name → rebuild
    migrate_add_entity_name(conn)?;

    // 4) named migrations
    migrate_event_type_index(conn)?;

    Ok(())
}
