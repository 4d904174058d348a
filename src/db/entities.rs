//! Vehicles and commanders: create, delete, list, lookup.
//!
//! Both tables share one layout (`id`, unique label, `status`, `created`), so
//! the SQL is written once against [`EntityKind`] and the typed methods are
//! thin wrappers.

use crate::db::events::append_event;
use crate::db::rows::{map_tracked, tracked_columns};
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::{Commander, EntityKind, EventKind, Status, Tracked, Vehicle};
use crate::utils::time::now_ts;
use rusqlite::{ErrorCode, OptionalExtension, params};

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

pub(crate) fn not_found(kind: EntityKind, id: i64) -> AppError {
    AppError::NotFound {
        kind: kind.title().to_string(),
        id,
    }
}

impl Store {
    /// Insert a new idle entity and log `created` in the same transaction.
    /// Returns the new id.
    pub fn create(&mut self, kind: EntityKind, label: &str) -> AppResult<i64> {
        let label = label.trim();
        if label.is_empty() {
            return Err(AppError::Validation(format!(
                "{} {} must not be empty",
                kind.title(),
                kind.label_column()
            )));
        }

        let ts = now_ts();
        let tx = self.conn.transaction()?;

        let sql = format!(
            "INSERT INTO {} ({}, status, created) VALUES (?1, ?2, ?3)",
            kind.table(),
            kind.label_column()
        );
        match tx.execute(&sql, params![label, Status::Idle.to_db_str(), ts]) {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Err(AppError::Duplicate {
                    kind: kind.title().to_string(),
                    name: label.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        let id = tx.last_insert_rowid();
        append_event(&tx, kind, id, label, EventKind::Created, &ts)?;
        tx.commit()?;

        Ok(id)
    }

    /// Log `deleted` with the label captured just before removal, then drop
    /// the row. Both happen or neither does.
    pub fn delete(&mut self, kind: EntityKind, id: i64) -> AppResult<()> {
        let tx = self.conn.transaction()?;

        let label: Option<String> = tx
            .query_row(
                &format!(
                    "SELECT {} FROM {} WHERE id = ?1",
                    kind.label_column(),
                    kind.table()
                ),
                [id],
                |row| row.get(0),
            )
            .optional()?;

        let Some(label) = label else {
            return Err(not_found(kind, id));
        };

        append_event(&tx, kind, id, &label, EventKind::Deleted, &now_ts())?;
        tx.execute(&format!("DELETE FROM {} WHERE id = ?1", kind.table()), [id])?;
        tx.commit()?;

        Ok(())
    }

    /// Rows whose label contains `search` (trimmed, case-sensitive), ordered
    /// by label. An empty search returns everything.
    pub fn list<T: Tracked>(&self, search: &str) -> AppResult<Vec<T>> {
        let kind = T::KIND;
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM {} WHERE instr({}, ?1) > 0 ORDER BY {} ASC",
            tracked_columns(kind),
            kind.table(),
            kind.label_column(),
            kind.label_column()
        ))?;

        let rows = stmt.query_map([search.trim()], map_tracked::<T>)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn get<T: Tracked>(&self, id: i64) -> AppResult<T> {
        let kind = T::KIND;
        self.conn
            .query_row(
                &format!(
                    "SELECT {} FROM {} WHERE id = ?1",
                    tracked_columns(kind),
                    kind.table()
                ),
                [id],
                map_tracked::<T>,
            )
            .optional()?
            .ok_or_else(|| not_found(kind, id))
    }

    /// Number of rows of `kind`.
    pub fn count(&self, kind: EntityKind) -> AppResult<i64> {
        let n = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", kind.table()),
            [],
            |row| row.get(0),
        )?;
        Ok(n)
    }

    // ---------------------------
    // Vehicles
    // ---------------------------

    pub fn create_vehicle(&mut self, number: &str) -> AppResult<i64> {
        self.create(EntityKind::Vehicle, number)
    }

    pub fn delete_vehicle(&mut self, id: i64) -> AppResult<()> {
        self.delete(EntityKind::Vehicle, id)
    }

    pub fn list_vehicles(&self, search: &str) -> AppResult<Vec<Vehicle>> {
        self.list(search)
    }

    pub fn get_vehicle(&self, id: i64) -> AppResult<Vehicle> {
        self.get(id)
    }

    // ---------------------------
    // Commanders
    // ---------------------------

    pub fn create_commander(&mut self, name: &str) -> AppResult<i64> {
        self.create(EntityKind::Commander, name)
    }

    pub fn delete_commander(&mut self, id: i64) -> AppResult<()> {
        self.delete(EntityKind::Commander, id)
    }

    pub fn list_commanders(&self, search: &str) -> AppResult<Vec<Commander>> {
        self.list(search)
    }

    pub fn get_commander(&self, id: i64) -> AppResult<Commander> {
        self.get(id)
    }
}
