//! Status changes and the event journal.

use crate::db::entities::not_found;
use crate::db::rows::map_event;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::{EntityKind, Event, EventKind, Status};
use crate::utils::time::now_ts;
use rusqlite::{Connection, OptionalExtension, params};

/// Append one journal row. Callers run it inside their own transaction.
pub(crate) fn append_event(
    conn: &Connection,
    kind: EntityKind,
    entity_id: i64,
    entity_name: &str,
    event: EventKind,
    ts: &str,
) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO events (entity_type, entity_id, entity_name, event_type, ts)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    stmt.execute(params![
        kind.to_db_str(),
        entity_id,
        entity_name,
        event.to_db_str(),
        ts
    ])?;
    Ok(conn.last_insert_rowid())
}

impl Store {
    /// Move an entity to `status` and log it, atomically.
    ///
    /// `entity_name` is the caller's snapshot of the number/name; it is
    /// written to the journal as given. Only the rotation
    /// idle → arrived → departed → idle is accepted.
    pub fn set_status(
        &mut self,
        kind: EntityKind,
        entity_id: i64,
        entity_name: &str,
        status: Status,
    ) -> AppResult<()> {
        let entity_name = entity_name.trim();
        if entity_name.is_empty() {
            return Err(AppError::Validation(
                "entity name must not be empty".to_string(),
            ));
        }

        let tx = self.conn.transaction()?;

        let changed = tx.execute(
            &format!(
                "UPDATE {} SET status = ?1 WHERE id = ?2 AND status = ?3",
                kind.table()
            ),
            params![
                status.to_db_str(),
                entity_id,
                status.previous().to_db_str()
            ],
        )?;

        if changed == 0 {
            let current: Option<String> = tx
                .query_row(
                    &format!("SELECT status FROM {} WHERE id = ?1", kind.table()),
                    [entity_id],
                    |row| row.get(0),
                )
                .optional()?;

            return Err(match current {
                None => not_found(kind, entity_id),
                Some(cur) => AppError::Validation(format!(
                    "{} #{} cannot go from '{}' to '{}' (expected '{}')",
                    kind.title(),
                    entity_id,
                    cur,
                    status,
                    status.previous()
                )),
            });
        }

        append_event(
            &tx,
            kind,
            entity_id,
            entity_name,
            EventKind::from_status(status),
            &now_ts(),
        )?;
        tx.commit()?;

        Ok(())
    }

    /// Rotate an entity to its next status. Returns the new status.
    pub fn advance_status(&mut self, kind: EntityKind, entity_id: i64) -> AppResult<Status> {
        let (label, current): (String, String) = self
            .conn
            .query_row(
                &format!(
                    "SELECT {}, status FROM {} WHERE id = ?1",
                    kind.label_column(),
                    kind.table()
                ),
                [entity_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?
            .ok_or_else(|| not_found(kind, entity_id))?;

        let current: Status = current.parse()?;
        let next = current.next();
        self.set_status(kind, entity_id, &label, next)?;
        Ok(next)
    }

    /// Events whose entity name, event type or entity type contains
    /// `search`, newest first, at most `limit` rows.
    pub fn list_events(&self, search: &str, limit: usize) -> AppResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, entity_type, entity_id, entity_name, event_type, ts
             FROM events
             WHERE instr(entity_name, ?1) > 0
                OR instr(event_type, ?1) > 0
                OR instr(entity_type, ?1) > 0
             ORDER BY id DESC
             LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![search.trim(), limit as i64], map_event)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// The latest `limit` events, newest first.
    pub fn recent_events(&self, limit: usize) -> AppResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, entity_type, entity_id, entity_name, event_type, ts
             FROM events
             ORDER BY id DESC
             LIMIT ?1",
        )?;

        let rows = stmt.query_map([limit as i64], map_event)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Wipe the journal. Returns how many rows were removed.
    pub fn clear_events(&mut self) -> AppResult<usize> {
        let n = self.conn.execute("DELETE FROM events", [])?;
        Ok(n)
    }
}
