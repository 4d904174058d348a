//! Row → struct mapping. Every query result is turned into a fixed-field
//! record right away; bad stored values surface as conversion failures.

use crate::errors::AppError;
use crate::models::{EntityKind, Event, EventKind, Status, Tracked};
use crate::utils::time::parse_ts;
use rusqlite::Row;
use rusqlite::types::Type;

fn decode<T>(row: &Row, col: &str, parse: fn(&str) -> Option<T>) -> rusqlite::Result<T> {
    let raw: String = row.get(col)?;
    parse(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            Type::Text,
            Box::new(AppError::Validation(format!(
                "invalid value '{}' in column {}",
                raw, col
            ))),
        )
    })
}

/// Expects the columns `id, label, status, created`.
pub fn map_tracked<T: Tracked>(row: &Row) -> rusqlite::Result<T> {
    Ok(T::from_parts(
        row.get("id")?,
        row.get("label")?,
        decode(row, "status", Status::from_db_str)?,
        decode(row, "created", parse_ts)?,
    ))
}

pub fn map_event(row: &Row) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        entity_type: decode(row, "entity_type", EntityKind::from_db_str)?,
        entity_id: row.get("entity_id")?,
        entity_name: row.get("entity_name")?,
        event_type: decode(row, "event_type", EventKind::from_db_str)?,
        ts: decode(row, "ts", parse_ts)?,
    })
}

/// SELECT list matching [`map_tracked`] for one entity table.
pub fn tracked_columns(kind: EntityKind) -> String {
    format!(
        "id, {} AS label, status, created",
        kind.label_column()
    )
}
