//! Terminal rendering shared by the list, history and stats commands.

use crate::errors::{AppError, AppResult};
use crate::models::{Event, Tracked};
use crate::utils::colors::{GREY, RESET, colorize_event, colorize_status};
use crate::utils::table::{Column, Table};
use crate::utils::time::TS_FORMAT;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let out = serde_json::to_string_pretty(value).map_err(|e| AppError::Other(e.to_string()))?;
    println!("{}", out);
    Ok(())
}

pub fn entries_table<T: Tracked>(rows: &[T]) -> String {
    let label_header = T::KIND.label_column().to_uppercase();

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left(&label_header),
        Column::left("STATUS"),
        Column::left("CREATED"),
    ]);

    for r in rows {
        table.add_row(vec![
            r.id().to_string(),
            r.label().to_string(),
            colorize_status(r.status()),
            format!("{GREY}{}{RESET}", r.created().format(TS_FORMAT)),
        ]);
    }

    table.render()
}

pub fn events_table(events: &[Event]) -> String {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("TIME"),
        Column::left("TYPE"),
        Column::left("NAME"),
        Column::left("EVENT"),
    ]);

    for ev in events {
        table.add_row(vec![
            ev.id.to_string(),
            ev.ts_str(),
            ev.entity_type.title().to_string(),
            ev.entity_name.clone(),
            colorize_event(ev.event_type),
        ]);
    }

    table.render()
}
