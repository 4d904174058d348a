use super::{entity_kind::EntityKind, event_kind::EventKind};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of the append-only journal.
///
/// `entity_id` is not a foreign key: the row outlives the entity it refers
/// to, and `entity_name` keeps the number/name it had when the event was
/// written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i64,
    pub entity_type: EntityKind,
    pub entity_id: i64,
    pub entity_name: String,
    pub event_type: EventKind,
    #[serde(serialize_with = "crate::utils::time::serialize_ts")]
    pub ts: NaiveDateTime,
}

impl Event {
    pub fn ts_str(&self) -> String {
        self.ts.format(crate::utils::time::TS_FORMAT).to_string()
    }
}
