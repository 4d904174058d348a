use super::status::Status;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commander {
    pub id: i64,                // ⇔ commanders.id
    pub name: String,           // ⇔ commanders.name (UNIQUE)
    pub status: Status,         // ⇔ commanders.status
    #[serde(serialize_with = "crate::utils::time::serialize_ts")]
    pub created: NaiveDateTime, // ⇔ commanders.created
}
