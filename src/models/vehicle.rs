use super::status::Status;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub id: i64,                // ⇔ vehicles.id
    pub number: String,         // ⇔ vehicles.number (UNIQUE)
    pub status: Status,         // ⇔ vehicles.status ('idle' | 'arrived' | 'departed')
    #[serde(serialize_with = "crate::utils::time::serialize_ts")]
    pub created: NaiveDateTime, // ⇔ vehicles.created (TEXT "YYYY-MM-DD HH:MM:SS")
}
