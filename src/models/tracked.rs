use super::{Commander, EntityKind, Status, Vehicle};
use chrono::NaiveDateTime;

/// Common view over [`Vehicle`] and [`Commander`], so that the store and the
/// CLI handle both kinds with one code path.
pub trait Tracked: Sized {
    const KIND: EntityKind;

    fn from_parts(id: i64, label: String, status: Status, created: NaiveDateTime) -> Self;

    fn id(&self) -> i64;
    /// Number for vehicles, name for commanders.
    fn label(&self) -> &str;
    fn status(&self) -> Status;
    fn created(&self) -> NaiveDateTime;
}

impl Tracked for Vehicle {
    const KIND: EntityKind = EntityKind::Vehicle;

    fn from_parts(id: i64, label: String, status: Status, created: NaiveDateTime) -> Self {
        Vehicle {
            id,
            number: label,
            status,
            created,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> &str {
        &self.number
    }
    fn status(&self) -> Status {
        self.status
    }
    fn created(&self) -> NaiveDateTime {
        self.created
    }
}

impl Tracked for Commander {
    const KIND: EntityKind = EntityKind::Commander;

    fn from_parts(id: i64, label: String, status: Status, created: NaiveDateTime) -> Self {
        Commander {
            id,
            name: label,
            status,
            created,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> &str {
        &self.name
    }
    fn status(&self) -> Status {
        self.status
    }
    fn created(&self) -> NaiveDateTime {
        self.created
    }
}
