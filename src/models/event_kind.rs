use super::status::Status;
use serde::Serialize;
use std::fmt;

/// What an event row records (events.event_type).
///
/// Status changes are logged with the name of the new status, so a return to
/// idle under the rotation policy is stored as `idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Created,
    Deleted,
    Arrived,
    Departed,
    Idle,
}

impl EventKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::Created => "created",
            EventKind::Deleted => "deleted",
            EventKind::Arrived => "arrived",
            EventKind::Departed => "departed",
            EventKind::Idle => "idle",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "created" => Some(EventKind::Created),
            "deleted" => Some(EventKind::Deleted),
            "arrived" => Some(EventKind::Arrived),
            "departed" => Some(EventKind::Departed),
            "idle" => Some(EventKind::Idle),
            _ => None,
        }
    }

    pub fn from_status(status: Status) -> Self {
        match status {
            Status::Idle => EventKind::Idle,
            Status::Arrived => EventKind::Arrived,
            Status::Departed => EventKind::Departed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Created => "Created",
            EventKind::Deleted => "Deleted",
            EventKind::Arrived => "Arrived",
            EventKind::Departed => "Departed",
            EventKind::Idle => "Waiting",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
