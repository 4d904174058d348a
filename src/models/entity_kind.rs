use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The two kinds of tracked records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Vehicle,
    Commander,
}

impl EntityKind {
    /// Convert enum → DB string (events.entity_type)
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntityKind::Vehicle => "vehicle",
            EntityKind::Commander => "commander",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "vehicle" => Some(EntityKind::Vehicle),
            "commander" => Some(EntityKind::Commander),
            _ => None,
        }
    }

    /// Table holding the rows of this kind.
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Vehicle => "vehicles",
            EntityKind::Commander => "commanders",
        }
    }

    /// Unique text column identifying a row for humans.
    pub fn label_column(&self) -> &'static str {
        match self {
            EntityKind::Vehicle => "number",
            EntityKind::Commander => "name",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Vehicle => "Vehicle",
            EntityKind::Commander => "Commander",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for EntityKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::from_db_str(&s.trim().to_lowercase())
            .ok_or_else(|| AppError::Validation(format!("unknown entity type '{}'", s)))
    }
}
