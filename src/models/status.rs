use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a vehicle or commander.
///
/// States rotate `Idle → Arrived → Departed → Idle`. Every row starts idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Arrived,
    Departed,
}

impl Status {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Arrived => "arrived",
            Status::Departed => "departed",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "idle" => Some(Status::Idle),
            "arrived" => Some(Status::Arrived),
            "departed" => Some(Status::Departed),
            _ => None,
        }
    }

    /// Next state in the rotation.
    pub fn next(&self) -> Status {
        match self {
            Status::Idle => Status::Arrived,
            Status::Arrived => Status::Departed,
            Status::Departed => Status::Idle,
        }
    }

    /// The only state allowed to move into `self`.
    pub fn previous(&self) -> Status {
        match self {
            Status::Idle => Status::Departed,
            Status::Arrived => Status::Idle,
            Status::Departed => Status::Arrived,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Idle => "Waiting",
            Status::Arrived => "Arrived",
            Status::Departed => "Departed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Status::Idle => "●",
            Status::Arrived => "▲",
            Status::Departed => "▼",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

impl FromStr for Status {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::from_db_str(&s.trim().to_lowercase())
            .ok_or_else(|| AppError::Validation(format!("unknown status '{}'", s)))
    }
}
