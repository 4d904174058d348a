use serde::Serialize;

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub vehicles: i64,
    pub commanders: i64,
    pub arrivals: i64,
    pub departures: i64,
    pub total_events: i64,
}
