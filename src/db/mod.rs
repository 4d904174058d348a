pub mod entities;
pub mod events;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod rows;
pub mod stats;
pub mod store;

pub use store::{DEFAULT_EVENT_LIMIT, DEFAULT_RECENT_LIMIT, Store};
