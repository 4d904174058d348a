pub mod commander;
pub mod entity_kind;
pub mod event;
pub mod event_kind;
pub mod stats;
pub mod status;
pub mod tracked;
pub mod vehicle;

pub use commander::Commander;
pub use entity_kind::EntityKind;
pub use event::Event;
pub use event_kind::EventKind;
pub use stats::Stats;
pub use status::Status;
pub use tracked::Tracked;
pub use vehicle::Vehicle;
