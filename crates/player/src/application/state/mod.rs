//! Per-session state owned by the router.

mod event_log;
mod player_registry;

pub use event_log::{EventLog, EVENT_LOG_CAPACITY};
pub use player_registry::PlayerRegistry;
