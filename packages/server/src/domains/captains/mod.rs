//! Captain presence - last known locations and live connections.

pub mod events;
pub mod registry;

pub use events::{run_captain_worker, CaptainEvent};
pub use registry::{CaptainLocationRecord, CaptainLocationRegistry};
