//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod notify;
pub mod stream_hub;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use notify::StreamNotifier;
pub use stream_hub::StreamHub;
pub use traits::{BaseGeocoder, BaseNotifier, BaseRouteProvider};
