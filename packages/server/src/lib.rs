// RideLoop - Ride Lifecycle & Dispatch Engine
//
// This crate provides the backend core for dispatching trip requests to
// nearby captains and driving each ride through its lifecycle:
// requested -> accepted -> ongoing -> completed.
//
// Domains own the business logic; the kernel owns infrastructure (DI
// container, pub/sub hub, provider traits); server/ is the thin axum surface.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
