//! rostersync - Roster data coordination.
//!
//! The pieces that sit between a roster view and the remote API:
//!
//! - [`coordinator::RosterCoordinator`]: per-session orchestration of
//!   reference data and range-scoped shift loading, with TTL caching,
//!   in-flight de-duplication and cache invalidation on mutations.
//! - [`service::CacheService`]: best-effort cache-aside wrapper over a
//!   key-value backend.
//! - [`debounce::Debouncer`]: cancellable-task debounce for burst range
//!   requests.
//! - [`cache`]: the key-value backends (in-memory or Redis, selected at
//!   compile time).

pub mod cache;
pub mod config;
pub mod coordinator;
pub mod debounce;
pub mod service;

pub use config::Config;
pub use coordinator::{CoordinatorError, ReferenceData, RosterCoordinator};
pub use service::CacheService;
