//! rostersync_core - Core for the rostersync project.
//!
//! Domain types for shifts and reference data, the cache seam used by the
//! in-memory and Redis backends, and the remote API traits the coordinator
//! is driven through. This crate performs no I/O.

pub mod api;
pub mod cache;
pub mod roster;
