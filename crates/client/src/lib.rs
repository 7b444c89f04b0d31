//! rostersync_client - CLI client for the rostersync API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::RostersyncClient;
pub use error::{ClientError, Result};
