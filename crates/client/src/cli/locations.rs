//! Location CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Location management commands.
#[derive(Debug, Parser)]
pub struct LocationsCommand {
    #[command(subcommand)]
    pub action: LocationsAction,
}

/// Available location actions.
#[derive(Debug, Subcommand)]
pub enum LocationsAction {
    /// List all locations.
    List,
    /// Create a new location.
    Create {
        /// Location name.
        #[arg(long)]
        name: String,
        /// Street address.
        #[arg(long)]
        address: Option<String>,
    },
    /// Delete location by ID.
    Delete {
        /// Location ID.
        id: Uuid,
    },
}
