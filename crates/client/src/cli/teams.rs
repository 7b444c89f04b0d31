//! Team CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Team management commands.
#[derive(Debug, Parser)]
pub struct TeamsCommand {
    #[command(subcommand)]
    pub action: TeamsAction,
}

/// Available team actions.
#[derive(Debug, Subcommand)]
pub enum TeamsAction {
    /// List all teams.
    List,
    /// Create a new team.
    Create {
        /// Team name.
        #[arg(long)]
        name: String,
    },
    /// Delete team by ID.
    Delete {
        /// Team ID.
        id: Uuid,
    },
}
