//! Staff CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Staff lookup commands.
#[derive(Debug, Parser)]
pub struct StaffCommand {
    #[command(subcommand)]
    pub action: StaffAction,
}

/// Available staff actions.
#[derive(Debug, Subcommand)]
pub enum StaffAction {
    /// List all rosterable staff members.
    List,
    /// Get staff member by ID.
    Get {
        /// Staff member ID.
        id: Uuid,
    },
}
