//! Client CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Client management commands.
#[derive(Debug, Parser)]
pub struct ClientsCommand {
    #[command(subcommand)]
    pub action: ClientsAction,
}

/// Available client actions.
#[derive(Debug, Subcommand)]
pub enum ClientsAction {
    /// List all clients.
    List,
    /// Get client by ID.
    Get {
        /// Client ID.
        id: Uuid,
    },
    /// Create a new client.
    Create {
        /// Client name.
        #[arg(long)]
        name: String,
        /// Contact email.
        #[arg(long)]
        contact_email: Option<String>,
    },
    /// Delete client by ID.
    Delete {
        /// Client ID.
        id: Uuid,
    },
}
