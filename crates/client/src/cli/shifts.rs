//! Shift CLI commands.

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Shift management commands.
#[derive(Debug, Parser)]
pub struct ShiftsCommand {
    #[command(subcommand)]
    pub action: ShiftsAction,
}

/// Available shift actions.
#[derive(Debug, Subcommand)]
pub enum ShiftsAction {
    /// List shifts within a date range.
    List {
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start: NaiveDate,
        /// End date (YYYY-MM-DD).
        #[arg(long)]
        end: NaiveDate,
        /// Expand staff/client/location/team relations.
        #[arg(long)]
        include_relations: bool,
    },
    /// Get shift by ID.
    Get {
        /// Shift ID.
        id: Uuid,
    },
    /// Create a new shift.
    Create {
        /// Shift title.
        #[arg(long)]
        title: String,
        /// Start timestamp (RFC 3339).
        #[arg(long)]
        starts_at: DateTime<Utc>,
        /// End timestamp (RFC 3339).
        #[arg(long)]
        ends_at: DateTime<Utc>,
        /// Publish immediately.
        #[arg(long)]
        published: bool,
    },
    /// Delete shift by ID.
    Delete {
        /// Shift ID.
        id: Uuid,
    },
    /// Cancel a shift.
    Cancel {
        /// Shift ID.
        id: Uuid,
    },
    /// Append an instruction to the shift's instructions log.
    Instruct {
        /// Shift ID.
        id: Uuid,
        /// Instruction text.
        text: String,
    },
    /// Append a message to the shift's message log.
    Message {
        /// Shift ID.
        id: Uuid,
        /// Message text.
        text: String,
    },
}
