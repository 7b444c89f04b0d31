//! CLI command definitions.

pub mod clients;
pub mod locations;
pub mod shifts;
pub mod staff;
pub mod teams;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the rostersync API.
#[derive(Debug, Parser)]
#[command(name = "rostersync-client")]
#[command(about = "CLI client for the rostersync API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "ROSTERSYNC_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Shift management.
    Shifts(shifts::ShiftsCommand),
    /// Client management.
    Clients(clients::ClientsCommand),
    /// Location management.
    Locations(locations::LocationsCommand),
    /// Team management.
    Teams(teams::TeamsCommand),
    /// Staff lookups.
    Staff(staff::StaffCommand),
}
