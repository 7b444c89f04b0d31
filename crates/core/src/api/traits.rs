use async_trait::async_trait;
use uuid::Uuid;

use crate::roster::{Client, DateRange, Location, Shift, StaffMember, Team};

use super::{CreateShiftRequest, Result, UpdateShiftRequest};

/// Remote API surface for shift operations.
///
/// The coordinator is driven through this trait so it can run against the
/// HTTP client in production and a mock in tests.
#[async_trait]
pub trait ShiftApi: Send + Sync {
    /// Lists shifts whose start date falls within the given range.
    ///
    /// With `include_relations` the server expands staff, client, location
    /// and team associations on each record.
    async fn list_shifts(&self, range: DateRange, include_relations: bool) -> Result<Vec<Shift>>;

    /// Gets a shift by its ID.
    async fn get_shift(&self, id: Uuid) -> Result<Option<Shift>>;

    /// Creates a new shift and returns the stored record.
    async fn create_shift(&self, req: &CreateShiftRequest) -> Result<Shift>;

    /// Updates an existing shift and returns the stored record.
    async fn update_shift(&self, id: Uuid, req: &UpdateShiftRequest) -> Result<Shift>;

    /// Deletes a shift by its ID.
    async fn delete_shift(&self, id: Uuid) -> Result<()>;

    /// Cancels a shift.
    ///
    /// Cancellation has server-side side effects (cover reassignment, flag
    /// changes), so callers are expected to reload rather than patch local
    /// state from the returned record alone.
    async fn cancel_shift(&self, id: Uuid) -> Result<Shift>;

    /// Appends a free-text instruction to the shift's instructions log.
    async fn add_instruction(&self, id: Uuid, text: &str) -> Result<Shift>;

    /// Appends a free-text message to the shift's message log.
    async fn add_message(&self, id: Uuid, text: &str) -> Result<Shift>;
}

/// Remote API surface for reference data.
#[async_trait]
pub trait ReferenceApi: Send + Sync {
    /// Lists all clients.
    async fn list_clients(&self) -> Result<Vec<Client>>;

    /// Lists all locations.
    async fn list_locations(&self) -> Result<Vec<Location>>;

    /// Lists all teams.
    async fn list_teams(&self) -> Result<Vec<Team>>;

    /// Lists all rosterable staff members.
    async fn list_staff(&self) -> Result<Vec<StaffMember>>;
}
