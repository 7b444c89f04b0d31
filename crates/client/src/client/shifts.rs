//! Shift API operations.

use rostersync_core::api::{CreateShiftRequest, ShiftQuery, UpdateShiftRequest};
use rostersync_core::roster::Shift;
use uuid::Uuid;

use super::RostersyncClient;
use crate::error::Result;

/// Body for the instruction/message log endpoints.
#[derive(Debug, serde::Serialize)]
struct LogEntryRequest<'a> {
    text: &'a str,
}

impl RostersyncClient {
    /// List shifts with range filters.
    pub async fn list_shifts(&self, query: ShiftQuery) -> Result<Vec<Shift>> {
        let response = self
            .client
            .get(self.url("/api/shifts"))
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get shift by ID.
    pub async fn get_shift(&self, id: Uuid) -> Result<Shift> {
        let response = self
            .client
            .get(self.url(&format!("/api/shifts/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a new shift.
    pub async fn create_shift(&self, req: &CreateShiftRequest) -> Result<Shift> {
        let response = self
            .client
            .post(self.url("/api/shifts"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update a shift.
    pub async fn update_shift(&self, id: Uuid, req: &UpdateShiftRequest) -> Result<Shift> {
        let response = self
            .client
            .put(self.url(&format!("/api/shifts/{}", id)))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete shift by ID.
    pub async fn delete_shift(&self, id: Uuid) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/shifts/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    /// Cancel a shift. Server-side this reassigns cover and flags the record.
    pub async fn cancel_shift(&self, id: Uuid) -> Result<Shift> {
        let response = self
            .client
            .post(self.url(&format!("/api/shifts/{}/cancel", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Append an instruction to the shift's instructions log.
    pub async fn add_instruction(&self, id: Uuid, text: &str) -> Result<Shift> {
        let response = self
            .client
            .post(self.url(&format!("/api/shifts/{}/instructions", id)))
            .json(&LogEntryRequest { text })
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Append a message to the shift's message log.
    pub async fn add_message(&self, id: Uuid, text: &str) -> Result<Shift> {
        let response = self
            .client
            .post(self.url(&format!("/api/shifts/{}/messages", id)))
            .json(&LogEntryRequest { text })
            .send()
            .await?;
        self.handle_response(response).await
    }
}
