//! Location API operations.

use rostersync_core::roster::Location;
use uuid::Uuid;

use super::RostersyncClient;
use crate::error::Result;

/// Request for creating a location.
#[derive(Debug, serde::Serialize)]
pub struct CreateLocationRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl RostersyncClient {
    /// List all locations.
    pub async fn list_locations(&self) -> Result<Vec<Location>> {
        let response = self.client.get(self.url("/api/locations")).send().await?;
        self.handle_response(response).await
    }

    /// Create a new location.
    pub async fn create_location(&self, req: CreateLocationRequest) -> Result<Location> {
        let response = self
            .client
            .post(self.url("/api/locations"))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete location by ID.
    pub async fn delete_location(&self, id: Uuid) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/locations/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
