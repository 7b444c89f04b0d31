//! Client (customer) API operations.

use rostersync_core::roster::Client;
use uuid::Uuid;

use super::RostersyncClient;
use crate::error::Result;

/// Request for creating a client.
#[derive(Debug, serde::Serialize)]
pub struct CreateClientRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl RostersyncClient {
    /// List all clients.
    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        let response = self.client.get(self.url("/api/clients")).send().await?;
        self.handle_response(response).await
    }

    /// Get client by ID.
    pub async fn get_client(&self, id: Uuid) -> Result<Client> {
        let response = self
            .client
            .get(self.url(&format!("/api/clients/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a new client.
    pub async fn create_client(&self, req: CreateClientRequest) -> Result<Client> {
        let response = self
            .client
            .post(self.url("/api/clients"))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete client by ID.
    pub async fn delete_client(&self, id: Uuid) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/clients/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
