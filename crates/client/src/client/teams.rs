//! Team API operations.

use rostersync_core::roster::Team;
use uuid::Uuid;

use super::RostersyncClient;
use crate::error::Result;

/// Request for creating a team.
#[derive(Debug, serde::Serialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

impl RostersyncClient {
    /// List all teams.
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        let response = self.client.get(self.url("/api/teams")).send().await?;
        self.handle_response(response).await
    }

    /// Create a new team.
    pub async fn create_team(&self, req: CreateTeamRequest) -> Result<Team> {
        let response = self
            .client
            .post(self.url("/api/teams"))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete team by ID.
    pub async fn delete_team(&self, id: Uuid) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/teams/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
