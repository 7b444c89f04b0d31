//! Staff API operations.

use rostersync_core::roster::StaffMember;
use uuid::Uuid;

use super::RostersyncClient;
use crate::error::Result;

impl RostersyncClient {
    /// List all rosterable staff members.
    pub async fn list_staff(&self) -> Result<Vec<StaffMember>> {
        let response = self.client.get(self.url("/api/staff")).send().await?;
        self.handle_response(response).await
    }

    /// Get staff member by ID.
    pub async fn get_staff_member(&self, id: Uuid) -> Result<StaffMember> {
        let response = self
            .client
            .get(self.url(&format!("/api/staff/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
