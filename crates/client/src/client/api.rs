//! Coordinator-facing trait implementations.
//!
//! `RostersyncClient` implements the core API traits so the coordinator can
//! be constructed over the real HTTP client in production and over mocks in
//! tests.

use async_trait::async_trait;
use uuid::Uuid;

use rostersync_core::api::{
    ApiError, CreateShiftRequest, ReferenceApi, Result, ShiftApi, ShiftQuery, UpdateShiftRequest,
};
use rostersync_core::roster::{Client, DateRange, Location, Shift, StaffMember, Team};

use super::RostersyncClient;
use crate::error::ClientError;

#[async_trait]
impl ShiftApi for RostersyncClient {
    async fn list_shifts(&self, range: DateRange, include_relations: bool) -> Result<Vec<Shift>> {
        let query = ShiftQuery {
            start_date: Some(range.start),
            end_date: Some(range.end),
            include_relations: Some(include_relations),
        };
        RostersyncClient::list_shifts(self, query)
            .await
            .map_err(ApiError::from)
    }

    async fn get_shift(&self, id: Uuid) -> Result<Option<Shift>> {
        match RostersyncClient::get_shift(self, id).await {
            Ok(shift) => Ok(Some(shift)),
            Err(ClientError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn create_shift(&self, req: &CreateShiftRequest) -> Result<Shift> {
        RostersyncClient::create_shift(self, req)
            .await
            .map_err(ApiError::from)
    }

    async fn update_shift(&self, id: Uuid, req: &UpdateShiftRequest) -> Result<Shift> {
        RostersyncClient::update_shift(self, id, req)
            .await
            .map_err(ApiError::from)
    }

    async fn delete_shift(&self, id: Uuid) -> Result<()> {
        RostersyncClient::delete_shift(self, id)
            .await
            .map_err(ApiError::from)
    }

    async fn cancel_shift(&self, id: Uuid) -> Result<Shift> {
        RostersyncClient::cancel_shift(self, id)
            .await
            .map_err(ApiError::from)
    }

    async fn add_instruction(&self, id: Uuid, text: &str) -> Result<Shift> {
        RostersyncClient::add_instruction(self, id, text)
            .await
            .map_err(ApiError::from)
    }

    async fn add_message(&self, id: Uuid, text: &str) -> Result<Shift> {
        RostersyncClient::add_message(self, id, text)
            .await
            .map_err(ApiError::from)
    }
}

#[async_trait]
impl ReferenceApi for RostersyncClient {
    async fn list_clients(&self) -> Result<Vec<Client>> {
        RostersyncClient::list_clients(self)
            .await
            .map_err(ApiError::from)
    }

    async fn list_locations(&self) -> Result<Vec<Location>> {
        RostersyncClient::list_locations(self)
            .await
            .map_err(ApiError::from)
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        RostersyncClient::list_teams(self)
            .await
            .map_err(ApiError::from)
    }

    async fn list_staff(&self) -> Result<Vec<StaffMember>> {
        RostersyncClient::list_staff(self)
            .await
            .map_err(ApiError::from)
    }
}
