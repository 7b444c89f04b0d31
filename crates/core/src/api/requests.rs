use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::roster::{ShiftAssignment, ShiftRole};

/// Query parameters for range-filtered shift listing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_relations: Option<bool>,
}

/// Request for creating a shift.
#[derive(Debug, Clone, Serialize)]
pub struct CreateShiftRequest {
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub staff: Vec<ShiftAssignment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub client_ids: Vec<Uuid>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub location_ids: Vec<Uuid>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team_ids: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl CreateShiftRequest {
    pub fn new(
        title: impl Into<String>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            starts_at,
            ends_at,
            staff: Vec::new(),
            client_ids: Vec::new(),
            location_ids: Vec::new(),
            team_ids: Vec::new(),
            published: None,
        }
    }

    pub fn with_staff(mut self, staff_id: Uuid, role: ShiftRole) -> Self {
        self.staff.push(ShiftAssignment::new(staff_id, role));
        self
    }
}

/// Request for updating a shift. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateShiftRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<Vec<ShiftAssignment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ids: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_ids: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_progress: Option<bool>,
}
