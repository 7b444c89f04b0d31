use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a staff member holds within a single shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftRole {
    /// Runs the shift and signs off on the instructions log.
    Supervisor,
    /// Regular member of the shift's team.
    TeamMember,
    /// Directly assigned outside of a team.
    Assigned,
    /// Covering for a cancelled or absent assignment.
    Cover,
}

/// A staff member attached to a shift, tagged with their role in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub staff_id: Uuid,
    pub role: ShiftRole,
}

impl ShiftAssignment {
    pub fn new(staff_id: Uuid, role: ShiftRole) -> Self {
        Self { staff_id, role }
    }
}

/// A scheduled shift.
///
/// The remote API is the source of truth; instances held by the coordinator
/// are a local mirror keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: Uuid,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub staff: Vec<ShiftAssignment>,
    #[serde(default)]
    pub client_ids: Vec<Uuid>,
    #[serde(default)]
    pub location_ids: Vec<Uuid>,
    #[serde(default)]
    pub team_ids: Vec<Uuid>,
    /// Free-text instructions log, oldest first.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Free-text message log, oldest first.
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub in_progress: bool,
}

impl Shift {
    /// Creates a new unpublished shift.
    pub fn new(title: impl Into<String>, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            starts_at,
            ends_at,
            staff: Vec::new(),
            client_ids: Vec::new(),
            location_ids: Vec::new(),
            team_ids: Vec::new(),
            instructions: Vec::new(),
            messages: Vec::new(),
            published: false,
            cancelled: false,
            in_progress: false,
        }
    }

    /// Sets a specific ID for this shift (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Attaches a staff member with the given role.
    pub fn with_staff(mut self, staff_id: Uuid, role: ShiftRole) -> Self {
        self.staff.push(ShiftAssignment::new(staff_id, role));
        self
    }

    /// Associates a client with this shift.
    pub fn with_client(mut self, client_id: Uuid) -> Self {
        self.client_ids.push(client_id);
        self
    }

    /// Associates a location with this shift.
    pub fn with_location(mut self, location_id: Uuid) -> Self {
        self.location_ids.push(location_id);
        self
    }

    /// Associates a team with this shift.
    pub fn with_team(mut self, team_id: Uuid) -> Self {
        self.team_ids.push(team_id);
        self
    }

    /// Marks this shift as published.
    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    /// The calendar date the shift starts on (UTC).
    ///
    /// Range-cache invalidation works on calendar dates, not timestamps.
    pub fn start_date(&self) -> NaiveDate {
        self.starts_at.date_naive()
    }

    /// Returns true if any assignment on this shift has the given role.
    pub fn has_role(&self, role: ShiftRole) -> bool {
        self.staff.iter().any(|a| a.role == role)
    }
}

/// A client the roster serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub contact_email: Option<String>,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            contact_email: None,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }
}

/// A physical location shifts take place at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: None,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// A named team of staff members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A rosterable staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl StaffMember {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}
