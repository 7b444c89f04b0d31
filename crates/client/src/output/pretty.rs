//! Pretty output formatting.

use rostersync_core::roster::{Client, Location, Shift, ShiftRole, StaffMember, Team};

fn role_label(role: ShiftRole) -> &'static str {
    match role {
        ShiftRole::Supervisor => "supervisor",
        ShiftRole::TeamMember => "team member",
        ShiftRole::Assigned => "assigned",
        ShiftRole::Cover => "cover",
    }
}

/// Format a shift for display.
pub fn format_shift(shift: &Shift) -> String {
    let mut flags = Vec::new();
    if shift.published {
        flags.push("published");
    }
    if shift.cancelled {
        flags.push("cancelled");
    }
    if shift.in_progress {
        flags.push("in progress");
    }
    let flags = if flags.is_empty() {
        "draft".to_string()
    } else {
        flags.join(", ")
    };

    let mut output = format!(
        "{} [{}]\n  ID: {}\n  From: {}\n  To:   {}",
        shift.title, flags, shift.id, shift.starts_at, shift.ends_at
    );
    for assignment in &shift.staff {
        output.push_str(&format!(
            "\n  Staff: {} ({})",
            assignment.staff_id,
            role_label(assignment.role)
        ));
    }
    if !shift.instructions.is_empty() {
        output.push_str(&format!("\n  Instructions: {}", shift.instructions.len()));
    }
    if !shift.messages.is_empty() {
        output.push_str(&format!("\n  Messages: {}", shift.messages.len()));
    }
    output
}

/// Format shifts for display.
pub fn format_shifts(shifts: &[Shift]) -> String {
    if shifts.is_empty() {
        return "No shifts found.".to_string();
    }
    let mut output = format!("SHIFTS ({})\n", shifts.len());
    output.push_str(&"-".repeat(40));
    for shift in shifts {
        output.push_str(&format!("\n{}", format_shift(shift)));
        output.push('\n');
    }
    output
}

/// Format a client for display.
pub fn format_client(client: &Client) -> String {
    let mut output = format!("{}\n  ID: {}", client.name, client.id);
    if let Some(email) = &client.contact_email {
        output.push_str(&format!("\n  Contact: {}", email));
    }
    output
}

/// Format clients for display.
pub fn format_clients(clients: &[Client]) -> String {
    if clients.is_empty() {
        return "No clients found.".to_string();
    }
    let mut output = format!("CLIENTS ({})\n", clients.len());
    output.push_str(&"-".repeat(40));
    for client in clients {
        output.push_str(&format!("\n{}", format_client(client)));
        output.push('\n');
    }
    output
}

/// Format a location for display.
pub fn format_location(location: &Location) -> String {
    let mut output = format!("{}\n  ID: {}", location.name, location.id);
    if let Some(address) = &location.address {
        output.push_str(&format!("\n  Address: {}", address));
    }
    output
}

/// Format locations for display.
pub fn format_locations(locations: &[Location]) -> String {
    if locations.is_empty() {
        return "No locations found.".to_string();
    }
    let mut output = format!("LOCATIONS ({})\n", locations.len());
    output.push_str(&"-".repeat(40));
    for location in locations {
        output.push_str(&format!("\n{}", format_location(location)));
        output.push('\n');
    }
    output
}

/// Format a team for display.
pub fn format_team(team: &Team) -> String {
    format!("{}\n  ID: {}", team.name, team.id)
}

/// Format teams for display.
pub fn format_teams(teams: &[Team]) -> String {
    if teams.is_empty() {
        return "No teams found.".to_string();
    }
    let mut output = format!("TEAMS ({})\n", teams.len());
    output.push_str(&"-".repeat(40));
    for team in teams {
        output.push_str(&format!("\n{}", format_team(team)));
        output.push('\n');
    }
    output
}

/// Format a staff member for display.
pub fn format_staff_member(member: &StaffMember) -> String {
    format!(
        "{}\n  ID: {}\n  Email: {}",
        member.name, member.id, member.email
    )
}

/// Format staff members for display.
pub fn format_staff(members: &[StaffMember]) -> String {
    if members.is_empty() {
        return "No staff found.".to_string();
    }
    let mut output = format!("STAFF ({})\n", members.len());
    output.push_str(&"-".repeat(40));
    for member in members {
        output.push_str(&format!("\n{}", format_staff_member(member)));
        output.push('\n');
    }
    output
}
