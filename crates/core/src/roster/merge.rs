//! Pure functions for merging fetched shifts into local coordinator state.

use std::collections::HashMap;

use uuid::Uuid;

use super::Shift;

/// Merges fetched shifts into local state keyed by shift id.
///
/// A shift already present is replaced by the fetched version; merging can
/// never produce two entries with the same id.
pub fn merge_shifts(local: &mut HashMap<Uuid, Shift>, fetched: Vec<Shift>) {
    for shift in fetched {
        local.insert(shift.id, shift);
    }
}

/// Sorts shifts chronologically by start time, then by title.
pub fn sort_shifts(shifts: &mut [Shift]) {
    shifts.sort_by(|a, b| {
        a.starts_at
            .cmp(&b.starts_at)
            .then_with(|| a.title.cmp(&b.title))
    });
}
