//! TTL cache of range-scoped shift fetches with in-flight de-duplication.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::NaiveDate;

use rostersync_core::roster::{DateRange, Shift};

/// One cached fetch: the bounds actually queried and what came back.
struct RangeEntry {
    range: DateRange,
    shifts: Vec<Shift>,
    fetched_at: Instant,
}

/// Per-coordinator cache of shift fetches keyed by normalized range key.
///
/// Not shared between sessions; the owning coordinator's lifecycle is the
/// cache's lifecycle. Locks guard only map access and are never held across
/// await points.
pub(crate) struct RangeCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, RangeEntry>>,
    in_flight: Mutex<HashSet<String>>,
}

/// Marker that a fetch for a key is executing. Removes itself on drop, so
/// the marker is cleared on success and failure alike.
pub(crate) struct InFlightGuard<'a> {
    cache: &'a RangeCache,
    key: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut in_flight) = self.cache.in_flight.lock() {
            in_flight.remove(&self.key);
        }
    }
}

impl RangeCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Returns the shifts of a non-expired entry.
    ///
    /// An entry is never returned once its age reaches the TTL.
    pub fn fresh(&self, key: &str) -> Option<Vec<Shift>> {
        let entries = self.entries.lock().unwrap();
        let entry = entries.get(key)?;
        if entry.fetched_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.shifts.clone())
    }

    /// Returns true while a fetch for `key` is executing.
    pub fn is_in_flight(&self, key: &str) -> bool {
        self.in_flight.lock().unwrap().contains(key)
    }

    /// Marks a fetch for `key` as in flight.
    ///
    /// Returns `None` when one already is; callers treat that as "skip, do
    /// not queue".
    pub fn begin(&self, key: &str) -> Option<InFlightGuard<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap();
        if !in_flight.insert(key.to_string()) {
            return None;
        }
        Some(InFlightGuard {
            cache: self,
            key: key.to_string(),
        })
    }

    /// Stores a completed fetch with a fresh timestamp.
    pub fn store(&self, key: String, range: DateRange, shifts: Vec<Shift>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key,
            RangeEntry {
                range,
                shifts,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drops every cached entry.
    pub fn invalidate_all(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Drops entries whose fetched bounds contain `date`.
    ///
    /// Checked against the range actually queried (including any padding),
    /// not the caller's requested window, so buffered data cannot survive a
    /// create that lands inside the pad.
    pub fn invalidate_containing(&self, date: NaiveDate) {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|_, entry| !entry.range.contains(date));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
