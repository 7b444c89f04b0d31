use chrono::NaiveDate;
use uuid::Uuid;

use crate::roster::DateRange;

/// Returns the cache key for a single shift.
pub fn shift_key(shift_id: Uuid) -> String {
    format!("shift:{}", shift_id)
}

/// Returns the cache key for shifts within a date range.
///
/// Keys are derived from calendar-date boundaries only, so any two loads of
/// the same visible window normalize to the same key.
pub fn shift_range_key(range: DateRange) -> String {
    format!("shifts:range:{}:{}", range.start, range.end)
}

/// Returns the pattern matching all shift range keys.
pub fn shift_range_pattern() -> &'static str {
    "shifts:range:*"
}

/// Returns the cache key for a reference-data list ("clients", "locations",
/// "teams", "staff").
pub fn reference_key(kind: &str) -> String {
    format!("reference:{}", kind)
}

/// Returns the cache key for a user lookup.
pub fn user_key(user_id: Uuid) -> String {
    format!("user:{}", user_id)
}

/// Returns the Redis Set key used to track shift range keys.
///
/// The set contains every `shifts:range:{start}:{end}` key currently stored,
/// so pattern deletion can enumerate members instead of using SCAN.
pub fn range_tracking_key() -> &'static str {
    "shifts:range:_keys"
}

/// Checks if a cache key is a shift range key (`shifts:range:{start}:{end}`).
pub fn is_shift_range_key(key: &str) -> bool {
    parse_shift_range_key(key).is_some()
}

/// Extracts the date range from a shift range key, if the key is one.
///
/// Returns `None` for the tracking key, malformed dates, and non-range keys.
///
/// # Examples
///
/// ```
/// use rostersync_core::cache::parse_shift_range_key;
///
/// let range = parse_shift_range_key("shifts:range:2024-06-01:2024-06-30").unwrap();
/// assert_eq!(range.start.to_string(), "2024-06-01");
///
/// assert!(parse_shift_range_key("shift:abc").is_none());
/// assert!(parse_shift_range_key("shifts:range:_keys").is_none());
/// ```
pub fn parse_shift_range_key(key: &str) -> Option<DateRange> {
    let rest = key.strip_prefix("shifts:range:")?;
    let (start_part, end_part) = rest.split_once(':')?;
    let start = start_part.parse::<NaiveDate>().ok()?;
    let end = end_part.parse::<NaiveDate>().ok()?;
    DateRange::new(start, end).ok()
}
