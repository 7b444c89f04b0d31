//! Glob-style pattern matching for cache keys.
//!
//! Supports `*` as a wildcard matching any sequence of characters, which is
//! the only pattern form the backends need for key invalidation.

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use rostersync_core::cache::pattern_matches;
///
/// // Exact match
/// assert!(pattern_matches("reference:clients", "reference:clients"));
///
/// // Wildcard at end
/// assert!(pattern_matches("shifts:range:*", "shifts:range:2024-06-01:2024-06-30"));
///
/// // No match
/// assert!(!pattern_matches("shifts:range:*", "user:456"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    if !pattern.contains('*') {
        return pattern == key;
    }

    let mut segments = pattern.split('*');

    // The first segment is anchored at the start of the key.
    let first = segments.next().unwrap_or("");
    let Some(mut remaining) = key.strip_prefix(first) else {
        return false;
    };

    let rest: Vec<&str> = segments.collect();
    for (i, segment) in rest.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        let is_last = i == rest.len() - 1;
        if is_last && !pattern.ends_with('*') {
            // Final segment is anchored at the end of the key.
            return remaining.ends_with(segment);
        }
        match remaining.find(segment) {
            Some(pos) => remaining = &remaining[pos + segment.len()..],
            None => return false,
        }
    }

    true
}
