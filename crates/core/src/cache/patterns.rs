//! Glob matching for cache keys.
//!
//! Patterns support `*` as a wildcard matching any run of characters,
//! including the empty one. Every other character matches itself.

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use pizzeria_core::cache::pattern_matches;
///
/// assert!(pattern_matches("product:*", "product:42"));
/// assert!(pattern_matches("product", "product"));
///
/// // The collection key is not an item key.
/// assert!(!pattern_matches("product:*", "product"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let mut segments = pattern.split('*');

    // `split` always yields at least one segment.
    let head = segments.next().unwrap_or_default();
    let Some(mut remaining) = key.strip_prefix(head) else {
        return false;
    };

    let rest: Vec<&str> = segments.collect();
    let Some((tail, middle)) = rest.split_last() else {
        // No wildcard at all: exact match.
        return remaining.is_empty();
    };

    for segment in middle.iter().filter(|s| !s.is_empty()) {
        match remaining.find(segment) {
            Some(pos) => remaining = &remaining[pos + segment.len()..],
            None => return false,
        }
    }

    remaining.ends_with(tail)
}
