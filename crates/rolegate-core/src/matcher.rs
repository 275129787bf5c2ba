//! Segment-wildcard matching for dotted permission strings.
//!
//! A permission string is matched coarse-to-fine: for `"a.b.c"` the
//! granted set is probed for `"a.*"`, then `"a.b.*"`, then the exact
//! string. Any wildcard hit short-circuits; the final segment is only
//! ever matched exactly. Matching is case-insensitive.

use std::collections::HashSet;

/// The permission that grants everything, unconditionally.
pub const UNIVERSAL_WILDCARD: &str = ".*";

/// Test a permission string against a set of granted permissions.
///
/// `granted` must hold lowercased entries; the query is lowercased here.
/// A string without any dot separator is tested for exact membership
/// only. The universal wildcard is not special-cased here; callers that
/// want its bypass check it first (see [`crate::Group::grants`]).
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use rolegate_core::matcher::matches;
///
/// let granted: HashSet<String> = ["round.*".to_string()].into_iter().collect();
/// assert!(matches(&granted, "round.start"));
/// assert!(matches(&granted, "Round.End"));
/// assert!(!matches(&granted, "roundx.start"));
/// ```
pub fn matches(granted: &HashSet<String>, permission: &str) -> bool {
    let query = permission.to_lowercase();

    if !query.contains('.') {
        return granted.contains(&query);
    }

    let segments: Vec<&str> = query.split('.').collect();
    let last = segments.len() - 1;
    let mut prefix = String::with_capacity(query.len() + 2);

    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            prefix.push('.');
        }
        prefix.push_str(segment);

        if index < last {
            let len = prefix.len();
            prefix.push_str(".*");
            if granted.contains(&prefix) {
                return true;
            }
            prefix.truncate(len);
        }
    }

    granted.contains(&prefix)
}
