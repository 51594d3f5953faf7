//! Substring predicates for strops.
//!
//! This crate provides case-sensitive containment and anchored-match
//! predicates. All comparisons are exact: no case folding, no
//! normalization. The empty needle matches trivially everywhere.
//!
//! The `_at` variants anchor the match at a byte offset. An offset that
//! is out of range or does not fall on a character boundary matches
//! nothing.

/// Returns true if `needle` occurs anywhere in `haystack`.
pub fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// Returns true if `haystack` starts with `needle`.
pub fn starts_with(haystack: &str, needle: &str) -> bool {
    haystack.starts_with(needle)
}

/// Returns true if `haystack` matches `needle` starting at byte offset
/// `position`.
pub fn starts_with_at(haystack: &str, needle: &str, position: usize) -> bool {
    if needle.is_empty() {
        return true;
    }
    match haystack.get(position..) {
        Some(tail) => tail.starts_with(needle),
        None => false,
    }
}

/// Returns true if `haystack` ends with `needle`.
pub fn ends_with(haystack: &str, needle: &str) -> bool {
    haystack.ends_with(needle)
}

/// Returns true if `needle` ends exactly at byte offset `position` in
/// `haystack`. Offsets past the end clamp to the end.
pub fn ends_with_at(haystack: &str, needle: &str, position: usize) -> bool {
    if needle.is_empty() {
        return true;
    }
    let position = position.min(haystack.len());
    match haystack.get(..position) {
        Some(head) => head.ends_with(needle),
        None => false,
    }
}
