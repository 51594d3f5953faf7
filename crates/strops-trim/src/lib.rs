//! Whitespace trimming utilities for strops.
//!
//! This crate provides total trimming functions over any string input,
//! including the empty string. None of them can fail.

/// Trims whitespace from both ends of a string
pub fn trim(s: &str) -> String {
    s.trim().to_string()
}

/// Trims whitespace from the start of a string
pub fn trim_left(s: &str) -> String {
    s.trim_start().to_string()
}

/// Trims whitespace from the end of a string
pub fn trim_right(s: &str) -> String {
    s.trim_end().to_string()
}

/// Trims both ends and collapses every internal whitespace run to a
/// single space.
///
/// Newlines count as whitespace like any other, so embedded line breaks
/// and the whitespace around them come out as one space.
pub fn trim_full(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(c);
            last_was_space = false;
        }
    }

    out.trim().to_string()
}
