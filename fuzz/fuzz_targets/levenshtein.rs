//! Fuzz harness for edit distance
//!
//! Splits the input in two and checks the metric bounds hold for any
//! pair of UTF-8 strings.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return, // Skip non-UTF-8 input
    };

    let mid = input.len() / 2;
    // Walk back to a char boundary for the split.
    let mid = (0..=mid).rev().find(|i| input.is_char_boundary(*i)).unwrap_or(0);
    let (a, b) = input.split_at(mid);

    let d = strops_distance::levenshtein(a, b);
    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(d <= la.max(lb));
    assert!(d >= la.abs_diff(lb));
    assert_eq!(d == 0, a == b);
    assert_eq!(d, strops_distance::levenshtein(b, a));
});
