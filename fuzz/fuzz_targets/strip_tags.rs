//! Fuzz harness for tag stripping
//!
//! Arbitrary UTF-8 in, no panics out; the result can only shrink.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return, // Skip non-UTF-8 input
    };

    let out = strops_markup::strip_tags(input);
    assert!(out.len() <= input.len());

    // Stripping again must find nothing new to remove.
    assert_eq!(strops_markup::strip_tags(&out), out);
});
