//! Fuzz harness for HTML entity escaping
//!
//! Escape then unescape must reproduce the input byte-for-byte, and the
//! escaped form must never carry a bare bracket.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return, // Skip non-UTF-8 input
    };

    let escaped = strops_markup::escape_html(input);
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('>'));
    assert_eq!(strops_markup::unescape_html(&escaped), input);
});
