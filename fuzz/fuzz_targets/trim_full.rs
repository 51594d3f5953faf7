//! Fuzz harness for whitespace collapsing
//!
//! trim_full must be idempotent and produce no whitespace runs for any
//! UTF-8 input.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return, // Skip non-UTF-8 input
    };

    let out = strops_trim::trim_full(input);
    assert_eq!(strops_trim::trim_full(&out), out);
    assert!(!out.starts_with(char::is_whitespace));
    assert!(!out.ends_with(char::is_whitespace));
    assert!(!out.contains("  "));
});
