//! Fuzz harness for newline-to-break conversion
//!
//! Every newline character must be consumed in both tag modes.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return, // Skip non-UTF-8 input
    };

    for xhtml in [true, false] {
        let out = strops_markup::nl2br(input, xhtml);
        assert!(!out.contains('\n'));
        assert!(!out.contains('\r'));
    }
});
