//! Fuzz harness for bounded repetition
//!
//! The first byte picks the count, the rest is the input string. The
//! ceiling must hold: either the call errors or the output length is the
//! exact multiple.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((count_byte, rest)) = data.split_first() else {
        return;
    };
    let input = match std::str::from_utf8(rest) {
        Ok(s) => s,
        Err(_) => return, // Skip non-UTF-8 input
    };

    let count = f64::from(*count_byte);
    match strops_repeat::repeat(input, count) {
        Ok(out) => {
            assert!(out.chars().count() < 1 << 28);
            assert_eq!(out.chars().count(), input.chars().count() * *count_byte as usize);
        }
        Err(strops_repeat::RepeatError::Overflow) => {
            assert!(input.chars().count() * *count_byte as usize >= 1 << 28);
        }
        Err(strops_repeat::RepeatError::NegativeCount) => unreachable!(),
    }
});
