//! Random identifier generation for strops.
//!
//! Produces identifiers in the canonical 8-4-4-4-12 hyphenated hex
//! layout with the v4 version nibble. The randomness source is the
//! process RNG, not a vetted UUID implementation.

use rand::Rng;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Generates a 36-character identifier in the 8-4-4-4-12 layout.
///
/// The version nibble is fixed to `4` and the variant nibble is one of
/// `8`, `9`, `a`, `b`; every other nibble is drawn independently from the
/// thread RNG.
///
/// Not cryptographically secure: the output is for labeling and
/// collision avoidance, and must not be used anywhere unpredictability
/// is a security requirement.
pub fn uuid() -> String {
    let mut rng = rand::rng();
    let mut out = String::with_capacity(36);

    for c in "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx".chars() {
        match c {
            'x' => {
                let nibble: usize = rng.random_range(0..16);
                out.push(HEX[nibble] as char);
            }
            'y' => {
                // Variant nibble: binary 10xx.
                let nibble: usize = rng.random_range(8..12);
                out.push(HEX[nibble] as char);
            }
            _ => out.push(c),
        }
    }

    out
}

/// Checks that a string has the exact layout [`uuid`] produces:
/// lowercase hex in 8-4-4-4-12 groups, version nibble `4`, variant
/// nibble in `{8, 9, a, b}`.
pub fn is_canonical(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 36 {
        return false;
    }

    for (i, b) in bytes.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if *b != b'-' {
                    return false;
                }
            }
            14 => {
                if *b != b'4' {
                    return false;
                }
            }
            19 => {
                if !matches!(*b, b'8' | b'9' | b'a' | b'b') {
                    return false;
                }
            }
            _ => {
                if !matches!(*b, b'0'..=b'9' | b'a'..=b'f') {
                    return false;
                }
            }
        }
    }

    true
}
