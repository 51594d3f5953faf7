//! Polyfill-style string utilities.
//!
//! One crate pulling together the full strops surface: whitespace
//! trimming, casing transforms, substring predicates, bounded repetition,
//! markup helpers, Levenshtein edit distance, and random identifier
//! generation. Every operation is a stateless function over its inputs;
//! only [`repeat`] can fail, and only [`uuid`] touches a randomness
//! source.
//!
//! ```
//! assert_eq!(strops::trim_full("  foo    bar  "), "foo bar");
//! assert_eq!(strops::upper_words("à toi"), "À Toi");
//! assert_eq!(strops::levenshtein("kitten", "sitting"), 3);
//! assert_eq!(strops::repeat("ab", 3.0).unwrap(), "ababab");
//! assert!(strops::is_canonical(&strops::uuid()));
//! ```

pub use strops_case::{upper_first, upper_words};
pub use strops_chars::{is_word_lower, reverse};
pub use strops_distance::levenshtein;
pub use strops_markup::{escape_html, nl2br, strip_tags, unescape_html};
pub use strops_repeat::{repeat, RepeatError};
pub use strops_search::{contains, ends_with, ends_with_at, starts_with, starts_with_at};
pub use strops_trim::{trim, trim_full, trim_left, trim_right};
pub use strops_uuid::{is_canonical, uuid};
