//! Casing transforms for strops.
//!
//! This crate provides the two capitalization helpers: first code point
//! of the string, and first letter of every word.

use strops_chars::is_word_lower;

/// Uppercases the first code point of a string, leaving the rest unchanged.
///
/// Accented letters map through their Unicode uppercase form, so
/// `"ça"` becomes `"Ça"`. The empty string stays empty.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Uppercases the first letter of every word in a string.
///
/// A word starts at the beginning of the string or after whitespace, and
/// only letters in the fixed lowercase set (ASCII `a..=z` plus Latin-1
/// `à..=ü`) are touched. A letter attached by an apostrophe is not a word
/// start: `"c'est"` capitalizes to `"C'est"`, never `"C'Est"`.
pub fn upper_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if at_word_start && is_word_lower(c) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_first_basic() {
        assert_eq!(upper_first("one"), "One");
        assert_eq!(upper_first("T"), "T");
        assert_eq!(upper_first("foo"), "Foo");
    }

    #[test]
    fn upper_first_leading_space_untouched() {
        assert_eq!(upper_first(" plop"), " plop");
    }

    #[test]
    fn upper_first_accented() {
        assert_eq!(upper_first("ça"), "Ça");
        assert_eq!(upper_first("à toi"), "À toi");
    }

    #[test]
    fn upper_first_empty() {
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn upper_words_basic() {
        assert_eq!(upper_words("one thing at a time"), "One Thing At A Time");
        assert_eq!(upper_words(" T uno per five kick   "), " T Uno Per Five Kick   ");
        assert_eq!(upper_words(" plop"), " Plop");
    }

    #[test]
    fn upper_words_keeps_trailing_whitespace() {
        assert_eq!(upper_words("foo \n\t"), "Foo \n\t");
    }

    #[test]
    fn upper_words_accented_and_apostrophes() {
        assert_eq!(upper_words("ça c'est sûr que oui"), "Ça C'est Sûr Que Oui");
        assert_eq!(upper_words("à toi"), "À Toi");
    }

    #[test]
    fn upper_words_leaves_other_scripts_alone() {
        // Outside the fixed lowercase set, nothing is re-capitalized.
        assert_eq!(upper_words("ýota δelta"), "ýota δelta");
    }

    #[test]
    fn upper_words_empty() {
        assert_eq!(upper_words(""), "");
    }
}
