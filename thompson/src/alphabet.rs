//! The recognized alphabet Σ and the fixed set of regex meta-characters.
//!
//! Σ is the set of printable ASCII alphanumerics. Everything else a pattern
//! may contain is one of a small, fixed set of meta-characters used to build
//! structure (grouping, alternation, repetition, ranges).

/// The meta-characters recognized by the grammar, in no particular order.
pub const META_CHARS: [char; 9] = ['*', '|', '+', '?', '(', ')', '[', '-', ']'];

/// Checks whether `c` belongs to Σ, the literal alphabet.
pub fn is_literal(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Checks whether `c` is one of the recognized meta-characters.
pub fn is_meta(c: char) -> bool {
    META_CHARS.contains(&c)
}

/// Checks whether `c` is legal anywhere in a pattern, i.e. in Σ ∪ meta-characters.
pub fn is_symbol(c: char) -> bool {
    is_literal(c) || is_meta(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_are_alphanumeric() {
        assert!(is_literal('a'));
        assert!(is_literal('Z'));
        assert!(is_literal('0'));
        assert!(!is_literal(' '));
        assert!(!is_literal('*'));
    }

    #[test]
    fn meta_chars_are_not_literals() {
        for c in META_CHARS {
            assert!(is_meta(c));
            assert!(!is_literal(c));
            assert!(is_symbol(c));
        }
    }

    #[test]
    fn unknown_chars_are_no_symbol() {
        assert!(!is_symbol(' '));
        assert!(!is_symbol('_'));
        assert!(!is_symbol('.'));
    }
}
