//! # thompson
//!
//! `thompson` is a regular-expression engine built on Thompson-construction
//! NFAs. It parses a pattern over a restricted grammar (concatenation,
//! alternation, Kleene star/plus/optional, grouping, character ranges),
//! compiles it into an NFA, and decides membership of candidate strings by
//! iterative ε-closure simulation: no backtracking, no recursion over the
//! input.
//!
//! ## Usage
//!
//! ```rust
//! use thompson::{compile, matches};
//!
//! let nfa = compile("a(b|c)*d").unwrap();
//! assert!(matches(&nfa, "ad"));
//! assert!(matches(&nfa, "abcbcd"));
//! assert!(!matches(&nfa, "abc"));
//! ```
//!
//! For batch workloads, one pattern compiled once and checked against many
//! candidate strings, see [`batch::BatchDriver`].

pub mod alphabet;
pub mod batch;
pub mod error;
pub mod nfa;
pub mod parser;
pub mod validator;

pub use error::PatternError;
pub use nfa::Nfa;

/// Validates and compiles `pattern` into an NFA (spec §6 core API).
pub fn compile(pattern: &str) -> Result<Nfa, PatternError> {
    parser::parse(pattern)
}

/// Decides whether `candidate` belongs to the language of `nfa` (spec §6
/// core API). The whole string must match; there is no partial or
/// streaming match.
pub fn matches(nfa: &Nfa, candidate: &str) -> bool {
    nfa.matches(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pattern: &str, cases: &[(&str, bool)]) {
        let nfa = compile(pattern).unwrap_or_else(|e| panic!("{pattern:?} failed: {e}"));
        for &(s, expected) in cases {
            assert_eq!(
                matches(&nfa, s),
                expected,
                "pattern {pattern:?}, string {s:?}"
            );
        }
    }

    #[test]
    fn seed_literal_a() {
        check("a", &[("", false), ("a", true), ("b", false), ("aa", false)]);
    }

    #[test]
    fn seed_concatenation_ab() {
        check(
            "ab",
            &[
                ("ab", true),
                ("a", false),
                ("abb", false),
                ("ba", false),
            ],
        );
    }

    #[test]
    fn seed_alternation_a_or_b() {
        check(
            "a|b",
            &[("a", true), ("b", true), ("ab", false), ("", false)],
        );
    }

    #[test]
    fn seed_star_a() {
        check(
            "a*",
            &[("", true), ("a", true), ("aaaa", true), ("b", false)],
        );
    }

    #[test]
    fn seed_plus_group_ab() {
        check(
            "(ab)+",
            &[("", false), ("ab", true), ("abab", true), ("aba", false)],
        );
    }

    #[test]
    fn seed_mixed_a_bc_star_d() {
        check(
            "a(b|c)*d",
            &[
                ("ad", true),
                ("abd", true),
                ("acbcd", true),
                ("abc", false),
            ],
        );
    }

    #[test]
    fn seed_range_a_to_c_plus() {
        check(
            "[a-c]+",
            &[
                ("a", true),
                ("abcabc", true),
                ("ad", false),
                ("", false),
            ],
        );
    }

    #[test]
    fn determinism_across_repeated_calls() {
        let nfa = compile("a(b|c)*d").unwrap();
        for _ in 0..10 {
            assert!(matches(&nfa, "abcbcd"));
            assert!(!matches(&nfa, "abcbc"));
        }
    }

    #[test]
    fn invalid_patterns_surface_pattern_errors() {
        assert!(compile("").is_err());
        assert!(compile("a**").is_err());
        assert!(compile("(a").is_err());
        assert!(compile("a|").is_err());
        assert!(compile("[a-]").is_err());
    }

    #[test]
    fn characters_outside_alphabet_simply_fail_to_match() {
        let nfa = compile("a").unwrap();
        assert!(!matches(&nfa, " "));
        assert!(!matches(&nfa, "a "));
    }
}
