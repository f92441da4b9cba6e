//! # Pattern grammar
//!
//! A pattern is a regular expression over Σ (printable ASCII alphanumerics)
//! with the usual structural operators:
//!
//! - `ab`: concatenation (sequence, implicit)
//! - `a|b`: alternation
//! - `a*`: zero or more
//! - `a+`: one or more
//! - `a?`: zero or one
//! - `(a|b)c`: grouping
//! - `[a-z]`, `[abc]`: a character class, equivalent to alternation over
//!   its members
//!
//! Leading and trailing whitespace around a pattern is ignored; whitespace
//! within it is not, and is rejected by [`crate::validator::validate`]
//! before parsing is attempted.
//!
//! Parsing and NFA construction happen in the same pass: there is no
//! intermediate syntax tree. [`regex::parse_pattern`] threads a
//! [`crate::nfa::Builder`] through a recursive-descent nom grammar and
//! returns the finished [`crate::nfa::Nfa`] directly.

pub(crate) mod regex;

use crate::error::PatternError;
use crate::nfa::Nfa;
use crate::validator;

/// Validates and compiles `pattern` into an [`Nfa`].
///
/// This is the single entry point used by [`crate::compile`]; callers
/// outside the crate should prefer that function.
pub fn parse(pattern: &str) -> Result<Nfa, PatternError> {
    let trimmed = validator::validate(pattern)?;
    regex::parse_pattern(trimmed)
}
