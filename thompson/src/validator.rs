//! Pattern validation: a single left-to-right pass that rejects anything
//! the parser shouldn't have to think about, so [`crate::parser`] can assume
//! a well-formed token stream.
//!
//! The original implementation this crate descends from validated brackets
//! with a flat character stack and left operator placement mostly
//! unchecked. Here each nesting level (group or top level) tracks two bits
//! of state instead of one: whether the current alternative has *any*
//! content yet (`has_content`, needed to reject empty alternatives like
//! `a||b` or `()`), and whether the token just seen was something an
//! operator can attach to (`operand_end`, needed to reject `*a` or `a**`
//! while still allowing `a*|b`, where the `|` doesn't need an operand to
//! its immediate left the way `*` does).

use crate::alphabet::{is_literal, is_meta};
use crate::error::PatternError;

#[derive(Debug, Clone, Copy)]
struct Scope {
    /// Byte offset of the `(` that opened this scope, or 0 at top level.
    open_at: usize,
    has_content: bool,
    operand_end: bool,
}

impl Scope {
    fn new(open_at: usize) -> Self {
        Scope {
            open_at,
            has_content: false,
            operand_end: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassState {
    /// Just saw `[`, nothing in the class body yet.
    Empty,
    /// Saw a character; it may become the start of a `-` range.
    HaveChar(char),
    /// Saw `lo -`, waiting for the range's end character.
    PendingRangeEnd(char),
}

/// Validates `pattern` against the grammar of spec §4.1, returning the
/// trimmed pattern on success.
///
/// Leading and trailing whitespace is stripped before validation; no
/// whitespace is permitted anywhere else.
pub fn validate(pattern: &str) -> Result<&str, PatternError> {
    let trimmed = pattern.trim();
    if trimmed.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let mut scopes: Vec<Scope> = vec![Scope::new(0)];
    let mut class: Option<(usize, ClassState)> = None;

    for (i, c) in trimmed.char_indices() {
        if let Some((open_at, state)) = class {
            match c {
                ']' => {
                    match state {
                        ClassState::Empty => {
                            return Err(PatternError::IllFormedRange(
                                open_at,
                                "empty character class".to_string(),
                            ))
                        }
                        ClassState::PendingRangeEnd(_) => {
                            return Err(PatternError::IllFormedRange(
                                open_at,
                                "range missing high endpoint".to_string(),
                            ))
                        }
                        ClassState::HaveChar(_) => {}
                    }
                    class = None;
                    let scope = scopes.last_mut().expect("scope stack non-empty");
                    scope.has_content = true;
                    scope.operand_end = true;
                }
                '-' => match state {
                    ClassState::HaveChar(lo) => {
                        class = Some((open_at, ClassState::PendingRangeEnd(lo)))
                    }
                    _ => {
                        return Err(PatternError::IllFormedRange(
                            i,
                            "'-' must follow a single character".to_string(),
                        ))
                    }
                },
                ch if is_literal(ch) => {
                    if let ClassState::PendingRangeEnd(lo) = state {
                        if lo > ch {
                            return Err(PatternError::IllFormedRange(
                                open_at,
                                format!("range endpoints out of order: '{lo}' > '{ch}'"),
                            ));
                        }
                    }
                    class = Some((open_at, ClassState::HaveChar(ch)));
                }
                ch => return Err(PatternError::IllegalCharacter(ch, i)),
            }
            continue;
        }

        match c {
            ch if is_literal(ch) => {
                let scope = scopes.last_mut().expect("scope stack non-empty");
                scope.has_content = true;
                scope.operand_end = true;
            }
            '[' => {
                class = Some((i, ClassState::Empty));
            }
            ']' => return Err(PatternError::UnmatchedClosingBracket(']', i)),
            '-' => return Err(PatternError::IllegalCharacter('-', i)),
            '(' => {
                scopes.push(Scope::new(i));
            }
            ')' => {
                if scopes.len() == 1 {
                    return Err(PatternError::UnmatchedClosingBracket(')', i));
                }
                let inner = scopes.pop().expect("just checked len > 1");
                if !inner.has_content {
                    return Err(PatternError::MisplacedAlternation(inner.open_at));
                }
                let scope = scopes.last_mut().expect("scope stack non-empty");
                scope.has_content = true;
                scope.operand_end = true;
            }
            '|' => {
                let scope = scopes.last_mut().expect("scope stack non-empty");
                if !scope.has_content {
                    return Err(PatternError::MisplacedAlternation(i));
                }
                scope.has_content = false;
                scope.operand_end = false;
            }
            '*' | '+' | '?' => {
                let scope = scopes.last_mut().expect("scope stack non-empty");
                if !scope.operand_end {
                    return Err(PatternError::MisplacedOperator(c, i));
                }
                scope.operand_end = false;
            }
            ch if is_meta(ch) => {
                return Err(PatternError::Internal(format!(
                    "unhandled meta-character '{ch}'"
                )))
            }
            ch => return Err(PatternError::IllegalCharacter(ch, i)),
        }
    }

    if let Some((open_at, _)) = class {
        return Err(PatternError::UnbalancedBracket('[', open_at));
    }

    while scopes.len() > 1 {
        let scope = scopes.pop().expect("len > 1 just checked");
        if scope.open_at == 0 {
            break;
        }
        return Err(PatternError::UnbalancedBracket('(', scope.open_at));
    }

    let top = scopes.last().expect("top-level scope always present");
    if !top.has_content {
        return Err(PatternError::EmptyPattern);
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(p: &str) {
        assert!(validate(p).is_ok(), "expected {p:?} to validate");
    }

    fn err(p: &str) {
        assert!(validate(p).is_err(), "expected {p:?} to be rejected");
    }

    #[test]
    fn accepts_plain_literals_and_structure() {
        ok("abc");
        ok("a|b");
        ok("a*");
        ok("a+");
        ok("a?");
        ok("(ab)*");
        ok("a(b|c)d");
        ok("[a-z]");
        ok("[abc]");
        ok("(a|b)*c+");
    }

    #[test]
    fn operator_after_alternation_is_legal() {
        // '*' closes the left alternative; '|' doesn't need an operand
        // immediately to its left, only a non-empty alternative behind it.
        ok("a*|b");
    }

    #[test]
    fn rejects_empty_pattern() {
        err("");
        err("   ");
    }

    #[test]
    fn rejects_stacked_operators() {
        err("a**");
        err("a*+");
        err("*a");
    }

    #[test]
    fn rejects_empty_alternatives() {
        err("a||b");
        err("|a");
        err("a|");
        err("()");
        err("(a|)");
    }

    #[test]
    fn rejects_unbalanced_brackets() {
        err("(ab");
        err("ab)");
        err("[ab");
        err("ab]");
    }

    #[test]
    fn rejects_ill_formed_ranges() {
        err("[]");
        err("[a-]");
        err("[-a]");
        err("[a--z]");
        err("[z-a]");
        err("[9-0]");
    }

    #[test]
    fn accepts_descending_looking_but_valid_ranges() {
        ok("[a-a]");
        ok("[0-9]");
    }

    #[test]
    fn rejects_illegal_characters() {
        err("a b");
        err("a.b");
        err("a_b");
    }
}
