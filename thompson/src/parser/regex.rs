//! The grammar itself: a nom recursive-descent parser that builds NFA
//! fragments directly instead of an intermediate tree.
//!
//! nom combinators are plain functions of their input, which doesn't leave
//! room for the mutable, monotonically-growing state a [`Builder`] needs as
//! recursion descends into groups and alternatives. Each grammar rule here
//! therefore takes the builder as an explicit `&RefCell<Builder>` parameter
//! instead of capturing it in a closure; recursive calls are wrapped in a
//! closure only at the point nom's `alt`/`many1`/etc. need one.

use crate::alphabet::is_literal;
use crate::error::PatternError;
use crate::nfa::{Builder, Fragment, Nfa};
use nom::branch::alt;
use nom::character::complete::{char as nom_char, one_of, satisfy};
use nom::combinator::opt;
use nom::multi::{many1, separated_list1};
use nom::sequence::delimited;
use nom::IResult;
use std::cell::RefCell;

/// Parses an already-validated, trimmed pattern into a finished [`Nfa`].
pub(crate) fn parse_pattern(input: &str) -> Result<Nfa, PatternError> {
    let builder = RefCell::new(Builder::new());
    match alternation(&builder, input) {
        Ok((rest, fragment)) if rest.is_empty() => Ok(builder.into_inner().finish(fragment)),
        Ok((rest, _)) => Err(PatternError::Internal(format!(
            "validator accepted pattern but parser left unconsumed input: {rest:?}"
        ))),
        Err(e) => Err(PatternError::Internal(format!(
            "validator accepted pattern but parser rejected it: {e}"
        ))),
    }
}

fn alternation<'a>(b: &RefCell<Builder>, input: &'a str) -> IResult<&'a str, Fragment> {
    let (rest, mut alternatives) = separated_list1(nom_char('|'), |i| sequence(b, i))(input)?;
    let mut fragment = alternatives.remove(0);
    for next in alternatives {
        fragment = b.borrow_mut().alternate(fragment, next);
    }
    Ok((rest, fragment))
}

fn sequence<'a>(b: &RefCell<Builder>, input: &'a str) -> IResult<&'a str, Fragment> {
    let (rest, mut pieces) = many1(|i| postfix_expr(b, i))(input)?;
    let mut fragment = pieces.remove(0);
    for next in pieces {
        fragment = b.borrow_mut().concat(fragment, next);
    }
    Ok((rest, fragment))
}

fn postfix_expr<'a>(b: &RefCell<Builder>, input: &'a str) -> IResult<&'a str, Fragment> {
    let (rest, atom_fragment) = atom(b, input)?;
    let (rest, op) = opt(one_of("*+?"))(rest)?;
    let fragment = match op {
        Some('*') => b.borrow_mut().star(atom_fragment),
        Some('+') => b.borrow_mut().plus(atom_fragment),
        Some('?') => b.borrow_mut().optional(atom_fragment),
        Some(_) => unreachable!("one_of(\"*+?\") can't yield anything else"),
        None => atom_fragment,
    };
    Ok((rest, fragment))
}

fn atom<'a>(b: &RefCell<Builder>, input: &'a str) -> IResult<&'a str, Fragment> {
    alt((|i| group(b, i), |i| char_class(b, i), |i| literal(b, i)))(input)
}

fn group<'a>(b: &RefCell<Builder>, input: &'a str) -> IResult<&'a str, Fragment> {
    delimited(nom_char('('), |i| alternation(b, i), nom_char(')'))(input)
}

fn literal<'a>(b: &RefCell<Builder>, input: &'a str) -> IResult<&'a str, Fragment> {
    let (rest, c) = satisfy(is_literal)(input)?;
    Ok((rest, b.borrow_mut().literal(c)))
}

/// A character class: `[` followed by one or more literals or `lo-hi`
/// ranges, closed by `]`. Desugars to an alternation of every character it
/// denotes, built left-to-right in the order members appear (ranges are
/// expanded in ascending codepoint order).
fn char_class<'a>(b: &RefCell<Builder>, input: &'a str) -> IResult<&'a str, Fragment> {
    let (rest, members) = delimited(nom_char('['), many1(class_member), nom_char(']'))(input)?;

    let mut chars = members.into_iter().flatten();
    let first = chars.next().expect("many1 guarantees at least one member");
    let mut fragment = b.borrow_mut().literal(first);
    for c in chars {
        let next = b.borrow_mut().literal(c);
        fragment = b.borrow_mut().alternate(fragment, next);
    }
    Ok((rest, fragment))
}

/// One member of a character class, expanded to the characters it covers:
/// a bare literal yields one character, a range yields every character
/// from `lo` to `hi` inclusive.
fn class_member(input: &str) -> IResult<&str, Vec<char>> {
    let (rest, lo) = satisfy(is_literal)(input)?;
    let (rest, hi) = opt(nom::sequence::preceded(nom_char('-'), satisfy(is_literal)))(rest)?;
    match hi {
        Some(hi) => Ok((rest, (lo..=hi).collect())),
        None => Ok((rest, vec![lo])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nfa(pattern: &str) -> Nfa {
        parse_pattern(pattern).expect("pattern should parse")
    }

    #[test]
    fn literal_sequence() {
        let n = nfa("abc");
        assert!(n.matches("abc"));
        assert!(!n.matches("ab"));
    }

    #[test]
    fn alternation_picks_either_branch() {
        let n = nfa("cat|dog");
        assert!(n.matches("cat"));
        assert!(n.matches("dog"));
        assert!(!n.matches("catdog"));
    }

    #[test]
    fn grouping_scopes_postfix_operators() {
        let n = nfa("(ab)+c");
        assert!(n.matches("abc"));
        assert!(n.matches("ababc"));
        assert!(!n.matches("ac"));
    }

    #[test]
    fn character_class_matches_any_member() {
        let n = nfa("[abc]x");
        assert!(n.matches("ax"));
        assert!(n.matches("bx"));
        assert!(n.matches("cx"));
        assert!(!n.matches("dx"));
    }

    #[test]
    fn character_class_range_expands_inclusive() {
        let n = nfa("[a-c]");
        assert!(n.matches("a"));
        assert!(n.matches("b"));
        assert!(n.matches("c"));
        assert!(!n.matches("d"));
    }

    #[test]
    fn optional_and_star_compose() {
        let n = nfa("ab?c*");
        assert!(n.matches("ac"));
        assert!(n.matches("abc"));
        assert!(n.matches("abccc"));
        assert!(!n.matches("abbc"));
    }
}
