//! Error kinds surfaced by the core (spec §7): pattern syntax, batch format
//! and internal invariant violations. CLI-level usage errors live in
//! `thompson-cli` since they concern argument parsing, not the core.

use thiserror::Error;

/// Everything that can go wrong while validating, parsing or compiling a
/// pattern. Every variant carries the byte offset into the (trimmed)
/// pattern where the problem was detected, for user-visible diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    EmptyPattern,

    #[error("illegal character '{0}' at position {1}")]
    IllegalCharacter(char, usize),

    #[error("unbalanced '{0}' at position {1}: never closed")]
    UnbalancedBracket(char, usize),

    #[error("unexpected '{0}' at position {1}: no matching opening bracket")]
    UnmatchedClosingBracket(char, usize),

    #[error("operator '{0}' at position {1} has no preceding literal, ')' or ']' to apply to")]
    MisplacedOperator(char, usize),

    #[error("'|' at position {0} has no expression on one of its sides")]
    MisplacedAlternation(usize),

    #[error("ill-formed character range at position {0}: {1}")]
    IllFormedRange(usize, String),

    /// The validator accepted the pattern but the parser/builder then hit a
    /// token it didn't expect. Per spec §4.3, this indicates a validator bug,
    /// not a malformed pattern, and should never be observed.
    #[error("internal invariant violation: {0}")]
    Internal(String),
}

/// Batch JSON input that doesn't satisfy the schema of spec §6.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("batch input is not valid JSON or does not match the expected schema: {0}")]
    Schema(#[from] serde_json::Error),
}
