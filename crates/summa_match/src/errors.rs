//! Errors raised by tag dispatch.

use std::fmt;

/// Result alias for dispatch operations.
pub type MatchResult<T> = Result<T, MatchError>;

/// Error from dispatching over a tagged value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// No arm covers the scrutinee's tag and the table has no fallback.
    UnmatchedTag {
        /// Union the scrutinee belongs to.
        union: String,
        /// Tag no arm covered.
        tag: String,
    },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedTag { union, tag } => {
                write!(f, "non-exhaustive match: no arm for tag {tag} in union {union}")
            }
        }
    }
}

impl std::error::Error for MatchError {}

/// Create an unmatched-tag error.
#[cold]
pub fn unmatched_tag(union: &str, tag: &str) -> MatchError {
    MatchError::UnmatchedTag {
        union: union.to_string(),
        tag: tag.to_string(),
    }
}
