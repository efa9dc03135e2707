//! Error types for union compilation and value construction.
//!
//! Factory functions (e.g. `duplicate_tag()`) are the public API; each
//! populates one structured variant so callers can match on the error
//! instead of parsing message strings.

use std::fmt;

/// Result of union compilation or value construction.
pub type UnionResult<T> = Result<T, UnionError>;

/// Error raised while compiling a schema or constructing a tagged value.
///
/// The first three variants are schema errors caught by `Union::build`;
/// the rest are construction errors caught by `Ctor::construct` when the
/// supplied field set does not match the variant's declared layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnionError {
    /// Schema declares the same tag twice.
    DuplicateTag { union: String, tag: String },
    /// A variant declares the same payload field twice.
    DuplicateField {
        union: String,
        tag: String,
        field: String,
    },
    /// Schema declares no variants at all.
    EmptyUnion { union: String },
    /// Constructor called without a declared field.
    MissingField {
        union: String,
        tag: String,
        field: String,
    },
    /// Constructor called with a field the variant does not declare.
    UnknownField {
        union: String,
        tag: String,
        field: String,
    },
    /// Constructor given the same field twice.
    DuplicateFieldValue {
        union: String,
        tag: String,
        field: String,
    },
}

impl fmt::Display for UnionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTag { union, tag } => {
                write!(f, "duplicate variant tag {tag} in union {union}")
            }
            Self::DuplicateField { union, tag, field } => {
                write!(f, "duplicate field {field} on variant {union}::{tag}")
            }
            Self::EmptyUnion { union } => write!(f, "union {union} declares no variants"),
            Self::MissingField { union, tag, field } => {
                write!(f, "missing field {field} constructing {union}::{tag}")
            }
            Self::UnknownField { union, tag, field } => {
                write!(f, "unknown field {field} constructing {union}::{tag}")
            }
            Self::DuplicateFieldValue { union, tag, field } => {
                write!(f, "field {field} supplied twice constructing {union}::{tag}")
            }
        }
    }
}

impl std::error::Error for UnionError {}

// Schema Errors

/// Schema declares the same tag twice.
#[cold]
pub fn duplicate_tag(union: &str, tag: &str) -> UnionError {
    UnionError::DuplicateTag {
        union: union.to_string(),
        tag: tag.to_string(),
    }
}

/// A variant declares the same payload field twice.
#[cold]
pub fn duplicate_field(union: &str, tag: &str, field: &str) -> UnionError {
    UnionError::DuplicateField {
        union: union.to_string(),
        tag: tag.to_string(),
        field: field.to_string(),
    }
}

/// Schema declares no variants.
#[cold]
pub fn empty_union(union: &str) -> UnionError {
    UnionError::EmptyUnion {
        union: union.to_string(),
    }
}

// Construction Errors

/// Constructor called without a declared field.
#[cold]
pub fn missing_field(union: &str, tag: &str, field: &str) -> UnionError {
    UnionError::MissingField {
        union: union.to_string(),
        tag: tag.to_string(),
        field: field.to_string(),
    }
}

/// Constructor called with an undeclared field.
#[cold]
pub fn unknown_field(union: &str, tag: &str, field: &str) -> UnionError {
    UnionError::UnknownField {
        union: union.to_string(),
        tag: tag.to_string(),
        field: field.to_string(),
    }
}

/// Constructor given the same field twice.
#[cold]
pub fn duplicate_field_value(union: &str, tag: &str, field: &str) -> UnionError {
    UnionError::DuplicateFieldValue {
        union: union.to_string(),
        tag: tag.to_string(),
        field: field.to_string(),
    }
}
