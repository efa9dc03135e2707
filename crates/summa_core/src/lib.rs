#![deny(clippy::arithmetic_side_effects)]
//! Summa Core - runtime tagged-union value model.
//!
//! This crate provides:
//! - Payload value types (`Value`, `Heap`, `TaggedValue`)
//! - Union schemas and compiled unions (`UnionSchema`, `Union`)
//! - Per-variant constructors (`Ctor`, `Fields`)
//! - Construction error types (`UnionError`, `UnionResult`)
//!
//! # Architecture
//!
//! A union is declared as a [`UnionSchema`] and compiled by
//! [`Union::build`] into a closed set of variants. The compiled union is
//! the only source of [`Ctor`]s, and constructors are the only source of
//! [`TaggedValue`]s; together that keeps every value's tag inside its
//! union's declared set and its payload aligned with the declared layout.
//!
//! Dispatch over tagged values lives in the `summa_match` crate.

mod errors;
mod tag;
mod union;
mod value;

pub use errors::{UnionError, UnionResult};
pub use tag::Tag;
pub use union::{Ctor, FieldLayout, Fields, Union, UnionSchema, VariantShape};
pub use value::{Heap, TaggedValue, Value};

// Re-export error constructors for use by other crates
pub use errors::{
    duplicate_field, duplicate_field_value, duplicate_tag, empty_union, missing_field,
    unknown_field,
};
