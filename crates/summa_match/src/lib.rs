#![deny(clippy::arithmetic_side_effects)]

//! Tag dispatch over runtime tagged values.
//!
//! This crate provides the dispatch layer for `summa_core` values:
//!
//! - [`match_value`]: Begin a dispatch over one tagged value
//! - [`ValueTable`]: Arms as ready-made outcome values, consumed by `with`
//! - [`CaseTable`]: Arms as handler closures, consumed by `case`
//! - [`ResultValue`]: Success-or-failure values over a shared Ok/Err union,
//!   with accessors built on the dispatch machinery
//!
//! A dispatch performs one table lookup and runs at most one arm. The arm
//! registered for the scrutinee's exact tag always wins over the fallback
//! arm; a dispatch with neither reports the unmatched tag as a
//! [`MatchError`].
//!
//! # Re-exports
//!
//! This crate re-exports the value types from `summa_core` for convenience:
//! - `Value`, `TaggedValue`, `Tag`, `Heap`
//! - `Union`, `UnionSchema`, `Ctor`, `Fields`
//! - `UnionError`, `UnionResult`

mod errors;
mod expr;
mod result;
mod table;

// Re-export value types from summa_core
pub use summa_core::{
    Ctor, FieldLayout, Fields, Heap, Tag, TaggedValue, Union, UnionError, UnionResult,
    UnionSchema, Value, VariantShape,
};

pub use errors::{unmatched_tag, MatchError, MatchResult};
pub use expr::{match_value, MatchExpr};
pub use result::{result_union, ResultValue, FIELD_VAL, TAG_ERR, TAG_OK};
pub use table::{CaseTable, Handler, ValueTable};
