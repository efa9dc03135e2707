//! The dispatch expression.
//!
//! [`match_value`] starts a dispatch over one tagged value. The expression
//! borrows its scrutinee and is consumed by a single [`MatchExpr::with`] or
//! [`MatchExpr::case`] call, which performs one table lookup and runs at
//! most one arm.

use tracing::trace;

use summa_core::TaggedValue;

use crate::errors::{self, MatchError, MatchResult};
use crate::table::{CaseTable, Resolution, ValueTable};

/// Begin a dispatch over `value`.
#[must_use]
pub fn match_value(value: &TaggedValue) -> MatchExpr<'_> {
    MatchExpr { value }
}

/// A dispatch awaiting its arm table.
#[derive(Debug)]
pub struct MatchExpr<'a> {
    value: &'a TaggedValue,
}

impl MatchExpr<'_> {
    /// Pick the outcome registered for the scrutinee's tag.
    ///
    /// An entry for the exact tag wins over the fallback, whatever the
    /// entry's payload. With no entry and no fallback, reports the
    /// unmatched tag.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(union = %self.value.union_name(), tag = %self.value.tag())
    )]
    pub fn with<T>(self, table: ValueTable<T>) -> MatchResult<T> {
        match table.resolve(self.value.tag().as_str()) {
            Resolution::Exact(outcome) => Ok(outcome),
            Resolution::Fallback(outcome) => {
                trace!("fallback arm selected");
                Ok(outcome)
            }
            Resolution::Unmatched => Err(self.unmatched()),
        }
    }

    /// Invoke the handler registered for the scrutinee's tag.
    ///
    /// Exactly one handler runs per dispatch: the arm for the exact tag if
    /// one is registered, the fallback otherwise. The handler receives the
    /// scrutinee.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(union = %self.value.union_name(), tag = %self.value.tag())
    )]
    pub fn case<T>(self, table: CaseTable<'_, T>) -> MatchResult<T> {
        match table.resolve(self.value.tag().as_str()) {
            Resolution::Exact(handler) => Ok(handler(self.value)),
            Resolution::Fallback(handler) => {
                trace!("fallback arm selected");
                Ok(handler(self.value))
            }
            Resolution::Unmatched => Err(self.unmatched()),
        }
    }

    fn unmatched(&self) -> MatchError {
        errors::unmatched_tag(self.value.union_name().as_str(), self.value.tag().as_str())
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "tests build fixed unions")]

    use std::cell::Cell;

    use summa_core::{Fields, Union, UnionSchema, Value};

    use super::*;

    fn shape_union() -> Union {
        let schema = UnionSchema::new("Shape")
            .variant("Circle", ["radius"])
            .variant("Rect", ["width", "height"])
            .variant("Point", []);
        Union::build(schema).unwrap()
    }

    fn circle(radius: i64) -> TaggedValue {
        shape_union()
            .ctor("Circle")
            .unwrap()
            .construct([("radius", Value::Int(radius))])
            .unwrap()
    }

    fn point() -> TaggedValue {
        shape_union()
            .ctor("Point")
            .unwrap()
            .construct(Fields::new())
            .unwrap()
    }

    // with: plain outcome tables

    #[test]
    fn test_with_picks_exact_arm() {
        let value = circle(3);
        let outcome = match_value(&value)
            .with(ValueTable::new().on("Circle", "round").on("Rect", "cornered"))
            .unwrap();
        assert_eq!(outcome, "round");
    }

    #[test]
    fn test_with_exact_arm_wins_over_fallback() {
        let value = circle(3);
        let outcome = match_value(&value)
            .with(ValueTable::new().on("Circle", "round").otherwise("other"))
            .unwrap();
        assert_eq!(outcome, "round");
    }

    #[test]
    fn test_with_falls_back_for_uncovered_tag() {
        let value = point();
        let outcome = match_value(&value)
            .with(ValueTable::new().on("Circle", "round").otherwise("other"))
            .unwrap();
        assert_eq!(outcome, "other");
    }

    #[test]
    fn test_with_empty_entry_wins_over_fallback() {
        let value = circle(3);
        let outcome = match_value(&value)
            .with(ValueTable::new().on("Circle", None).otherwise(Some(9)))
            .unwrap();
        assert_eq!(outcome, None::<i32>);
    }

    #[test]
    fn test_with_reports_unmatched_tag() {
        let value = point();
        let err = match_value(&value)
            .with(ValueTable::new().on("Circle", 1))
            .unwrap_err();
        assert_eq!(
            err,
            MatchError::UnmatchedTag {
                union: "Shape".to_string(),
                tag: "Point".to_string(),
            }
        );
    }

    // case: handler tables

    #[test]
    fn test_case_passes_scrutinee_to_handler() {
        let value = circle(3);
        let radius = match_value(&value)
            .case(CaseTable::new().on("Circle", |v: &TaggedValue| v.field("radius").cloned()))
            .unwrap();
        assert_eq!(radius, Some(Value::Int(3)));
    }

    #[test]
    fn test_case_invokes_exactly_one_arm() {
        let calls = Cell::new(0_u32);
        let wrong_arm = Cell::new(false);
        let value = circle(3);
        let outcome = match_value(&value)
            .case(
                CaseTable::new()
                    .on("Circle", |_| {
                        calls.set(calls.get().saturating_add(1));
                        "hit"
                    })
                    .on("Rect", |_| {
                        wrong_arm.set(true);
                        "rect"
                    })
                    .otherwise(|_| {
                        wrong_arm.set(true);
                        "fallback"
                    }),
            )
            .unwrap();
        assert_eq!(outcome, "hit");
        assert_eq!(calls.get(), 1);
        assert!(!wrong_arm.get());
    }

    #[test]
    fn test_case_fallback_receives_scrutinee() {
        let value = point();
        let tag = match_value(&value)
            .case(
                CaseTable::new()
                    .on("Circle", |_| String::from("circle"))
                    .otherwise(|v: &TaggedValue| v.tag().to_string()),
            )
            .unwrap();
        assert_eq!(tag, "Point");
    }

    #[test]
    fn test_case_reports_unmatched_tag() {
        let value = point();
        let err = match_value(&value)
            .case(CaseTable::new().on("Circle", |_| 1))
            .unwrap_err();
        assert_eq!(
            err,
            MatchError::UnmatchedTag {
                union: "Shape".to_string(),
                tag: "Point".to_string(),
            }
        );
    }
}
