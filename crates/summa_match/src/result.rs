//! The builtin success-or-failure union.
//!
//! Every [`ResultValue`] in the process belongs to one shared `Result`
//! union with an `Err` and an `Ok` variant, each carrying a single `val`
//! field. The accessors do not inspect tags by hand: they dispatch through
//! [`match_value`] with a two-arm table.

use std::fmt;
use std::panic::panic_any;
use std::sync::OnceLock;

use summa_core::{TaggedValue, Union, UnionSchema, Value};

use crate::expr::match_value;
use crate::table::CaseTable;

/// Tag carried by failure values.
pub const TAG_ERR: &str = "Err";
/// Tag carried by success values.
pub const TAG_OK: &str = "Ok";
/// Field holding the payload on both variants.
pub const FIELD_VAL: &str = "val";

// Global singleton for the Ok/Err union
static RESULT_UNION: OnceLock<Union> = OnceLock::new();

/// Get the shared Ok/Err union (lazily compiled).
pub fn result_union() -> &'static Union {
    RESULT_UNION.get_or_init(|| {
        let schema = UnionSchema::new("Result")
            .variant(TAG_ERR, [FIELD_VAL])
            .variant(TAG_OK, [FIELD_VAL]);
        match Union::build(schema) {
            Ok(union) => union,
            Err(_) => unreachable!("result schema declares two distinct variants"),
        }
    })
}

/// A success-or-failure value over the shared Ok/Err union.
#[derive(Clone, PartialEq)]
pub struct ResultValue {
    inner: TaggedValue,
}

impl ResultValue {
    /// Wrap a success payload.
    pub fn ok(value: Value) -> Self {
        ResultValue {
            inner: construct(TAG_OK, value),
        }
    }

    /// Wrap a failure payload.
    pub fn err(error: Value) -> Self {
        ResultValue {
            inner: construct(TAG_ERR, error),
        }
    }

    /// Whether this holds a success payload.
    pub fn is_ok(&self) -> bool {
        self.inner.tag() == TAG_OK
    }

    /// Whether this holds a failure payload.
    pub fn is_err(&self) -> bool {
        self.inner.tag() == TAG_ERR
    }

    /// Borrow the underlying tagged value.
    pub fn as_tagged(&self) -> &TaggedValue {
        &self.inner
    }

    /// Unwrap into the underlying tagged value.
    #[must_use]
    pub fn into_tagged(self) -> TaggedValue {
        self.inner
    }

    /// The success payload.
    ///
    /// # Panics
    ///
    /// Panics with the failure payload itself as the panic value if this
    /// is an `Err`.
    pub fn unwrap(&self) -> Value {
        self.dispatch(
            CaseTable::new()
                .on(TAG_ERR, |v: &TaggedValue| panic_any(payload(v).clone()))
                .on(TAG_OK, |v: &TaggedValue| payload(v).clone()),
        )
    }

    /// The success payload.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is an `Err`.
    pub fn expect(&self, message: &str) -> Value {
        self.dispatch(
            CaseTable::new()
                .on(TAG_ERR, |_: &TaggedValue| panic!("{message}"))
                .on(TAG_OK, |v: &TaggedValue| payload(v).clone()),
        )
    }

    /// The success payload, or `fallback` if this is an `Err`.
    pub fn unwrap_or(&self, fallback: Value) -> Value {
        self.dispatch(
            CaseTable::new()
                .on(TAG_ERR, move |_| fallback)
                .on(TAG_OK, |v: &TaggedValue| payload(v).clone()),
        )
    }

    fn dispatch(&self, table: CaseTable<'_, Value>) -> Value {
        match match_value(&self.inner).case(table) {
            Ok(value) => value,
            Err(_) => unreachable!("err and ok arms cover the result union"),
        }
    }
}

impl From<Result<Value, Value>> for ResultValue {
    fn from(result: Result<Value, Value>) -> Self {
        match result {
            Ok(value) => ResultValue::ok(value),
            Err(error) => ResultValue::err(error),
        }
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResultValue({:?})", self.inner)
    }
}

fn construct(tag: &str, payload: Value) -> TaggedValue {
    let Some(ctor) = result_union().ctor(tag) else {
        unreachable!("result union declares {tag}")
    };
    match ctor.construct([(FIELD_VAL, payload)]) {
        Ok(value) => value,
        Err(_) => unreachable!("result variants take a single {FIELD_VAL} field"),
    }
}

fn payload(value: &TaggedValue) -> &Value {
    let Some(field) = value.field(FIELD_VAL) else {
        unreachable!("result variants carry a {FIELD_VAL} field")
    };
    field
}
