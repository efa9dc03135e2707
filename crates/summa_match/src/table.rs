//! Arm tables consumed by dispatch.
//!
//! A table maps tags to arms, with one dedicated slot for a fallback arm
//! that applies when no tag matches. The fallback lives outside the tag map,
//! so it can never collide with a variant name.

use std::fmt;

use rustc_hash::FxHashMap;
use summa_core::TaggedValue;

/// Boxed arm body invoked with the scrutinee.
pub type Handler<'h, T> = Box<dyn FnOnce(&TaggedValue) -> T + 'h>;

/// How a table answered a tag lookup.
pub(crate) enum Resolution<T> {
    /// An arm is registered for the tag itself.
    Exact(T),
    /// Only the fallback arm applies.
    Fallback(T),
    /// No arm applies.
    Unmatched,
}

/// Table mapping tags to ready-made outcome values.
///
/// An entry registered for a tag wins over the fallback even when the
/// entry's payload is itself empty, as with `Option` outcomes:
///
/// ```text
/// let table: ValueTable<Option<i32>> = ValueTable::new()
///     .on("Err", None)
///     .otherwise(Some(0));
/// // Resolving "Err" yields None, not the fallback Some(0).
/// ```
#[derive(Clone)]
pub struct ValueTable<T> {
    entries: FxHashMap<Box<str>, T>,
    otherwise: Option<T>,
}

impl<T> ValueTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        ValueTable {
            entries: FxHashMap::default(),
            otherwise: None,
        }
    }

    /// Register an outcome for a tag. Registering a tag again replaces the
    /// earlier entry.
    #[must_use]
    pub fn on(mut self, tag: &str, outcome: T) -> Self {
        self.entries.insert(tag.into(), outcome);
        self
    }

    /// Register the fallback outcome for tags with no entry of their own.
    #[must_use]
    pub fn otherwise(mut self, outcome: T) -> Self {
        self.otherwise = Some(outcome);
        self
    }

    /// Whether a tag has an entry of its own.
    pub fn covers(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Whether a fallback outcome is registered.
    pub fn has_otherwise(&self) -> bool {
        self.otherwise.is_some()
    }

    pub(crate) fn resolve(mut self, tag: &str) -> Resolution<T> {
        if let Some(outcome) = self.entries.remove(tag) {
            return Resolution::Exact(outcome);
        }
        match self.otherwise {
            Some(outcome) => Resolution::Fallback(outcome),
            None => Resolution::Unmatched,
        }
    }
}

impl<T> Default for ValueTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ValueTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueTable")
            .field("arms", &self.entries.len())
            .field("otherwise", &self.otherwise.is_some())
            .finish()
    }
}

/// Table mapping tags to handler closures.
///
/// Handlers receive the scrutinee, so an arm can read the payload of the
/// variant it matched. Each handler runs at most once per dispatch.
pub struct CaseTable<'h, T> {
    arms: FxHashMap<Box<str>, Handler<'h, T>>,
    otherwise: Option<Handler<'h, T>>,
}

impl<'h, T> CaseTable<'h, T> {
    /// Create an empty table.
    pub fn new() -> Self {
        CaseTable {
            arms: FxHashMap::default(),
            otherwise: None,
        }
    }

    /// Register a handler for a tag. Registering a tag again replaces the
    /// earlier arm.
    #[must_use]
    pub fn on(mut self, tag: &str, handler: impl FnOnce(&TaggedValue) -> T + 'h) -> Self {
        self.arms.insert(tag.into(), Box::new(handler));
        self
    }

    /// Register the fallback handler for tags with no arm of their own.
    #[must_use]
    pub fn otherwise(mut self, handler: impl FnOnce(&TaggedValue) -> T + 'h) -> Self {
        self.otherwise = Some(Box::new(handler));
        self
    }

    /// Whether a tag has an arm of its own.
    pub fn covers(&self, tag: &str) -> bool {
        self.arms.contains_key(tag)
    }

    /// Whether a fallback handler is registered.
    pub fn has_otherwise(&self) -> bool {
        self.otherwise.is_some()
    }

    pub(crate) fn resolve(mut self, tag: &str) -> Resolution<Handler<'h, T>> {
        if let Some(handler) = self.arms.remove(tag) {
            return Resolution::Exact(handler);
        }
        match self.otherwise {
            Some(handler) => Resolution::Fallback(handler),
            None => Resolution::Unmatched,
        }
    }
}

impl<T> Default for CaseTable<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CaseTable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseTable")
            .field("arms", &self.arms.len())
            .field("otherwise", &self.otherwise.is_some())
            .finish()
    }
}
