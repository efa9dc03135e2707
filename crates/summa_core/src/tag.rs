//! Variant tag symbols.
//!
//! A `Tag` identifies one member of a closed union. Tags are minted by
//! `Union::build` and flow outward through constructors and tagged values;
//! external code never creates one directly, which is what keeps a tagged
//! value's tag inside its union's declared set.

use std::borrow::Borrow;
use std::fmt;

use crate::value::Heap;

/// A variant tag: an immutable string naming one variant of a union.
///
/// Cloning is cheap (the underlying string is shared), and every tagged
/// value of a given variant shares the same allocation, so equality checks
/// between them short-circuit on the pointer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag(Heap<str>);

impl Tag {
    pub(crate) fn new(name: &str) -> Self {
        Tag(Heap::str(name))
    }

    /// The tag's name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self.as_str())
    }
}

impl AsRef<str> for Tag {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// Borrow lets `&str` keys look tags up in hash maps directly.
impl Borrow<str> for Tag {
    #[inline]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Tag {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Tag {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
