//! Tagged values: one union variant plus its payload.

use std::fmt;

use crate::tag::Tag;
use crate::union::VariantShape;

use super::{Heap, Value};


/// A constructed value of some union variant.
///
/// Pairs a shared [`VariantShape`] (union name, tag, field layout) with
/// the payload values for that variant. Immutable once constructed;
/// cloning bumps two reference counts.
///
/// The only way to obtain one is through a `Ctor`, which is what
/// guarantees the tag is a member of its union's declared set and the
/// payload holds exactly the declared fields.
#[derive(Clone)]
pub struct TaggedValue {
    shape: Heap<VariantShape>,
    /// Payload values in the layout's declared order.
    fields: Heap<Vec<Value>>,
}

impl TaggedValue {
    pub(crate) fn from_parts(shape: Heap<VariantShape>, fields: Vec<Value>) -> Self {
        TaggedValue {
            shape,
            fields: Heap::new(fields),
        }
    }

    /// The variant's tag.
    #[inline]
    pub fn tag(&self) -> &Tag {
        self.shape.tag()
    }

    /// The name of the union this value belongs to.
    #[inline]
    pub fn union_name(&self) -> &Tag {
        self.shape.union_name()
    }

    /// Get a payload field by name with O(1) lookup.
    pub fn field(&self, name: &str) -> Option<&Value> {
        let index = self.shape.layout().get_index(name)?;
        self.fields.get(index)
    }

    /// Iterate over payload fields in declared order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.shape.layout().names().zip(self.fields.iter())
    }

    /// Number of payload fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True for fieldless variants.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl PartialEq for TaggedValue {
    /// Structural equality: same union, same tag, equal payloads.
    fn eq(&self, other: &Self) -> bool {
        self.union_name() == other.union_name()
            && self.tag() == other.tag()
            && self.fields == other.fields
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())?;
        if self.shape.layout().is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, (name, value)) in self.fields().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TaggedValue({}::{}, {:?})",
            self.union_name(),
            self.tag(),
            &*self.fields
        )
    }
}
