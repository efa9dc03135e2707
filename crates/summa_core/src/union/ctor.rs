//! Variant constructors and payload assembly.

use smallvec::SmallVec;

use crate::errors::{self, UnionResult};
use crate::tag::Tag;
use crate::union::layout::VariantShape;
use crate::value::{Heap, TaggedValue, Value};

// Fields

/// Payload fields supplied to a constructor, in any order.
///
/// # Example
///
/// ```text
/// let fields = Fields::new()
///     .with("width", Value::Int(3))
///     .with("height", Value::Int(4));
///
/// // or directly from an array:
/// ctor.construct([("radius", Value::Int(3))])?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct Fields {
    entries: SmallVec<[(Box<str>, Value); 4]>,
}

impl Fields {
    /// An empty field set, for fieldless variants.
    pub fn new() -> Self {
        Fields {
            entries: SmallVec::new(),
        }
    }

    /// Add a field.
    #[must_use]
    pub fn with(mut self, name: impl Into<Box<str>>, value: Value) -> Self {
        self.entries.push((name.into(), value));
        self
    }

    /// Number of supplied fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no fields were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, Value); N]> for Fields {
    fn from(entries: [(&str, Value); N]) -> Self {
        Fields {
            entries: entries
                .into_iter()
                .map(|(name, value)| (Box::from(name), value))
                .collect(),
        }
    }
}

impl FromIterator<(String, Value)> for Fields {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Fields {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into_boxed_str(), value))
                .collect(),
        }
    }
}

// Ctor

/// A constructor for one variant of a compiled union.
///
/// Obtained from `Union::ctor`. Construction is pure and side-effect-free:
/// the same fields always produce structurally equal tagged values.
#[derive(Clone, Debug)]
pub struct Ctor {
    shape: Heap<VariantShape>,
}

impl Ctor {
    pub(crate) fn new(shape: Heap<VariantShape>) -> Self {
        Ctor { shape }
    }

    /// The tag this constructor stamps.
    pub fn tag(&self) -> &Tag {
        self.shape.tag()
    }

    /// The union the constructed values belong to.
    pub fn union_name(&self) -> &Tag {
        self.shape.union_name()
    }

    /// Construct a tagged value from payload fields.
    ///
    /// Every declared field must be supplied exactly once and nothing
    /// else may be supplied. Fields can arrive in any order; the payload
    /// lands in declared order.
    pub fn construct(&self, fields: impl Into<Fields>) -> UnionResult<TaggedValue> {
        let fields: Fields = fields.into();
        let layout = self.shape.layout();
        let mut slots: Vec<Option<Value>> = vec![None; layout.len()];
        for (name, value) in fields.entries {
            let Some(index) = layout.get_index(&name) else {
                return Err(errors::unknown_field(
                    self.union_name().as_str(),
                    self.tag().as_str(),
                    &name,
                ));
            };
            if slots[index].is_some() {
                return Err(errors::duplicate_field_value(
                    self.union_name().as_str(),
                    self.tag().as_str(),
                    &name,
                ));
            }
            slots[index] = Some(value);
        }
        if let Some(missing) = slots.iter().position(Option::is_none) {
            return Err(errors::missing_field(
                self.union_name().as_str(),
                self.tag().as_str(),
                layout.name_at(missing),
            ));
        }
        let values: Vec<Value> = slots.into_iter().flatten().collect();
        Ok(TaggedValue::from_parts(self.shape.clone(), values))
    }
}
