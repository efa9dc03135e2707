//! Compiled variant shapes and payload field layouts.

use rustc_hash::FxHashMap;

use crate::errors::{self, UnionResult};
use crate::tag::Tag;
use crate::union::schema::FieldNames;

// FieldLayout

/// Layout information for O(1) payload field access.
///
/// Built once per variant when the union is compiled and shared by every
/// tagged value of that variant. Values store their payload as a plain
/// vector indexed through this layout, so field names live once per union
/// rather than once per value.
#[derive(Clone, Debug)]
pub struct FieldLayout {
    /// Map from field name to index.
    indices: FxHashMap<Box<str>, usize>,
    /// Field names in declared order.
    names: Vec<Box<str>>,
}

impl FieldLayout {
    /// Get the index of a field by name.
    pub fn get_index(&self, field: &str) -> Option<usize> {
        self.indices.get(field).copied()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the layout has no fields.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over field names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(AsRef::as_ref)
    }

    pub(crate) fn name_at(&self, index: usize) -> &str {
        &self.names[index]
    }
}

// VariantShape

/// The compiled shape of one union variant: its tag, the union it belongs
/// to, and the layout of its payload fields.
#[derive(Clone, Debug)]
pub struct VariantShape {
    union_name: Tag,
    tag: Tag,
    layout: FieldLayout,
}

impl VariantShape {
    /// Compile a variant declaration, rejecting duplicate field names.
    pub(crate) fn new(union_name: Tag, tag: Tag, field_names: FieldNames) -> UnionResult<Self> {
        let mut indices = FxHashMap::default();
        for (index, name) in field_names.iter().enumerate() {
            if indices.insert(name.clone(), index).is_some() {
                return Err(errors::duplicate_field(
                    union_name.as_str(),
                    tag.as_str(),
                    name,
                ));
            }
        }
        Ok(VariantShape {
            union_name,
            tag,
            layout: FieldLayout {
                indices,
                names: field_names.into_vec(),
            },
        })
    }

    /// The union this variant belongs to.
    pub fn union_name(&self) -> &Tag {
        &self.union_name
    }

    /// The variant's tag.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// The payload field layout.
    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }
}
