//! Union compilation and the constructor factory.
//!
//! A union starts as a [`UnionSchema`] (tags mapped to payload field
//! names) and is compiled by [`Union::build`] into a closed set of
//! variants, each with a shared [`VariantShape`]. The compiled union
//! hands out one [`Ctor`] per tag; constructors are the only source of
//! tagged values, which is what keeps every tag inside the declared set.

mod ctor;
mod layout;
mod schema;

#[cfg(test)]
mod tests;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::errors::{self, UnionResult};
use crate::tag::Tag;
use crate::value::Heap;

pub use ctor::{Ctor, Fields};
pub use layout::{FieldLayout, VariantShape};
pub use schema::UnionSchema;

/// A compiled union: a closed set of variants keyed by tag.
#[derive(Clone, Debug)]
pub struct Union {
    name: Tag,
    /// Variant shapes in declaration order.
    shapes: Vec<Heap<VariantShape>>,
    /// Map from tag to index in `shapes`.
    by_tag: FxHashMap<Tag, usize>,
}

impl Union {
    /// Compile a schema into a union.
    ///
    /// Rejects schemas that declare no variants, declare a tag twice, or
    /// declare a payload field twice within one variant.
    pub fn build(schema: UnionSchema) -> UnionResult<Union> {
        let (name, variants) = schema.into_parts();
        let name = Tag::new(&name);
        if variants.is_empty() {
            return Err(errors::empty_union(name.as_str()));
        }
        let mut shapes = Vec::with_capacity(variants.len());
        let mut by_tag = FxHashMap::default();
        for decl in variants {
            let tag = Tag::new(&decl.tag);
            if by_tag.insert(tag.clone(), shapes.len()).is_some() {
                return Err(errors::duplicate_tag(name.as_str(), tag.as_str()));
            }
            let shape = VariantShape::new(name.clone(), tag, decl.fields)?;
            shapes.push(Heap::new(shape));
        }
        debug!(union = %name, variants = shapes.len(), "built union");
        Ok(Union {
            name,
            shapes,
            by_tag,
        })
    }

    /// The union's name.
    pub fn name(&self) -> &Tag {
        &self.name
    }

    /// Get the constructor for a tag.
    ///
    /// Returns `None` for tags the union does not declare.
    pub fn ctor(&self, tag: &str) -> Option<Ctor> {
        let index = *self.by_tag.get(tag)?;
        Some(Ctor::new(self.shapes[index].clone()))
    }

    /// Check whether a tag is declared by this union.
    pub fn contains(&self, tag: &str) -> bool {
        self.by_tag.contains_key(tag)
    }

    /// Iterate over the declared tags in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.shapes.iter().map(|shape| shape.tag())
    }

    /// Number of declared variants.
    pub fn variant_count(&self) -> usize {
        self.shapes.len()
    }
}
