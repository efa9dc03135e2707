//! Union descriptors: the declaration a union is compiled from.

use smallvec::SmallVec;

/// Payload field names for one variant declaration.
///
/// Variants rarely declare more than a handful of fields, so the list
/// stays inline.
pub(crate) type FieldNames = SmallVec<[Box<str>; 4]>;

/// One declared variant: a tag and its payload field names.
#[derive(Clone, Debug)]
pub(crate) struct VariantDecl {
    pub(crate) tag: Box<str>,
    pub(crate) fields: FieldNames,
}

/// Describes a union to be compiled: a name plus one declaration per
/// variant, each mapping a tag to its payload field names.
///
/// The schema itself performs no validation; `Union::build` rejects
/// duplicate tags, duplicate fields, and empty unions when it compiles
/// the schema.
///
/// # Example
///
/// ```text
/// let schema = UnionSchema::new("Shape")
///     .variant("Circle", ["radius"])
///     .variant("Rect", ["width", "height"])
///     .variant("Point", []);
/// ```
#[derive(Clone, Debug)]
pub struct UnionSchema {
    name: Box<str>,
    variants: SmallVec<[VariantDecl; 4]>,
}

impl UnionSchema {
    /// Start a schema for a union with the given name.
    pub fn new(name: impl Into<Box<str>>) -> Self {
        UnionSchema {
            name: name.into(),
            variants: SmallVec::new(),
        }
    }

    /// Declare a variant with its payload field names.
    ///
    /// Declaration order is preserved through compilation.
    #[must_use]
    pub fn variant<'a>(
        mut self,
        tag: impl Into<Box<str>>,
        fields: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        self.variants.push(VariantDecl {
            tag: tag.into(),
            fields: fields.into_iter().map(Box::from).collect(),
        });
        self
    }

    /// The declared union name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn into_parts(self) -> (Box<str>, SmallVec<[VariantDecl; 4]>) {
        (self.name, self.variants)
    }
}
